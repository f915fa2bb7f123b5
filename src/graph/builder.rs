//! Pathway graph construction

use crate::graph::pathway::{CompetitionNode, PathwayEdge};
use crate::graph::PathwayGraph;
use std::collections::{BTreeMap, HashMap};

/// Builder for incrementally constructing a PathwayGraph.
///
/// Nodes keep their insertion order; edge weights accumulate in an ordered
/// map keyed by the normalized `(low, high)` index pair, so `build` emits a
/// canonical edge sequence regardless of accumulation order.
pub struct GraphBuilder {
    /// Mapping from competition names to node indices
    name_to_index: HashMap<String, u32>,

    /// Nodes in insertion order
    nodes: Vec<CompetitionNode>,

    /// Accumulated weight per unordered node pair
    edge_weights: BTreeMap<(u32, u32), u32>,
}

impl GraphBuilder {
    /// Create a new graph builder with the given node capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            name_to_index: HashMap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            edge_weights: BTreeMap::new(),
        }
    }

    /// Add a competition node, returning its index.
    ///
    /// Adding a name twice returns the existing index and leaves the
    /// original player count in place.
    pub fn add_node(&mut self, name: &str, player_count: u32) -> u32 {
        if let Some(&index) = self.name_to_index.get(name) {
            return index;
        }

        let index = self.nodes.len() as u32;
        self.name_to_index.insert(name.to_string(), index);
        self.nodes.push(CompetitionNode {
            name: name.to_string(),
            player_count,
        });

        index
    }

    /// Record one player shared between two competitions.
    ///
    /// Increments the weight of the unordered pair by 1, creating the edge on
    /// first sight. Self-pairs and unknown competition names are ignored, so
    /// every emitted edge connects two existing nodes and no self-loops can
    /// form.
    pub fn add_shared_player(&mut self, a: &str, b: &str) {
        let (Some(&a_index), Some(&b_index)) = (self.name_to_index.get(a), self.name_to_index.get(b))
        else {
            return;
        };

        if a_index == b_index {
            return;
        }

        let key = (a_index.min(b_index), a_index.max(b_index));
        *self.edge_weights.entry(key).or_insert(0) += 1;
    }

    /// Build the pathway graph
    pub fn build(self) -> PathwayGraph {
        let edges = self
            .edge_weights
            .into_iter()
            .map(|((source, target), weight)| PathwayEdge {
                source,
                target,
                weight,
            })
            .collect();

        PathwayGraph {
            nodes: self.nodes,
            edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_weights_accumulate_across_players() {
        let mut builder = GraphBuilder::with_capacity(2);
        builder.add_node("Super League", 6);
        builder.add_node("Challenge League", 5);
        builder.add_shared_player("Super League", "Challenge League");
        builder.add_shared_player("Challenge League", "Super League");

        let graph = builder.build();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges[0].weight, 2);
        assert!(graph.edges[0].source < graph.edges[0].target);
    }

    #[test]
    fn self_pairs_are_rejected() {
        let mut builder = GraphBuilder::with_capacity(1);
        builder.add_node("Super League", 6);
        builder.add_shared_player("Super League", "Super League");

        let graph = builder.build();
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn duplicate_nodes_keep_first_player_count() {
        let mut builder = GraphBuilder::with_capacity(1);
        let first = builder.add_node("Super League", 6);
        let second = builder.add_node("Super League", 9);
        assert_eq!(first, second);

        let graph = builder.build();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.nodes[0].player_count, 6);
    }
}
