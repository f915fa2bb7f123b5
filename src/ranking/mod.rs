//! Connectivity ranking of the pathway network

use crate::graph::PathwayGraph;
use serde::{Deserialize, Serialize};

/// One row of the connectivity ranking.
///
/// Serialized field names match the table handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueRank {
    /// Competition name
    #[serde(rename = "League")]
    pub league: String,

    /// Weighted degree: summed weight of all incident connections
    #[serde(rename = "Total Connections (Weights)")]
    pub total_weight: u64,

    /// Distinct cohort players in the competition
    #[serde(rename = "Players (Node Size)")]
    pub player_count: u32,
}

/// Rank competitions by weighted degree, descending.
///
/// Equal weighted degrees are broken by competition name, ascending, so the
/// ordering is total and independent of node insertion order. Isolated nodes
/// rank with a weighted degree of 0. Always returns the full ranking; top-K
/// presentation is the caller's concern (see [`top_k`]).
pub fn rank_by_connectivity(graph: &PathwayGraph) -> Vec<LeagueRank> {
    let mut degrees = vec![0u64; graph.node_count()];
    for edge in &graph.edges {
        degrees[edge.source as usize] += u64::from(edge.weight);
        degrees[edge.target as usize] += u64::from(edge.weight);
    }

    let mut ranking: Vec<LeagueRank> = graph
        .nodes
        .iter()
        .zip(degrees)
        .map(|(node, total_weight)| LeagueRank {
            league: node.name.clone(),
            total_weight,
            player_count: node.player_count,
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.total_weight
            .cmp(&a.total_weight)
            .then_with(|| a.league.cmp(&b.league))
    });

    ranking
}

/// First `k` rows of a ranking, or the whole ranking when shorter
pub fn top_k(ranking: &[LeagueRank], k: usize) -> &[LeagueRank] {
    &ranking[..k.min(ranking.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::pathway::{CompetitionNode, PathwayEdge};

    fn node(name: &str, player_count: u32) -> CompetitionNode {
        CompetitionNode {
            name: name.to_string(),
            player_count,
        }
    }

    #[test]
    fn ranking_is_descending_with_name_tie_break() {
        // weighted degrees: A = 10, B = 7, C = 7
        let graph = PathwayGraph {
            nodes: vec![node("C", 5), node("A", 8), node("B", 6)],
            edges: vec![
                PathwayEdge {
                    source: 0,
                    target: 1,
                    weight: 5,
                },
                PathwayEdge {
                    source: 0,
                    target: 2,
                    weight: 2,
                },
                PathwayEdge {
                    source: 1,
                    target: 2,
                    weight: 5,
                },
            ],
        };
        let ranking = rank_by_connectivity(&graph);
        let order: Vec<&str> = ranking.iter().map(|row| row.league.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
        assert_eq!(ranking[0].total_weight, 10);
        assert_eq!(ranking[1].total_weight, 7);
        assert_eq!(ranking[2].total_weight, 7);
    }

    #[test]
    fn isolated_nodes_rank_with_zero_degree() {
        let graph = PathwayGraph {
            nodes: vec![node("Super League", 6), node("U19 Elite", 5)],
            edges: vec![],
        };
        let ranking = rank_by_connectivity(&graph);
        assert_eq!(ranking.len(), 2);
        assert!(ranking.iter().all(|row| row.total_weight == 0));
        // pure name order when every degree is 0
        assert_eq!(ranking[0].league, "Super League");
    }

    #[test]
    fn top_k_clamps_to_ranking_length() {
        let graph = PathwayGraph {
            nodes: vec![node("Super League", 6)],
            edges: vec![],
        };
        let ranking = rank_by_connectivity(&graph);
        assert_eq!(top_k(&ranking, 5).len(), 1);
        assert_eq!(top_k(&ranking, 0).len(), 0);
    }
}
