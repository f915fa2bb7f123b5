//! Career pathway derivation pipeline

use crate::config::DeriveConfig;
use crate::data::{cohort, significance, PlayerSeasonRecord};
use crate::graph::builder::GraphBuilder;
use crate::graph::PathwayGraph;
use crate::ranking::{self, LeagueRank};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Populated result of a completed derivation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwayAnalysis {
    /// The derived competition network
    pub graph: PathwayGraph,

    /// Full connectivity ranking, most connected first
    pub ranking: Vec<LeagueRank>,

    /// Players who reached the target category
    pub cohort_size: usize,

    /// Season rows that survived the cohort and significance filters
    pub qualifying_rows: usize,
}

/// Outcome of a derivation call.
///
/// The two empty outcomes are distinct so the presentation layer can show a
/// specific message for each; neither is an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Derivation {
    /// No player ever reached the target category
    EmptyCohort,

    /// Every competition was pruned by the significance thresholds
    NoSignificantCompetitions,

    /// The derived network and ranking
    Complete(PathwayAnalysis),
}

/// Derive the career pathway network from a set of season records.
///
/// A pure function of the record set and configuration: it never mutates the
/// input, builds fresh containers on every call, and produces identical
/// output for identical input regardless of record order.
pub fn derive_pathways(records: &[PlayerSeasonRecord], config: &DeriveConfig) -> Derivation {
    // 1. Cohort selection
    let cohort = cohort::select_cohort(records, &config.target_category);
    if cohort.is_empty() {
        return Derivation::EmptyCohort;
    }
    log::debug!("Cohort contains {} players", cohort.len());

    let filtered = cohort::filter_to_cohort(records, &cohort, config);

    // 2. Significance filter
    let (significant, rows) = significance::filter_significant(&filtered, config);
    if significant.is_empty() {
        return Derivation::NoSignificantCompetitions;
    }
    log::debug!(
        "{} of {} filtered rows fall into {} significant competitions",
        rows.len(),
        filtered.len(),
        significant.len()
    );

    // 3. Graph construction; the stats map is ordered by name, so node
    // indices are assigned lexicographically.
    let mut builder = GraphBuilder::with_capacity(significant.len());
    for (name, stats) in &significant {
        builder.add_node(name, stats.player_count);
    }

    let mut player_competitions: BTreeMap<u32, BTreeSet<&str>> = BTreeMap::new();
    for row in &rows {
        player_competitions
            .entry(row.player_id)
            .or_default()
            .insert(row.competition.as_str());
    }

    // One increment per unordered pair per player; a single-competition
    // player contributes no edges.
    for competitions in player_competitions.values() {
        for (a, b) in competitions.iter().tuple_combinations() {
            builder.add_shared_player(a, b);
        }
    }

    let graph = builder.build();

    // 4. Connectivity ranking
    let ranking = ranking::rank_by_connectivity(&graph);

    Derivation::Complete(PathwayAnalysis {
        graph,
        ranking,
        cohort_size: cohort.len(),
        qualifying_rows: rows.len(),
    })
}

/// Aggregate playing time per career-stage category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    /// Career-stage label
    pub category: String,

    /// Summed played minutes over all entries
    pub total_minutes: u64,

    /// Mean played minutes per entry
    pub average_minutes: f64,

    /// Number of season rows in the category
    pub entries: u32,
}

/// Summarize played minutes by category across the full record set.
///
/// Operates on the raw records, before any cohort filtering, and returns the
/// categories in name order.
pub fn category_overview(records: &[PlayerSeasonRecord]) -> Vec<CategoryStats> {
    let mut totals: BTreeMap<&str, (u64, u32)> = BTreeMap::new();
    for record in records {
        let entry = totals.entry(record.category.as_str()).or_default();
        entry.0 += u64::from(record.played_minutes);
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(category, (total_minutes, entries))| CategoryStats {
            category: category.to_string(),
            total_minutes,
            average_minutes: total_minutes as f64 / f64::from(entries),
            entries,
        })
        .collect()
}
