//! Significance filtering of competitions

use crate::config::DeriveConfig;
use crate::data::PlayerSeasonRecord;
use std::collections::{BTreeMap, HashSet};

/// Participation volume of one competition over the filtered rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompetitionStats {
    /// Distinct players with at least one filtered row in the competition
    pub player_count: u32,

    /// Summed played minutes across all its filtered rows
    pub total_minutes: u64,
}

/// Aggregate distinct players and total minutes per competition.
///
/// Keyed by competition name in an ordered map so every later stage
/// iterates competitions in a deterministic order.
pub fn competition_stats<'a>(
    rows: &[&'a PlayerSeasonRecord],
) -> BTreeMap<&'a str, CompetitionStats> {
    let mut aggregates: BTreeMap<&str, (HashSet<u32>, u64)> = BTreeMap::new();

    for row in rows {
        let entry = aggregates.entry(row.competition.as_str()).or_default();
        entry.0.insert(row.player_id);
        entry.1 += u64::from(row.played_minutes);
    }

    aggregates
        .into_iter()
        .map(|(competition, (players, total_minutes))| {
            let stats = CompetitionStats {
                player_count: players.len() as u32,
                total_minutes,
            };
            (competition, stats)
        })
        .collect()
}

/// Drop competitions below the participation thresholds.
///
/// A competition survives iff it has at least `min_players_per_competition`
/// distinct players AND at least `min_total_minutes` summed minutes; both
/// must hold, so one-off appearances and thin-squad outliers are pruned
/// together. Returns the surviving competitions' stats and the rows
/// restricted to them.
pub fn filter_significant<'a>(
    rows: &[&'a PlayerSeasonRecord],
    config: &DeriveConfig,
) -> (BTreeMap<&'a str, CompetitionStats>, Vec<&'a PlayerSeasonRecord>) {
    let stats = competition_stats(rows);

    let significant: BTreeMap<&str, CompetitionStats> = stats
        .into_iter()
        .filter(|(_, stats)| {
            stats.player_count >= config.min_players_per_competition
                && stats.total_minutes >= config.min_total_minutes
        })
        .collect();

    let remaining: Vec<&PlayerSeasonRecord> = rows
        .iter()
        .filter(|row| significant.contains_key(row.competition.as_str()))
        .copied()
        .collect();

    (significant, remaining)
}
