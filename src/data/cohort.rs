//! Cohort selection and record filtering

use crate::config::DeriveConfig;
use crate::data::PlayerSeasonRecord;
use std::collections::HashSet;

/// Collect the ids of players with at least one season in the target category.
///
/// An empty set is a valid outcome, not a fault; downstream stages treat it
/// as a terminal "no data" condition.
pub fn select_cohort(records: &[PlayerSeasonRecord], target_category: &str) -> HashSet<u32> {
    let mut cohort = HashSet::new();
    for record in records {
        if record.category == target_category {
            cohort.insert(record.player_id);
        }
    }
    cohort
}

/// Restrict records to the cohort's qualifying domestic seasons.
///
/// All four predicates are conjunctive: cohort membership, the included
/// competition type, not the excluded competition, and age strictly below
/// the threshold.
pub fn filter_to_cohort<'a>(
    records: &'a [PlayerSeasonRecord],
    cohort: &HashSet<u32>,
    config: &DeriveConfig,
) -> Vec<&'a PlayerSeasonRecord> {
    records
        .iter()
        .filter(|record| {
            cohort.contains(&record.player_id)
                && record.competition_type == config.included_competition_type
                && record.competition != config.excluded_competition
                && record.age_in_season < config.age_threshold
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        player_id: u32,
        competition: &str,
        competition_type: &str,
        category: &str,
        age: u32,
    ) -> PlayerSeasonRecord {
        PlayerSeasonRecord {
            player_id,
            player_name: format!("Player {}", player_id),
            competition: competition.to_string(),
            competition_type: competition_type.to_string(),
            category: category.to_string(),
            age_in_season: age,
            played_minutes: 90,
        }
    }

    #[test]
    fn cohort_contains_only_target_category_players() {
        let records = vec![
            record(1, "Super League", "domestic league", "A Nationalteam", 24),
            record(1, "Super League", "domestic league", "U19", 18),
            record(2, "Super League", "domestic league", "U21", 20),
        ];
        let cohort = select_cohort(&records, "A Nationalteam");
        assert!(cohort.contains(&1));
        assert!(!cohort.contains(&2));
        assert_eq!(cohort.len(), 1);
    }

    #[test]
    fn cohort_is_empty_when_no_player_matches() {
        let records = vec![record(1, "Super League", "domestic league", "U19", 18)];
        assert!(select_cohort(&records, "A Nationalteam").is_empty());
    }

    #[test]
    fn filter_applies_all_predicates() {
        let config = DeriveConfig::default();
        let cohort: HashSet<u32> = [1].into_iter().collect();
        let records = vec![
            // kept
            record(1, "Super League", "domestic league", "U19", 18),
            // wrong player
            record(2, "Super League", "domestic league", "U19", 18),
            // excluded competition
            record(1, "International", "domestic league", "U19", 18),
            // wrong competition type
            record(1, "Super League", "cup", "U19", 18),
            // at the age threshold (strict less-than)
            record(1, "Super League", "domestic league", "U21", 21),
        ];
        let filtered = filter_to_cohort(&records, &cohort, &config);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].competition, "Super League");
        assert_eq!(filtered[0].age_in_season, 18);
    }
}
