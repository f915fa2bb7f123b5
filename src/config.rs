//! Configuration for the career pathway derivation

/// Career-stage label that defines the cohort.
pub const DEFAULT_TARGET_CATEGORY: &str = "A Nationalteam";

/// Seasons at this age or older are ignored (strict less-than comparison).
pub const DEFAULT_AGE_THRESHOLD: u32 = 21;

/// Minimum distinct players for a competition to stay in the network.
pub const DEFAULT_MIN_PLAYERS: u32 = 5;

/// Minimum summed played minutes for a competition to stay in the network.
pub const DEFAULT_MIN_MINUTES: u64 = 1000;

/// Competition name excluded from the domestic pathway.
pub const DEFAULT_EXCLUDED_COMPETITION: &str = "International";

/// Competition-type tag the record filter keeps.
pub const DEFAULT_COMPETITION_TYPE: &str = "domestic league";

/// Parameters of a single pathway derivation
#[derive(Debug, Clone)]
pub struct DeriveConfig {
    /// Category a player must have reached to be part of the cohort
    pub target_category: String,

    /// Upper age bound for seasons counted toward the pathway
    pub age_threshold: u32,

    /// Minimum distinct players per competition
    pub min_players_per_competition: u32,

    /// Minimum total played minutes per competition
    pub min_total_minutes: u64,

    /// Competition name dropped from the filtered rows
    pub excluded_competition: String,

    /// Competition-type tag the filtered rows must carry
    pub included_competition_type: String,
}

impl Default for DeriveConfig {
    fn default() -> Self {
        Self {
            target_category: DEFAULT_TARGET_CATEGORY.to_string(),
            age_threshold: DEFAULT_AGE_THRESHOLD,
            min_players_per_competition: DEFAULT_MIN_PLAYERS,
            min_total_minutes: DEFAULT_MIN_MINUTES,
            excluded_competition: DEFAULT_EXCLUDED_COMPETITION.to_string(),
            included_competition_type: DEFAULT_COMPETITION_TYPE.to_string(),
        }
    }
}

impl DeriveConfig {
    /// Create a configuration with custom values
    pub fn new(
        target_category: String,
        age_threshold: u32,
        min_players_per_competition: u32,
        min_total_minutes: u64,
        excluded_competition: String,
        included_competition_type: String,
    ) -> Self {
        Self {
            target_category,
            age_threshold,
            min_players_per_competition,
            min_total_minutes,
            excluded_competition,
            included_competition_type,
        }
    }
}
