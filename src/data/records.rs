//! Typed player-season records

use serde::{Deserialize, Serialize};

/// Input column carrying the numeric player id
pub const COL_PLAYER_ID: &str = "Player ID";

/// Input column carrying the player name
pub const COL_NAME: &str = "Name";

/// Input column carrying the competition name
pub const COL_COMPETITION: &str = "Competition";

/// Input column carrying the competition classification tag
pub const COL_TYPE: &str = "Type";

/// Input column carrying the career-stage category
pub const COL_CATEGORY: &str = "Category";

/// Input column carrying the player's age in the season
pub const COL_AGE: &str = "Age in Season";

/// Input column carrying the minutes played in the season
pub const COL_MINUTES: &str = "Played Minutes";

/// Columns the derivation cannot run without
pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_PLAYER_ID,
    COL_NAME,
    COL_COMPETITION,
    COL_TYPE,
    COL_CATEGORY,
    COL_AGE,
    COL_MINUTES,
];

/// One season of one player in one competition.
///
/// Validated once at ingestion; downstream stages assume well-typed fields
/// and never mutate the record set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSeasonRecord {
    /// Stable player identifier
    pub player_id: u32,

    /// Display name of the player
    pub player_name: String,

    /// Name of the league or tournament
    pub competition: String,

    /// Classification tag, e.g. domestic league vs international
    pub competition_type: String,

    /// Career-stage label, e.g. a youth tier or "A Nationalteam"
    pub category: String,

    /// Age of the player during the season
    pub age_in_season: u32,

    /// Minutes played in that competition and season
    pub played_minutes: u32,
}

/// Parsed dataset plus ingestion diagnostics
#[derive(Debug)]
pub struct IngestReport {
    /// Well-typed season records, in input order
    pub records: Vec<PlayerSeasonRecord>,

    /// Rows dropped because a field was null or failed the numeric cast
    pub skipped_rows: usize,
}
