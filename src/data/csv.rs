//! CSV ingestion for player-season data

use crate::data::records::{
    IngestReport, PlayerSeasonRecord, COL_AGE, COL_CATEGORY, COL_COMPETITION, COL_MINUTES,
    COL_NAME, COL_PLAYER_ID, COL_TYPE, REQUIRED_COLUMNS,
};
use crate::data::DataError;
use polars::prelude::*;

/// Load and validate player-season records from a CSV file.
///
/// Column presence is checked up front; a missing required column aborts the
/// call. Rows with null fields or values that fail the numeric casts are
/// skipped and counted in the report rather than aborting the whole load.
pub fn load_player_data(path: &str) -> Result<IngestReport, DataError> {
    log::info!("Reading CSV file: {}", path);

    if !std::path::Path::new(path).exists() {
        return Err(DataError::FileNotFound(path.to_string()));
    }

    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    log::debug!("File schema: {:?}", df.schema());
    log::info!("Loaded {} rows", df.height());

    for column in REQUIRED_COLUMNS {
        if df.column(column).is_err() {
            return Err(DataError::MissingColumn(column));
        }
    }

    // Non-strict casts: cells that cannot be parsed become nulls and are
    // counted as skipped below.
    let player_ids = df.column(COL_PLAYER_ID)?.cast(&DataType::Int64)?;
    let names = df.column(COL_NAME)?.cast(&DataType::String)?;
    let competitions = df.column(COL_COMPETITION)?.cast(&DataType::String)?;
    let types = df.column(COL_TYPE)?.cast(&DataType::String)?;
    let categories = df.column(COL_CATEGORY)?.cast(&DataType::String)?;
    let ages = df.column(COL_AGE)?.cast(&DataType::Int64)?;
    let minutes = df.column(COL_MINUTES)?.cast(&DataType::Int64)?;

    let player_ids = player_ids.i64()?;
    let names = names.str()?;
    let competitions = competitions.str()?;
    let types = types.str()?;
    let categories = categories.str()?;
    let ages = ages.i64()?;
    let minutes = minutes.i64()?;

    let row_count = df.height();
    let mut records = Vec::with_capacity(row_count);
    let mut skipped_rows = 0;

    for i in 0..row_count {
        let (
            Some(id),
            Some(name),
            Some(competition),
            Some(competition_type),
            Some(category),
            Some(age),
            Some(played),
        ) = (
            player_ids.get(i),
            names.get(i),
            competitions.get(i),
            types.get(i),
            categories.get(i),
            ages.get(i),
            minutes.get(i),
        )
        else {
            skipped_rows += 1;
            continue;
        };

        // Negative ages or minutes are data-quality defects, not fatal.
        let (Ok(player_id), Ok(age_in_season), Ok(played_minutes)) =
            (u32::try_from(id), u32::try_from(age), u32::try_from(played))
        else {
            skipped_rows += 1;
            continue;
        };

        records.push(PlayerSeasonRecord {
            player_id,
            player_name: name.to_string(),
            competition: competition.to_string(),
            competition_type: competition_type.to_string(),
            category: category.to_string(),
            age_in_season,
            played_minutes,
        });
    }

    if skipped_rows > 0 {
        log::warn!("Skipped {} malformed rows", skipped_rows);
    }
    log::info!("Parsed {} season records", records.len());

    Ok(IngestReport {
        records,
        skipped_rows,
    })
}
