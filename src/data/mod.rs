//! Dataset ingestion and filtering module

pub mod cohort;
pub mod csv;
pub mod records;
pub mod significance;

use thiserror::Error;

pub use records::{IngestReport, PlayerSeasonRecord};

/// Errors raised while ingesting the player dataset
#[derive(Debug, Error)]
pub enum DataError {
    /// The input dataset lacks a column the derivation depends on.
    /// Fatal for the whole call; no partial result is produced.
    #[error("required column `{0}` is missing from the input dataset")]
    MissingColumn(&'static str),

    /// The input file does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// Underlying reader failure (malformed file, I/O error).
    #[error("failed to read dataset: {0}")]
    Read(#[from] polars::prelude::PolarsError),
}
