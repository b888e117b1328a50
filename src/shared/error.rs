use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the sizing engine.
///
/// Row-level oddities in the inventory never surface here; they degrade to
/// the `unsupported` tier instead. Everything below aborts the run.
#[derive(Debug, Error)]
pub enum SizingError {
    #[error("No camera model column could be identified in the inventory\n\n💡 Hint: Make sure one column lists camera model names, or pass the model column index explicitly")]
    NoModelColumnFound,

    #[error("Unsupported retention period: {days} day(s)\n\n💡 Hint: Retention must be between 1 and 90 days (bands: 30, 60, 90)")]
    UnsupportedRetentionPeriod { days: u32 },

    #[error("No gateway unit combination can cover {channels} channel(s)\n\n💡 Hint: The unit catalog is empty or none of its units has usable channel capacity")]
    NoUnitCoversDemand { channels: u64 },

    #[error("Cannot size {channels} channel(s) with this unit catalog: the covering search would need {span} entries\n\n💡 Hint: Split the inventory into sites, or check the catalog for units with an implausibly large channel capacity")]
    DemandTooLarge { channels: u64, span: u64 },

    #[error("Malformed catalog entry '{entry}': {reason}\n\n💡 Hint: Fix the catalog source; a malformed catalog cannot be used")]
    MalformedCatalogEntry { entry: String, reason: String },

    #[error("Failed to read catalog: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    CatalogReadError { path: PathBuf, details: String },

    #[error("Invalid configuration: {details}")]
    ConfigError { details: String },
}
