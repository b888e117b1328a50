use crate::shared::{Result, SizingError};
use serde::Serialize;

/// Supported retention bands; the storage coefficients are calibrated per band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RetentionBand {
    UpTo30Days,
    UpTo60Days,
    UpTo90Days,
}

impl RetentionBand {
    pub const MAX_DAYS: u32 = 90;

    /// Maps a retention period to its band.
    ///
    /// Zero days and anything past 90 days are rejected rather than
    /// extrapolated.
    pub fn from_days(days: u32) -> Result<Self> {
        match days {
            1..=30 => Ok(RetentionBand::UpTo30Days),
            31..=60 => Ok(RetentionBand::UpTo60Days),
            61..=Self::MAX_DAYS => Ok(RetentionBand::UpTo90Days),
            _ => Err(SizingError::UnsupportedRetentionPeriod { days }.into()),
        }
    }

    pub fn index(&self) -> usize {
        match self {
            RetentionBand::UpTo30Days => 0,
            RetentionBand::UpTo60Days => 1,
            RetentionBand::UpTo90Days => 2,
        }
    }
}
