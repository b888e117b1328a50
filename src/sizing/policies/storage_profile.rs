use crate::shared::{Result, SizingError};
use crate::sizing::domain::{ResolutionTier, RetentionBand};
use serde::{Deserialize, Serialize};

/// Storage coefficients in GB per channel per day, indexed by retention band
/// (up to 30, 60 and 90 days).
///
/// The figures are empirical reference points, one per band, not a
/// continuous model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StorageProfile {
    pub low: [f64; 3],
    pub high: [f64; 3],
}

impl StorageProfile {
    pub fn coefficient(&self, tier: ResolutionTier, band: RetentionBand) -> f64 {
        match tier {
            ResolutionTier::Low => self.low[band.index()],
            ResolutionTier::High => self.high[band.index()],
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (tier, coefficients) in [("low", &self.low), ("high", &self.high)] {
            if let Some(bad) = coefficients.iter().find(|c| !c.is_finite() || **c <= 0.0) {
                return Err(SizingError::ConfigError {
                    details: format!(
                        "storage.{} coefficients must be positive numbers, got {}",
                        tier, bad
                    ),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl Default for StorageProfile {
    fn default() -> Self {
        Self {
            low: [0.256, 0.512, 0.768],
            high: [0.512, 1.024, 2.048],
        }
    }
}
