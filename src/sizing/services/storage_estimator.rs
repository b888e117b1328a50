use crate::shared::Result;
use crate::sizing::domain::{ResolutionTier, RetentionBand};
use crate::sizing::policies::StorageProfile;

const GB_PER_TB: f64 = 1000.0;

/// StorageEstimator - Estimates recording storage for a channel count
///
/// `storage_gb = channels * coefficient(tier, band) * retention_days`,
/// returned in terabytes. Retention outside 1-90 days is rejected rather
/// than extrapolated.
#[derive(Debug, Clone, Copy, Default)]
pub struct StorageEstimator {
    profile: StorageProfile,
}

impl StorageEstimator {
    pub fn new(profile: StorageProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &StorageProfile {
        &self.profile
    }

    /// # Errors
    /// `UnsupportedRetentionPeriod` when `retention_days` is 0 or above 90
    pub fn estimate_storage(
        &self,
        channels: u64,
        tier: ResolutionTier,
        retention_days: u32,
    ) -> Result<f64> {
        let band = RetentionBand::from_days(retention_days)?;
        let coefficient = self.profile.coefficient(tier, band);
        let gigabytes = channels as f64 * coefficient * f64::from(retention_days);
        Ok(gigabytes / GB_PER_TB)
    }
}
