use crate::shared::Result;
use crate::sizing::domain::{
    ChannelDemand, MatchResult, MatchSummary, Recommendation, ResolutionTier,
};
use anyhow::Context;
use serde::Serialize;

/// Estimated storage for one tier next to what the recommended units hold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorageEstimate {
    pub tier: ResolutionTier,
    pub channels: u64,
    pub required_tb: f64,
    pub provisioned_tb: f64,
}

impl StorageEstimate {
    pub fn is_sufficient(&self) -> bool {
        self.provisioned_tb >= self.required_tb
    }

    /// Terabytes missing on the recommended units, 0 when sufficient
    pub fn shortfall_tb(&self) -> f64 {
        (self.required_tb - self.provisioned_tb).max(0.0)
    }
}

/// AssessmentResponse - Everything one assessment produced
///
/// Owned by the caller; nothing is cached between runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResponse {
    /// Column the model names were read from
    pub model_column: usize,
    /// Column quantities were read from, if any
    pub count_column: Option<usize>,
    /// Columns dropped from identification because they hold addresses or serials
    pub excluded_columns: Vec<usize>,
    /// One result per distinct model value, ordered by tier then appearance
    pub results: Vec<MatchResult>,
    pub summary: MatchSummary,
    pub demand: ChannelDemand,
    /// Low tier first, then high tier
    pub recommendations: Vec<Recommendation>,
    /// Low tier first, then high tier
    pub storage: Vec<StorageEstimate>,
    pub retention_days: u32,
}

impl AssessmentResponse {
    pub fn recommendation(&self, tier: ResolutionTier) -> Option<&Recommendation> {
        self.recommendations.iter().find(|r| r.tier() == tier)
    }

    pub fn storage_estimate(&self, tier: ResolutionTier) -> Option<&StorageEstimate> {
        self.storage.iter().find(|s| s.tier == tier)
    }

    /// Renders the response as pretty-printed JSON for the export layer
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize assessment response")
    }
}
