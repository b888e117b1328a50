use super::catalog::CatalogCamera;
use serde::Serialize;
use std::fmt;

/// Confidence tier of a fuzzy match, strongest first.
///
/// The derived ordering is the sort order for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Exact,
    Identified,
    Potential,
    Unsupported,
}

impl MatchTier {
    pub const ALL: [MatchTier; 4] = [
        MatchTier::Exact,
        MatchTier::Identified,
        MatchTier::Potential,
        MatchTier::Unsupported,
    ];

    pub fn is_supported(&self) -> bool {
        !matches!(self, MatchTier::Unsupported)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::Identified => "identified",
            MatchTier::Potential => "potential",
            MatchTier::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of one distinct inventory value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    raw_input: String,
    tier: MatchTier,
    matched_camera: Option<CatalogCamera>,
    count: u64,
}

impl MatchResult {
    /// A supported match. Use [`MatchResult::unsupported`] for misses.
    pub fn matched(raw_input: String, tier: MatchTier, camera: CatalogCamera, count: u64) -> Self {
        debug_assert!(tier.is_supported(), "unsupported results carry no camera");
        Self {
            raw_input,
            tier,
            matched_camera: Some(camera),
            count,
        }
    }

    pub fn unsupported(raw_input: String, count: u64) -> Self {
        Self {
            raw_input,
            tier: MatchTier::Unsupported,
            matched_camera: None,
            count,
        }
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn tier(&self) -> MatchTier {
        self.tier
    }

    pub fn matched_camera(&self) -> Option<&CatalogCamera> {
        self.matched_camera.as_ref()
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Entry and camera totals for one match tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TierTally {
    pub entries: usize,
    pub cameras: u64,
}

/// Headline numbers over a set of match results
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MatchSummary {
    pub exact: TierTally,
    pub identified: TierTally,
    pub potential: TierTally,
    pub unsupported: TierTally,
}

impl MatchSummary {
    pub fn from_results(results: &[MatchResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            let tally = summary.tally_mut(result.tier());
            tally.entries += 1;
            tally.cameras = tally.cameras.saturating_add(result.count());
        }
        summary
    }

    pub fn tally(&self, tier: MatchTier) -> TierTally {
        match tier {
            MatchTier::Exact => self.exact,
            MatchTier::Identified => self.identified,
            MatchTier::Potential => self.potential,
            MatchTier::Unsupported => self.unsupported,
        }
    }

    fn tally_mut(&mut self, tier: MatchTier) -> &mut TierTally {
        match tier {
            MatchTier::Exact => &mut self.exact,
            MatchTier::Identified => &mut self.identified,
            MatchTier::Potential => &mut self.potential,
            MatchTier::Unsupported => &mut self.unsupported,
        }
    }

    pub fn total_cameras(&self) -> u64 {
        MatchTier::ALL
            .iter()
            .fold(0u64, |total, tier| total.saturating_add(self.tally(*tier).cameras))
    }

    pub fn supported_cameras(&self) -> u64 {
        MatchTier::ALL
            .iter()
            .filter(|tier| tier.is_supported())
            .fold(0u64, |total, tier| total.saturating_add(self.tally(*tier).cameras))
    }

    /// Fraction of inventory cameras with a supported match, 0.0 for an empty inventory
    pub fn supported_fraction(&self) -> f64 {
        let total = self.total_cameras();
        if total == 0 {
            return 0.0;
        }
        self.supported_cameras() as f64 / total as f64
    }
}
