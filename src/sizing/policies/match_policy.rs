use crate::shared::{Result, SizingError};
use crate::sizing::domain::MatchTier;

/// Score of a perfect match on the 0-100 scale
pub const PERFECT_SCORE: u8 = 100;

/// Default token-set score from which a match counts as `potential`
pub const DEFAULT_POTENTIAL_THRESHOLD: u8 = 80;

/// Best catalog candidate for one scorer: catalog index and its score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMatch {
    pub index: usize,
    pub score: u8,
}

/// The three scorer results for one inventory value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityScores {
    pub plain: BestMatch,
    pub token_sort: BestMatch,
    pub token_set: BestMatch,
}

/// MatchPolicy encodes how scorer results map onto a match tier.
///
/// Rules are evaluated in order, first hit wins:
/// 1. plain or token-set score of 100 -> `exact` (plain's candidate preferred)
/// 2. token-sort score of 100 -> `identified`
/// 3. token-set score at or above the potential threshold -> `potential`
/// 4. otherwise -> `unsupported`, no candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchPolicy {
    potential_threshold: u8,
}

impl MatchPolicy {
    pub fn new(potential_threshold: u8) -> Result<Self> {
        if potential_threshold == 0 || potential_threshold > PERFECT_SCORE {
            return Err(SizingError::ConfigError {
                details: format!(
                    "potential_threshold must be between 1 and 100, got {}",
                    potential_threshold
                ),
            }
            .into());
        }
        Ok(Self { potential_threshold })
    }

    pub fn potential_threshold(&self) -> u8 {
        self.potential_threshold
    }

    /// Returns the tier and, unless unsupported, the catalog index of the match
    pub fn classify(&self, scores: &SimilarityScores) -> (MatchTier, Option<usize>) {
        if scores.plain.score == PERFECT_SCORE {
            return (MatchTier::Exact, Some(scores.plain.index));
        }
        if scores.token_set.score == PERFECT_SCORE {
            return (MatchTier::Exact, Some(scores.token_set.index));
        }
        // Unreachable with the built-in scorers: equal sorted tokens give a
        // perfect token-set score, caught above. Kept for other score sources.
        if scores.token_sort.score == PERFECT_SCORE {
            return (MatchTier::Identified, Some(scores.token_sort.index));
        }
        if scores.token_set.score >= self.potential_threshold {
            return (MatchTier::Potential, Some(scores.token_set.index));
        }
        (MatchTier::Unsupported, None)
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            potential_threshold: DEFAULT_POTENTIAL_THRESHOLD,
        }
    }
}
