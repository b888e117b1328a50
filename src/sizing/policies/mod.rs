mod match_policy;
mod storage_profile;

pub use match_policy::{
    BestMatch, MatchPolicy, SimilarityScores, DEFAULT_POTENTIAL_THRESHOLD, PERFECT_SCORE,
};
pub use storage_profile::StorageProfile;
