mod channel_aggregator;
mod column_identifier;
mod column_sanitizer;
mod fuzzy_matcher;
pub mod similarity;
mod storage_estimator;
mod unit_recommender;

pub use channel_aggregator::ChannelAggregator;
pub use column_identifier::ColumnIdentifier;
pub use column_sanitizer::{ColumnSanitizer, ValueScrubber};
pub use fuzzy_matcher::{Classification, FuzzyMatcher};
pub use storage_estimator::StorageEstimator;
pub use unit_recommender::{UnitRecommender, MAX_SEARCH_SPAN};
