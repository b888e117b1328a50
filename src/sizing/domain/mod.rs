pub mod catalog;
pub mod demand;
pub mod inventory;
pub mod match_result;
pub mod recommendation;
pub mod retention;

pub use catalog::{Catalog, CatalogCamera, GatewayUnit, ResolutionTier, HIGH_RESOLUTION_THRESHOLD_MP};
pub use demand::ChannelDemand;
pub use inventory::{Cell, InventoryRow, InventoryTable, MAX_ROW_QUANTITY};
pub use match_result::{MatchResult, MatchSummary, MatchTier, TierTally};
pub use recommendation::{Recommendation, UnitAllocation};
pub use retention::RetentionBand;
