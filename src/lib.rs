//! gateway-sizer - Camera inventory matching and gateway sizing
//!
//! This library reconciles an unstructured customer camera inventory against
//! a hardware compatibility catalog, estimates how much of the inventory is
//! supported, and recommends the gateway units and storage needed to serve
//! the recognised cameras. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sizing`): Value objects, policies and pure services
//! - **Application Layer** (`application`): The assessment use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use gateway_sizer::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = AssessInventoryUseCase::new(
//!     YamlCatalogReader::new("catalog.yml"),
//!     StderrProgressReporter::new(),
//! )?;
//!
//! let table = InventoryTable::from_strings(
//!     &["Location", "Camera", "Qty"],
//!     &[
//!         vec!["Lobby", "dome 4mp", "10"],
//!         vec!["Dock", "UnknownCam9000", "1"],
//!     ],
//! );
//! let response = use_case.execute(&AssessmentRequest::new(table).with_retention_days(45))?;
//! println!("{}", response.to_json()?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;
pub mod sizing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::YamlCatalogReader;
    pub use crate::application::dto::{AssessmentRequest, AssessmentResponse, StorageEstimate};
    pub use crate::application::use_cases::AssessInventoryUseCase;
    pub use crate::config::{discover_config, load_config_from_path, EngineConfig};
    pub use crate::ports::inbound::InventoryAssessmentPort;
    pub use crate::ports::outbound::{CatalogReader, ProgressReporter};
    pub use crate::shared::{Result, SizingError};
    pub use crate::sizing::domain::{
        Catalog, CatalogCamera, Cell, ChannelDemand, GatewayUnit, InventoryRow, InventoryTable,
        MatchResult, MatchSummary, MatchTier, Recommendation, ResolutionTier, RetentionBand,
        TierTally, UnitAllocation, MAX_ROW_QUANTITY,
    };
    pub use crate::sizing::policies::{MatchPolicy, StorageProfile};
    pub use crate::sizing::services::{
        ChannelAggregator, ColumnIdentifier, ColumnSanitizer, FuzzyMatcher, StorageEstimator,
        UnitRecommender, ValueScrubber,
    };
}
