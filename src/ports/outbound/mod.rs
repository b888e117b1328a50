/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define what the engine needs from the outside world:
/// the reference catalog and a place to report progress.
pub mod catalog_reader;
pub mod progress_reporter;

pub use catalog_reader::CatalogReader;
pub use progress_reporter::ProgressReporter;
