use crate::shared::Result;
use crate::sizing::domain::Catalog;

/// CatalogReader port for loading the compatibility catalog
///
/// The catalog is trusted reference data. Implementations validate every
/// entry and fail the whole load on the first malformed one.
pub trait CatalogReader {
    /// Reads and validates the catalog
    ///
    /// # Errors
    /// Returns an error if:
    /// - The catalog source cannot be read or parsed
    /// - Any camera or unit entry violates a catalog invariant
    fn read_catalog(&self) -> Result<Catalog>;
}
