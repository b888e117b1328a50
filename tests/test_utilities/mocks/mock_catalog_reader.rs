use gateway_sizer::prelude::*;
use std::cell::Cell as CallCounter;

/// Mock CatalogReader for testing
///
/// Hands out a fixed catalog, or fails with a fixed malformed-entry error.
pub struct MockCatalogReader {
    catalog: Option<Catalog>,
    reads: CallCounter<usize>,
}

impl MockCatalogReader {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Some(catalog),
            reads: CallCounter::new(0),
        }
    }

    /// A reader whose catalog is rejected as malformed
    pub fn malformed() -> Self {
        Self {
            catalog: None,
            reads: CallCounter::new(0),
        }
    }

    pub fn read_count(&self) -> usize {
        self.reads.get()
    }
}

impl CatalogReader for MockCatalogReader {
    fn read_catalog(&self) -> Result<Catalog> {
        self.reads.set(self.reads.get() + 1);
        match &self.catalog {
            Some(catalog) => Ok(catalog.clone()),
            None => Err(SizingError::MalformedCatalogEntry {
                entry: "CC300".to_string(),
                reason: "low_channels (12) exceeds high_channels (10)".to_string(),
            }
            .into()),
        }
    }
}
