use crate::sizing::domain::InventoryTable;

/// AssessmentRequest - Input of one inventory assessment
///
/// Only the table is required. Retention falls back to the engine
/// configuration and the model column is identified when not given.
#[derive(Debug, Clone)]
pub struct AssessmentRequest {
    /// The customer inventory, already loaded by the host application
    pub table: InventoryTable,
    /// Retention period in days; `None` uses the configured default
    pub retention_days: Option<u32>,
    /// Explicit model column index, skipping identification
    pub model_column: Option<usize>,
}

impl AssessmentRequest {
    pub fn new(table: InventoryTable) -> Self {
        Self {
            table,
            retention_days: None,
            model_column: None,
        }
    }

    pub fn with_retention_days(mut self, days: u32) -> Self {
        self.retention_days = Some(days);
        self
    }

    pub fn with_model_column(mut self, column: usize) -> Self {
        self.model_column = Some(column);
        self
    }
}
