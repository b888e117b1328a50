use crate::application::dto::{AssessmentRequest, AssessmentResponse};
use crate::shared::Result;

/// InventoryAssessmentPort - Inbound port for the assessment use case
///
/// One call runs the whole pipeline: column identification, matching,
/// channel aggregation, unit recommendation and storage estimation.
pub trait InventoryAssessmentPort {
    /// Assesses one customer inventory against the loaded catalog
    ///
    /// # Errors
    /// Returns an error if:
    /// - No model column can be identified (or the override is out of range)
    /// - The retention period is outside the supported bands
    /// - The unit catalog cannot cover the channel demand
    fn assess(&self, request: &AssessmentRequest) -> Result<AssessmentResponse>;
}
