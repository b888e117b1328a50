/// Data Transfer Objects for application layer
///
/// DTOs carry the inventory into the use case and the assessment back out
/// to the host application, keeping the domain layer isolated.
mod assessment_request;
mod assessment_response;

pub use assessment_request::AssessmentRequest;
pub use assessment_response::{AssessmentResponse, StorageEstimate};
