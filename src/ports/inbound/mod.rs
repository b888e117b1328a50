/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interface a host application (GUI, import
/// pipeline, service) uses to run an inventory assessment.
pub mod inventory_assessment_port;

pub use inventory_assessment_port::InventoryAssessmentPort;
