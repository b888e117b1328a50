/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports are what a host application calls; outbound ports are what
/// the engine needs from its surroundings (catalog source, progress output).
pub mod inbound;
pub mod outbound;
