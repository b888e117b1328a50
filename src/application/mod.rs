/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the sizing services and talks to the outside
/// world only through ports.
pub mod dto;
pub mod use_cases;
