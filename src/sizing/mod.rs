//! Matching and sizing core: pure, synchronous computation over the
//! inventory table and the catalog.
pub mod domain;
pub mod policies;
pub mod services;
