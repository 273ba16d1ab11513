//! Remote attraction data access (impure shell).
//!
//! This module owns everything that touches the network:
//! - [`AttractionsClient`]: the blocking two-tier fetch (relay transport
//!   first, direct transport as fallback) with a structured error taxonomy
//! - [`AttractionSource`]: the seam the state-machine driver and test
//!   doubles implement
//! - [`FetchWorker`]: background execution of fetches so the poll-driven
//!   event loop never blocks on I/O

pub mod client;
pub mod error;
pub mod worker;

// Re-export for convenience
pub use client::{AttractionSource, AttractionsClient, Endpoints, DEFAULT_LANG};
pub use error::FetchError;
pub use worker::{FetchOutcome, FetchWorker};
