//! Data input and output
//!
//! Handles:
//! - Loading an options-chain snapshot from JSON
//! - Exporting reports as JSON

pub mod export;
pub mod snapshot;

pub use export::*;
pub use snapshot::*;
