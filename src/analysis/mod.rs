//! Snapshot analysis pipeline
//!
//! Four stages over one chain snapshot:
//! 1. **Pricing**: Black-Scholes price, Greeks and ITM probability per contract
//! 2. **Parity**: put-call parity discrepancy and arbitrage flag
//! 3. **Aggregation**: extrema, liquidity ranking, side means, strike histogram
//! 4. **Report**: plain or priced report for a presentation layer

mod analyzer;
mod config;
mod engine;
mod parity;
mod report;

pub use analyzer::*;
pub use config::*;
pub use engine::*;
pub use parity::*;
pub use report::*;
