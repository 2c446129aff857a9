//! Core data types for snapshot analysis
//!
//! Defines fundamental types:
//! - Contract: Strike, side, bid/ask prices and order counts
//! - MarketAssumptions: Spot, rate, time to expiry, volatility
//! - PricedContract: Contract plus model price, Greeks, ITM probability, parity gap

pub mod error;
pub mod greeks;
pub mod market;
pub mod option;
pub mod priced;

pub use error::*;
pub use greeks::*;
pub use market::*;
pub use option::*;
pub use priced::*;
