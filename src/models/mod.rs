//! Pricing Models
//!
//! Implements:
//! - Black-Scholes (European pricing, Greeks, ITM probability, parity gap)

pub mod black_scholes;

pub use black_scholes::*;
