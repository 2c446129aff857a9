//! Option contract definitions
//!
//! A snapshot row: strike, side, and the top-of-book bid/ask with order counts.

use serde::{Deserialize, Serialize};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }

    /// The other side of the chain
    pub fn opposite(&self) -> Self {
        match self {
            OptionType::Call => OptionType::Put,
            OptionType::Put => OptionType::Call,
        }
    }
}

/// One option from a chain snapshot.
///
/// Quotes are taken as-is: crossed, equal or negative prices are kept, so
/// `spread` can be zero or negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Strike price
    pub strike: f64,
    /// Option type (Call/Put)
    pub option_type: OptionType,
    /// Best bid price
    pub bid_price: f64,
    /// Best ask price
    pub ask_price: f64,
    /// Orders resting on the bid
    pub bid_orders: u64,
    /// Orders resting on the ask
    pub ask_orders: u64,
    /// ask - bid
    pub spread: f64,
    /// bid_orders + ask_orders
    pub total_orders: u64,
}

impl Contract {
    pub fn new(
        strike: f64,
        option_type: OptionType,
        bid_price: f64,
        ask_price: f64,
        bid_orders: u64,
        ask_orders: u64,
    ) -> Self {
        Self {
            strike,
            option_type,
            bid_price,
            ask_price,
            bid_orders,
            ask_orders,
            spread: ask_price - bid_price,
            total_orders: bid_orders.saturating_add(ask_orders),
        }
    }

    /// Mid price from bid/ask
    pub fn mid(&self) -> f64 {
        (self.bid_price + self.ask_price) / 2.0
    }
}
