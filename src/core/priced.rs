//! Contracts enriched with model output

use serde::{Deserialize, Serialize};

use super::greeks::Greeks;
use super::option::{Contract, OptionType};

/// Everything the pricing engine computes for one contract
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Black-Scholes fair value
    pub theoretical_price: f64,
    pub greeks: Greeks,
    /// Risk-neutral P(S_T > K), same for calls and puts
    pub probability_itm: f64,
    /// Put-call parity gap; `None` when there is no opposite leg to compare with
    pub arbitrage_discrepancy: Option<f64>,
}

/// A snapshot contract plus its pricing overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedContract {
    pub contract: Contract,
    pub pricing: PricingResult,
    pub arbitrage_flag: bool,
}

impl PricedContract {
    pub fn new(contract: Contract, pricing: PricingResult) -> Self {
        Self {
            contract,
            pricing,
            arbitrage_flag: false,
        }
    }

    pub fn strike(&self) -> f64 {
        self.contract.strike
    }

    pub fn option_type(&self) -> OptionType {
        self.contract.option_type
    }

    /// Market mid minus model price
    pub fn edge(&self) -> f64 {
        self.contract.mid() - self.pricing.theoretical_price
    }

    /// Set the parity discrepancy in place and derive the flag from `threshold`
    pub fn set_discrepancy(&mut self, discrepancy: Option<f64>, threshold: f64) {
        self.pricing.arbitrage_discrepancy = discrepancy;
        self.arbitrage_flag = discrepancy.map(|d| d > threshold).unwrap_or(false);
    }

    /// Builder form of [`set_discrepancy`](Self::set_discrepancy)
    pub fn with_discrepancy(mut self, discrepancy: Option<f64>, threshold: f64) -> Self {
        self.set_discrepancy(discrepancy, threshold);
        self
    }
}

/// Read access shared by plain and priced contracts, so the aggregator can
/// fold either.
pub trait ContractView {
    fn contract(&self) -> &Contract;

    fn arbitrage_flag(&self) -> bool {
        false
    }
}

impl ContractView for Contract {
    fn contract(&self) -> &Contract {
        self
    }
}

impl ContractView for PricedContract {
    fn contract(&self) -> &Contract {
        &self.contract
    }

    fn arbitrage_flag(&self) -> bool {
        self.arbitrage_flag
    }
}
