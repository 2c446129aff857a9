//! Pricing engine
//!
//! Applies Black-Scholes to every contract of a snapshot. Each evaluation is a
//! pure function of `(Contract, MarketAssumptions)`, so the batch can run on
//! the rayon pool; results always come back in input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::config::{ExecutionConfig, FailurePolicy};
use crate::core::{
    require_positive, Contract, MarketAssumptions, OptionType, PricedContract, PricingResult,
    SnapshotError, SnapshotResult,
};
use crate::models::black_scholes;

/// Price one contract.
///
/// Fails with `InvalidMarketInput` when time, volatility, spot or strike is
/// not strictly positive (checked in that order). The arbitrage discrepancy
/// is left empty: a single row has no opposite leg. See `analysis::parity`.
pub fn price(contract: &Contract, assumptions: &MarketAssumptions) -> SnapshotResult<PricingResult> {
    let time = require_positive("time_to_expiry_years", assumptions.time_to_expiry_years)?;
    let vol = require_positive("volatility", assumptions.volatility)?;
    let spot = require_positive("spot", assumptions.spot)?;
    let strike = require_positive("strike", contract.strike)?;
    let rate = assumptions.risk_free_rate;
    if !rate.is_finite() {
        return Err(SnapshotError::invalid_market("risk_free_rate", "finite", rate));
    }

    let option_type = contract.option_type;

    Ok(PricingResult {
        theoretical_price: black_scholes::price(spot, strike, rate, vol, time, option_type),
        greeks: black_scholes::greeks(spot, strike, rate, vol, time, option_type),
        probability_itm: black_scholes::probability_itm(spot, strike, rate, vol, time),
        arbitrage_discrepancy: None,
    })
}

/// A contract that could not be priced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingFailure {
    /// Position in the loaded snapshot
    pub index: usize,
    pub strike: f64,
    pub option_type: OptionType,
    pub reason: String,
}

/// Batch pricing output
#[derive(Debug, Clone, Default)]
pub struct PricedChain {
    /// Priced contracts in input order
    pub contracts: Vec<PricedContract>,
    /// Only populated under `FailurePolicy::Collect`
    pub failures: Vec<PricingFailure>,
}

/// Price every contract of a chain
pub fn price_chain(
    contracts: &[Contract],
    assumptions: &MarketAssumptions,
    config: &ExecutionConfig,
) -> SnapshotResult<PricedChain> {
    let evaluate = |contract: &Contract| price(contract, assumptions);

    let results: Vec<SnapshotResult<PricingResult>> = if config.parallel {
        contracts.par_iter().map(evaluate).collect()
    } else {
        contracts.iter().map(evaluate).collect()
    };

    let mut chain = PricedChain {
        contracts: Vec::with_capacity(contracts.len()),
        failures: Vec::new(),
    };

    for (index, (contract, result)) in contracts.iter().zip(results).enumerate() {
        match result {
            Ok(pricing) => chain
                .contracts
                .push(PricedContract::new(contract.clone(), pricing)),
            Err(e) => {
                tracing::warn!(
                    "Could not price {} {} (row {}): {}",
                    contract.option_type.label(),
                    contract.strike,
                    index,
                    e
                );
                match config.failure_policy {
                    FailurePolicy::Abort => return Err(e),
                    FailurePolicy::Collect => chain.failures.push(PricingFailure {
                        index,
                        strike: contract.strike,
                        option_type: contract.option_type,
                        reason: e.to_string(),
                    }),
                }
            }
        }
    }

    tracing::debug!(
        "Priced {} contracts ({} failed, parallel: {})",
        chain.contracts.len(),
        chain.failures.len(),
        config.parallel
    );
    Ok(chain)
}
