//! # Options Snapshot - Chain Statistics and Black-Scholes Overlay
//!
//! Analysis of a single options-chain snapshot for liquidity and mispricing
//! signals.
//!
//! ## Overview
//!
//! A snapshot lists calls and puts with strike, best bid/ask price and the
//! number of orders on each side. From it the crate derives:
//! - **Chain statistics**: highest/lowest strike, most liquid contract, mean
//!   bid/ask per side, liquidity ranking, strike distribution
//! - **Black-Scholes overlay**: fair value, delta, gamma, vega, theta, rho and
//!   the risk-neutral probability of finishing in the money
//! - **Put-call parity check**: discrepancy per call/put pair and a flag above
//!   a threshold
//!
//! ## Usage
//!
//! ```rust,no_run
//! use options_snapshot::prelude::*;
//!
//! let contracts = load_path("options.json").unwrap();
//!
//! let assumptions = MarketAssumptions::new(25.0, 0.05, 2.0, 0.5).unwrap();
//! let report = SnapshotAnalyzer::new().price_with(&contracts, assumptions).unwrap();
//!
//! for c in &report.flagged_arbitrage {
//!     println!("{} {}: {:?}", c.option_type().label(), c.strike(), c.pricing.arbitrage_discrepancy);
//! }
//! ```
//!
//! ## What This Does NOT Do
//!
//! - Fetch live market data
//! - Solve for implied volatility (volatility is an input)
//! - Price American exercise or dividends

pub mod analysis;
pub mod core;
pub mod data;
pub mod models;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        Contract, ContractView, Greeks, MarketAssumptions, OptionType, PricedContract,
        PricingResult, SnapshotError, SnapshotResult,
    };

    // Data loading and export
    pub use crate::data::{load_path, load_reader, load_str, load_value, save_json};

    // Models
    pub use crate::models::{
        norm_cdf, norm_pdf, parity_gap, probability_itm, greeks as bs_greeks, price as bs_price,
    };

    // Analysis
    pub use crate::analysis::{
        apply_parity,
        build_chain_report,
        build_pricing_report,
        flagged_arbitrage,
        price as price_contract,
        price_chain,
        summarize,
        AnalysisConfig,
        ArbitrageConfig,
        ChainReport,
        ChainSummary,
        ExecutionConfig,
        FailurePolicy,
        MarketConfig,
        ParityMode,
        PricedChain,
        PricingFailure,
        PricingReport,
        ReportConfig,
        SideMeans,
        SnapshotAnalyzer,
        StrikeHistogram,
    };
}

// Re-export main types at crate root
pub use crate::core::{SnapshotError, SnapshotResult};
pub use crate::analysis::SnapshotAnalyzer;
