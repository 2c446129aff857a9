//! SnapshotAnalyzer - Main facade for the analysis pipeline
//!
//! Runs load → price → parity → aggregate with one configuration.

use std::path::Path;

use chrono::NaiveDate;

use super::{
    apply_parity, build_chain_report, build_pricing_report, price_chain, AnalysisConfig,
    ChainReport, PricingReport,
};
use crate::core::{Contract, MarketAssumptions, SnapshotResult};
use crate::data::load_path;

/// Main analyzer that runs the full pipeline
pub struct SnapshotAnalyzer {
    config: AnalysisConfig,
}

impl SnapshotAnalyzer {
    /// Create a new analyzer with default configuration
    pub fn new() -> Self {
        Self {
            config: AnalysisConfig::default(),
        }
    }

    /// Create with custom configuration
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Statistics only, no pricing
    pub fn summarize(&self, contracts: Vec<Contract>) -> ChainReport {
        build_chain_report(contracts, &self.config.report)
    }

    /// Resolve the configured market as of `as_of` and price the chain
    pub fn price(&self, contracts: &[Contract], as_of: NaiveDate) -> SnapshotResult<PricingReport> {
        let assumptions = self.config.market.resolve(as_of)?;
        self.price_with(contracts, assumptions)
    }

    /// Price the chain under explicit assumptions
    pub fn price_with(
        &self,
        contracts: &[Contract],
        assumptions: MarketAssumptions,
    ) -> SnapshotResult<PricingReport> {
        assumptions.validate()?;
        tracing::info!(
            "Pricing {} contracts: S={} r={} T={:.4}y σ={}",
            contracts.len(),
            assumptions.spot,
            assumptions.risk_free_rate,
            assumptions.time_to_expiry_years,
            assumptions.volatility
        );

        let mut chain = price_chain(contracts, &assumptions, &self.config.execution)?;
        apply_parity(&mut chain.contracts, &assumptions, &self.config.arbitrage);

        Ok(build_pricing_report(chain, assumptions, &self.config.report))
    }

    /// Load a snapshot file and summarize it
    pub fn summarize_file(&self, path: impl AsRef<Path>) -> SnapshotResult<ChainReport> {
        Ok(self.summarize(load_path(path)?))
    }

    /// Load a snapshot file and price it
    pub fn price_file(&self, path: impl AsRef<Path>, as_of: NaiveDate) -> SnapshotResult<PricingReport> {
        let contracts = load_path(path)?;
        self.price(&contracts, as_of)
    }
}

impl Default for SnapshotAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
