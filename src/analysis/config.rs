//! Configuration for the analysis pipeline

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{year_fraction, MarketAssumptions, SnapshotError, SnapshotResult};

/// Configuration for a full snapshot analysis
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Market assumptions fed to Black-Scholes
    pub market: MarketConfig,
    /// Put-call parity check
    pub arbitrage: ArbitrageConfig,
    /// Batch pricing behaviour
    pub execution: ExecutionConfig,
    /// Report shape
    pub report: ReportConfig,
}

impl AnalysisConfig {
    /// Load from a JSON file. Missing sections fall back to defaults.
    pub fn from_path(path: impl AsRef<Path>) -> SnapshotResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
            .map_err(|e| SnapshotError::config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json(json: &str) -> SnapshotResult<Self> {
        serde_json::from_str(json).map_err(|e| SnapshotError::config(e.to_string()))
    }
}

/// Market inputs as configured.
///
/// Time to expiry is either given directly or derived from `expiry`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Underlying price
    /// Default: 25.0
    pub spot: f64,

    /// Annualized risk-free rate
    /// Default: 0.05
    pub risk_free_rate: f64,

    /// Annualized volatility
    /// Default: 0.5
    pub volatility: f64,

    /// Expiry date, used when `time_to_expiry_years` is not set
    /// Default: 2027-01-15
    pub expiry: Option<NaiveDate>,

    /// Explicit time to expiry in years; takes precedence over `expiry`
    /// Default: None
    pub time_to_expiry_years: Option<f64>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            spot: 25.0,
            risk_free_rate: 0.05,
            volatility: 0.5,
            expiry: NaiveDate::from_ymd_opt(2027, 1, 15),
            time_to_expiry_years: None,
        }
    }
}

impl MarketConfig {
    /// Resolve into validated assumptions as of `as_of`
    pub fn resolve(&self, as_of: NaiveDate) -> SnapshotResult<MarketAssumptions> {
        let time = match (self.time_to_expiry_years, self.expiry) {
            (Some(years), _) => years,
            (None, Some(expiry)) => year_fraction(as_of, expiry),
            (None, None) => {
                return Err(SnapshotError::config(
                    "market needs either `expiry` or `time_to_expiry_years`",
                ))
            }
        };

        MarketAssumptions::new(self.spot, self.risk_free_rate, time, self.volatility)
    }
}

/// How the per-contract parity discrepancy is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParityMode {
    /// Compare each row only with itself: the opposite leg is always absent,
    /// so no discrepancy is produced and nothing is flagged
    Literal,
    /// Pair each call with the put at the same strike and compare market mids
    #[default]
    PairedByStrike,
}

/// Put-call parity configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArbitrageConfig {
    /// Flag when discrepancy > threshold
    /// Default: 0.1
    pub threshold: f64,

    /// Default: PairedByStrike
    pub mode: ParityMode,
}

impl Default for ArbitrageConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            mode: ParityMode::default(),
        }
    }
}

/// What to do when one contract cannot be priced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop at the first failing contract (in input order)
    #[default]
    Abort,
    /// Keep going and report failures next to the priced contracts
    Collect,
}

/// Batch pricing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Price contracts on the rayon thread pool
    /// Default: true
    pub parallel: bool,

    /// Default: Abort
    pub failure_policy: FailurePolicy,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            failure_policy: FailurePolicy::default(),
        }
    }
}

/// Report shape configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Number of contracts in the most-liquid ranking
    /// Default: 10
    pub top_liquid: usize,

    /// Number of equal-width strike histogram bins
    /// Default: 20
    pub histogram_bins: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_liquid: 10,
            histogram_bins: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.market.spot, 25.0);
        assert_eq!(config.market.risk_free_rate, 0.05);
        assert_eq!(config.market.volatility, 0.5);
        assert_eq!(config.arbitrage.threshold, 0.1);
        assert_eq!(config.arbitrage.mode, ParityMode::PairedByStrike);
        assert_eq!(config.execution.failure_policy, FailurePolicy::Abort);
        assert_eq!(config.report.top_liquid, 10);
    }

    #[test]
    fn test_partial_json() {
        let config = AnalysisConfig::from_json(
            r#"{ "market": { "spot": 30.0, "time_to_expiry_years": 0.5 },
                 "arbitrage": { "mode": "literal" } }"#,
        )
        .unwrap();

        assert_eq!(config.market.spot, 30.0);
        assert_eq!(config.market.volatility, 0.5);
        assert_eq!(config.arbitrage.mode, ParityMode::Literal);
        assert_eq!(config.arbitrage.threshold, 0.1);
        assert!(config.execution.parallel);
    }

    #[test]
    fn test_resolve_prefers_explicit_years() {
        let as_of = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();

        let mut market = MarketConfig::default();
        let m = market.resolve(as_of).unwrap();
        assert!((m.time_to_expiry_years - 1.0).abs() < 1e-12);

        market.time_to_expiry_years = Some(2.0);
        let m = market.resolve(as_of).unwrap();
        assert_eq!(m.time_to_expiry_years, 2.0);
    }

    #[test]
    fn test_resolve_errors() {
        let as_of = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();

        let market = MarketConfig {
            expiry: None,
            ..Default::default()
        };
        assert!(matches!(market.resolve(as_of), Err(SnapshotError::Config(_))));

        let market = MarketConfig {
            time_to_expiry_years: Some(0.0),
            ..Default::default()
        };
        assert!(market.resolve(as_of).unwrap_err().is_market_input());
    }

    #[test]
    fn test_sample_config_matches_defaults() {
        let config = AnalysisConfig::from_json(include_str!("../../config/analysis.json")).unwrap();
        let defaults = AnalysisConfig::default();

        assert_eq!(config.market.expiry, defaults.market.expiry);
        assert_eq!(config.market.spot, defaults.market.spot);
        assert_eq!(config.arbitrage.mode, defaults.arbitrage.mode);
        assert_eq!(config.report.histogram_bins, defaults.report.histogram_bins);
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let err = AnalysisConfig::from_json(r#"{ "arbitrage": { "mode": "sideways" } }"#).unwrap_err();
        assert!(matches!(err, SnapshotError::Config(_)));
    }
}
