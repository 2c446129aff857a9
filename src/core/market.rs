//! Market assumptions shared by every contract in a run

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{require_positive, SnapshotError, SnapshotResult};

/// Day count used to turn calendar days into years
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Inputs to Black-Scholes that are not part of the snapshot.
///
/// Built once before pricing and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketAssumptions {
    /// Underlying price
    pub spot: f64,
    /// Annualized continuously-compounded risk-free rate
    pub risk_free_rate: f64,
    /// Time to expiry in years
    pub time_to_expiry_years: f64,
    /// Annualized volatility
    pub volatility: f64,
}

impl MarketAssumptions {
    /// Create and validate
    pub fn new(
        spot: f64,
        risk_free_rate: f64,
        time_to_expiry_years: f64,
        volatility: f64,
    ) -> SnapshotResult<Self> {
        let assumptions = Self {
            spot,
            risk_free_rate,
            time_to_expiry_years,
            volatility,
        };
        assumptions.validate()?;
        Ok(assumptions)
    }

    /// Derive time to expiry from calendar dates
    pub fn from_expiry(
        spot: f64,
        risk_free_rate: f64,
        volatility: f64,
        expiry: NaiveDate,
        as_of: NaiveDate,
    ) -> SnapshotResult<Self> {
        Self::new(
            spot,
            risk_free_rate,
            year_fraction(as_of, expiry),
            volatility,
        )
    }

    /// Check that Black-Scholes is defined for these inputs.
    ///
    /// Time is checked first so an expired horizon is always reported as such.
    pub fn validate(&self) -> SnapshotResult<()> {
        require_positive("time_to_expiry_years", self.time_to_expiry_years)?;
        require_positive("volatility", self.volatility)?;
        require_positive("spot", self.spot)?;
        if !self.risk_free_rate.is_finite() {
            return Err(SnapshotError::invalid_market(
                "risk_free_rate",
                "finite",
                self.risk_free_rate,
            ));
        }
        Ok(())
    }

    /// e^(-rT)
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_expiry_years).exp()
    }

    /// σ√T
    pub fn total_vol(&self) -> f64 {
        self.volatility * self.time_to_expiry_years.sqrt()
    }
}

/// Years between two dates on an actual/365 basis
pub fn year_fraction(from: NaiveDate, to: NaiveDate) -> f64 {
    (to - from).num_days() as f64 / DAYS_PER_YEAR
}
