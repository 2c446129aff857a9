//! Error types for snapshot analysis

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Malformed input at `{field}`: {reason}")]
    MalformedInput { field: String, reason: String },

    #[error("Invalid market input: `{field}` must be {requirement}, got {value}")]
    InvalidMarketInput {
        field: &'static str,
        requirement: &'static str,
        value: f64,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

impl SnapshotError {
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_market(field: &'static str, requirement: &'static str, value: f64) -> Self {
        Self::InvalidMarketInput {
            field,
            requirement,
            value,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for errors raised while validating pricing inputs
    pub fn is_market_input(&self) -> bool {
        matches!(self, Self::InvalidMarketInput { .. })
    }
}

/// Require a finite, strictly positive value
pub(crate) fn require_positive(field: &'static str, value: f64) -> SnapshotResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SnapshotError::invalid_market(field, "finite and positive", value))
    }
}
