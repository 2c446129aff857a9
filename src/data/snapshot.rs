//! Options-chain snapshot loader
//!
//! Reads the JSON snapshot layout:
//!
//! ```json
//! { "options": {
//!     "calls": [ { "strike": 20.0, "bid": {"price": 5.1, "orders": 3},
//!                  "ask": {"price": 5.4, "orders": 7} } ],
//!     "puts":  [ ... ] } }
//! ```
//!
//! and flattens it into calls followed by puts, each in file order.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::core::{Contract, OptionType, SnapshotError, SnapshotResult};

#[derive(Debug, Deserialize)]
struct SnapshotFile {
    options: OptionsDto,
}

#[derive(Debug, Deserialize)]
struct OptionsDto {
    calls: Vec<QuoteDto>,
    puts: Vec<QuoteDto>,
}

#[derive(Debug, Deserialize)]
struct QuoteDto {
    strike: f64,
    bid: SideDto,
    ask: SideDto,
}

#[derive(Debug, Deserialize)]
struct SideDto {
    price: f64,
    #[serde(deserialize_with = "order_count")]
    orders: u64,
}

impl QuoteDto {
    fn into_contract(self, option_type: OptionType) -> Contract {
        Contract::new(
            self.strike,
            option_type,
            self.bid.price,
            self.ask.price,
            self.bid.orders,
            self.ask.orders,
        )
    }
}

impl SnapshotFile {
    fn into_contracts(self) -> Vec<Contract> {
        let OptionsDto { calls, puts } = self.options;
        tracing::info!("Loaded snapshot: {} calls, {} puts", calls.len(), puts.len());

        let mut contracts = Vec::with_capacity(calls.len() + puts.len());
        contracts.extend(calls.into_iter().map(|q| q.into_contract(OptionType::Call)));
        contracts.extend(puts.into_iter().map(|q| q.into_contract(OptionType::Put)));
        contracts
    }
}

/// Order counts: non-negative integers. `3.0` is accepted, `3.5` and `-1` are not.
fn order_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let n = serde_json::Number::deserialize(deserializer)?;
    if let Some(count) = n.as_u64() {
        return Ok(count);
    }
    match n.as_f64() {
        Some(x) if x >= 0.0 && x.fract() == 0.0 && x <= u64::MAX as f64 => Ok(x as u64),
        _ => Err(D::Error::custom(format!(
            "expected a non-negative integer, got {}",
            n
        ))),
    }
}

/// Map a deserialization error to `MalformedInput` at the offending path
fn malformed(err: serde_path_to_error::Error<serde_json::Error>) -> SnapshotError {
    let path = err.path().to_string();
    let field = if path == "." { "<document>".to_string() } else { path };
    SnapshotError::malformed(field, err.into_inner().to_string())
}

fn read_snapshot<'de, D>(deserializer: D) -> SnapshotResult<Vec<Contract>>
where
    D: Deserializer<'de, Error = serde_json::Error>,
{
    let snapshot: SnapshotFile = serde_path_to_error::deserialize(deserializer).map_err(malformed)?;
    Ok(snapshot.into_contracts())
}

/// Load a snapshot from a JSON file
pub fn load_path(path: impl AsRef<Path>) -> SnapshotResult<Vec<Contract>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    tracing::debug!("Reading snapshot from {:?}", path);
    load_reader(BufReader::new(file))
}

/// Load a snapshot from any reader
pub fn load_reader(reader: impl Read) -> SnapshotResult<Vec<Contract>> {
    let mut de = serde_json::Deserializer::from_reader(reader);
    let contracts = read_snapshot(&mut de)?;
    de.end()
        .map_err(|e| SnapshotError::malformed("<document>", e.to_string()))?;
    Ok(contracts)
}

/// Load a snapshot from a JSON string
pub fn load_str(json: &str) -> SnapshotResult<Vec<Contract>> {
    let mut de = serde_json::Deserializer::from_str(json);
    let contracts = read_snapshot(&mut de)?;
    de.end()
        .map_err(|e| SnapshotError::malformed("<document>", e.to_string()))?;
    Ok(contracts)
}

/// Load a snapshot from an already parsed JSON document
pub fn load_value(value: &Value) -> SnapshotResult<Vec<Contract>> {
    read_snapshot(value)
}
