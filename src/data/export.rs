//! Report export
//!
//! Writes reports as pretty-printed JSON for a presentation layer.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::{SnapshotError, SnapshotResult};

/// Save a report as JSON, creating parent directories if needed
pub fn save_json<T: Serialize>(path: impl AsRef<Path>, report: &T) -> SnapshotResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(report)
        .map_err(|e| SnapshotError::Serialization(e.to_string()))?;
    fs::write(path, json)?;

    tracing::info!("Wrote report to {:?}", path);
    Ok(())
}

/// Load a previously saved report
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> SnapshotResult<T> {
    let json = fs::read_to_string(path.as_ref())?;
    serde_json::from_str(&json).map_err(|e| SnapshotError::Serialization(e.to_string()))
}
