//! Float snapshot loading.
//!
//! A snapshot is what the upstream data service hands over: either a bare
//! JSON array of records or the `{"status", "floats", "count"}` envelope
//! served by the locations endpoint.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::{errors::FloatQueryError, models::FloatRecord};

#[derive(Debug, Deserialize)]
struct SnapshotEnvelope {
    floats: Vec<FloatRecord>,
    count: Option<usize>,
}

/// Parse and validate a snapshot
pub fn parse_snapshot(bytes: &[u8]) -> Result<Vec<FloatRecord>, FloatQueryError> {
    let is_array = bytes
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|&b| b == b'[');

    let records = if is_array {
        serde_json::from_slice::<Vec<FloatRecord>>(bytes)?
    } else {
        let SnapshotEnvelope { floats, count } = serde_json::from_slice(bytes)?;
        if let Some(count) = count.filter(|&c| c != floats.len()) {
            warn!(
                "Snapshot envelope count {} does not match {} floats",
                count,
                floats.len()
            );
        }
        floats
    };

    let mut seen = HashSet::with_capacity(records.len());
    for record in &records {
        record.validate()?;
        if !seen.insert(record.id.as_str()) {
            return Err(FloatQueryError::DuplicateId(record.id.clone()));
        }
    }

    Ok(records)
}

/// Read a snapshot file
pub async fn load_snapshot(path: &Path) -> Result<Vec<FloatRecord>, FloatQueryError> {
    info!("Loading float snapshot from {}", path.display());
    let bytes = tokio::fs::read(path).await?;
    let records = parse_snapshot(&bytes)?;
    info!("Loaded {} floats", records.len());
    Ok(records)
}
