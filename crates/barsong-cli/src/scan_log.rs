//! JSON log of processed scans.
//!
//! The log is a single JSON array; each scan appends one record and the file
//! is rewritten in full.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One processed scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRecord {
    /// Normalized scan text.
    pub barcode: String,
    /// Unix time in seconds.
    pub time: u64,
    /// Path of the generated MIDI file.
    pub output: String,
    /// BLAKE3 hash of the file.
    pub hash: String,
}

/// Reads the log, treating a missing or empty file as no records.
pub fn read_log(path: &Path) -> Result<Vec<ScanRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scan log: {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&content)
        .with_context(|| format!("Scan log is not a JSON array of records: {}", path.display()))
}

/// Appends a record, creating the log if needed.
pub fn append_record(path: &Path, record: ScanRecord) -> Result<()> {
    let mut records = read_log(path)?;
    records.push(record);
    let json = serde_json::to_string_pretty(&records)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write scan log: {}", path.display()))?;
    Ok(())
}
