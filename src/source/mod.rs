pub mod github;

use crate::error::{DoraError, Result};
use crate::types::pull_request::PullRequestRecord;
use std::fs;
use std::path::Path;

/// Reads a JSON array of pull-request records from disk.
pub fn load_records(path: &Path) -> Result<Vec<PullRequestRecord>> {
    if !path.exists() {
        return Err(DoraError::InputNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    let records: Vec<PullRequestRecord> = serde_json::from_str(&content)?;
    tracing::info!(count = records.len(), path = %path.display(), "loaded pull requests");
    Ok(records)
}

/// Writes records as pretty JSON, creating parent directories.
pub fn save_records(path: &Path, records: &[PullRequestRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    tracing::info!(count = records.len(), path = %path.display(), "saved pull requests");
    Ok(())
}
