use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::scoring::{Breakdown, EventDescription, ScoreResult};

/// Downloadable summary of one analysis.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRecord {
    pub event_name: String,
    pub timestamp: DateTime<Utc>,
    pub overall_score: u32,
    pub recommendation: String,
    pub breakdown: Breakdown,
    pub consulting_focused: bool,
}

impl ExportRecord {
    /// Build a record. The timestamp comes from the caller so the scoring
    /// result itself stays free of clock reads.
    pub fn new(event: &EventDescription, result: &ScoreResult, timestamp: DateTime<Utc>) -> Self {
        Self {
            event_name: event.name.clone(),
            timestamp,
            overall_score: result.overall_score,
            recommendation: result.recommendation.clone(),
            breakdown: result.breakdown,
            consulting_focused: true,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize export record")
    }
}

/// Default export file name: `event_analysis_<slug>.json`
pub fn default_file_name(event_name: &str) -> String {
    let mut slug = String::new();
    for c in event_name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let slug = slug.trim_end_matches('_');
    if slug.is_empty() {
        "event_analysis.json".to_string()
    } else {
        format!("event_analysis_{}.json", slug)
    }
}

/// Resolve where an export should go: the explicit path if given, else the
/// default file name inside `export_dir` (or the current directory).
pub fn resolve_export_path(
    explicit: Option<&Path>,
    export_dir: Option<&str>,
    event_name: &str,
) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(export_dir.unwrap_or(".")).join(default_file_name(event_name)),
    }
}

/// Write an export record as JSON atomically
///
/// Uses atomic-write-file so a failed write never leaves a partial file.
/// Creates the parent directory if it doesn't exist.
pub fn write_export(path: &Path, record: &ExportRecord) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, record).context("Failed to serialize export record")?;

    file.commit()
        .with_context(|| format!("Failed to save export to {}", path.display()))?;

    log::debug!("Exported analysis to {}", path.display());
    Ok(())
}
