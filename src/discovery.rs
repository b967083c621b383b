//! Locates and parses `coverage-summary.json` reports under the
//! coverage folder.

use crate::core::CoverageSummary;
use crate::errors::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed report filename produced by the coverage tooling.
pub const SUMMARY_FILE_NAME: &str = "coverage-summary.json";

/// One report that passed parsing and the validity check.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredSummary {
    pub path: PathBuf,
    pub summary: CoverageSummary,
}

/// Recursively enumerate summary reports under the coverage folder.
///
/// The search pattern is `<coverage_folder>**/coverage-summary.json`,
/// so the folder is expected to carry its trailing separator.
/// Unreadable, malformed, and data-free reports are skipped with a
/// per-file diagnostic; only an invalid glob pattern is an error.
/// Result order is filesystem enumeration order and is not stable
/// across platforms.
pub fn discover_summaries(coverage_folder: &str) -> Result<Vec<DiscoveredSummary>> {
    let pattern = format!("{coverage_folder}**/{SUMMARY_FILE_NAME}");
    let mut found = 0usize;
    let mut summaries = Vec::new();

    let paths = glob::glob(&pattern)
        .map_err(|e| Error::Discovery(format!("invalid search pattern {pattern}: {e}")))?;

    for entry in paths {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                log::warn!("Skipping unreadable path during discovery: {e}");
                continue;
            }
        };
        found += 1;
        match load_summary(&path) {
            Ok(Some(summary)) => summaries.push(DiscoveredSummary { path, summary }),
            Ok(None) => log::info!("File {} has no test coverage data", path.display()),
            Err(e) => log::warn!("Skipping {}: {e}", path.display()),
        }
    }

    if found == 0 {
        log::error!("No summary files found.");
    }

    Ok(summaries)
}

/// Parse one report; `None` when it carries no usable coverage data.
fn load_summary(path: &Path) -> Result<Option<CoverageSummary>> {
    let contents = fs::read_to_string(path)?;
    let summary: CoverageSummary =
        serde_json::from_str(&contents).map_err(|e| Error::parse(path, e.to_string()))?;
    Ok(summary.has_coverage_data().then_some(summary))
}
