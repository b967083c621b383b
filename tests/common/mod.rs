// Test utility module for covemit integration tests
#![allow(dead_code)]

use covemit::{CoverageStats, CoverageSummary, FileCoverage, Pct};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Write a fixture file, creating parent directories as needed.
pub fn write_file(root: &Path, rel: &str, contents: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture dirs");
    }
    fs::write(&path, contents).expect("write fixture file");
    path
}

pub fn stats(pct: f64, total: u64, covered: u64) -> CoverageStats {
    CoverageStats {
        pct: Pct::Known(pct),
        total,
        covered,
        skipped: None,
    }
}

/// An entry carrying all four dimensions with the same figures.
pub fn full_entry(pct: f64, total: u64, covered: u64) -> FileCoverage {
    FileCoverage {
        lines: Some(stats(pct, total, covered)),
        statements: Some(stats(pct, total, covered)),
        functions: Some(stats(pct, total, covered)),
        branches: Some(stats(pct, total, covered)),
    }
}

/// A summary with a numeric aggregate plus one file entry.
pub fn summary_with(report_key: &str, entry: FileCoverage) -> CoverageSummary {
    let mut entries = BTreeMap::new();
    entries.insert("total".to_string(), full_entry(80.0, 100, 80));
    entries.insert(report_key.to_string(), entry);
    CoverageSummary { entries }
}

/// Serialized form of [`summary_with`], for on-disk fixtures.
pub fn summary_json(report_key: &str, entry: FileCoverage) -> String {
    serde_json::to_string_pretty(&summary_with(report_key, entry)).expect("serialize fixture")
}
