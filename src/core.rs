//! Data model for parsed coverage summaries and the labels attached to
//! them on their way to the telemetry sink.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Percentage field of a summary entry.
///
/// Report generators emit the literal string `"Unknown"` when a
/// dimension could not be measured; any non-numeric value is treated as
/// that sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pct {
    Known(f64),
    Sentinel(String),
}

impl Pct {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Pct::Known(value) => Some(*value),
            Pct::Sentinel(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Pct::Known(_))
    }
}

/// One dimension's figures as reported by the summary file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageStats {
    pub pct: Pct,
    pub total: u64,
    pub covered: u64,
    /// Present in the wire shape; parsed but never emitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipped: Option<u64>,
}

/// The four coverage dimensions of a single report entry.
///
/// Partial tooling may omit dimensions; that is a data-quality issue
/// handled at record time, not a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileCoverage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<CoverageStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statements: Option<CoverageStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functions: Option<CoverageStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branches: Option<CoverageStats>,
}

impl FileCoverage {
    pub fn get(&self, dimension: CoverageDimension) -> Option<&CoverageStats> {
        match dimension {
            CoverageDimension::Lines => self.lines.as_ref(),
            CoverageDimension::Statements => self.statements.as_ref(),
            CoverageDimension::Functions => self.functions.as_ref(),
            CoverageDimension::Branches => self.branches.as_ref(),
        }
    }
}

/// Axis along which coverage is measured; rendered as the
/// `coverage_type` label on every observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverageDimension {
    Lines,
    Statements,
    Functions,
    Branches,
}

impl CoverageDimension {
    pub const ALL: [CoverageDimension; 4] = [
        CoverageDimension::Lines,
        CoverageDimension::Statements,
        CoverageDimension::Functions,
        CoverageDimension::Branches,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CoverageDimension::Lines => "lines",
            CoverageDimension::Statements => "statements",
            CoverageDimension::Functions => "functions",
            CoverageDimension::Branches => "branches",
        }
    }
}

/// Parsed contents of one `coverage-summary.json`: report key to entry,
/// including the aggregate `"total"` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoverageSummary {
    pub entries: BTreeMap<String, FileCoverage>,
}

impl CoverageSummary {
    pub const TOTAL_KEY: &'static str = "total";

    /// A summary is usable only when the aggregate line percentage is
    /// numeric rather than the `"Unknown"` sentinel.
    pub fn has_coverage_data(&self) -> bool {
        self.entries
            .get(Self::TOTAL_KEY)
            .and_then(|total| total.lines.as_ref())
            .is_some_and(|lines| lines.pct.is_known())
    }

    /// Every entry except the aggregate `"total"` key.
    pub fn file_entries(&self) -> impl Iterator<Item = (&str, &FileCoverage)> {
        self.entries
            .iter()
            .filter(|(key, _)| key.as_str() != Self::TOTAL_KEY)
            .map(|(key, entry)| (key.as_str(), entry))
    }
}

/// Labels attached to every observation derived from one report entry.
/// Recomputed per entry, never cached across summaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributionLabels {
    /// Workspace-relative report key.
    pub coverage_path: String,
    /// Owning team, or the UNOWNED sentinel.
    pub owner_team: String,
    /// Coarse application grouping; absent for paths outside the known
    /// workspace layout.
    pub application_name: Option<String>,
}

/// A report entry joined with its attribution labels; the unit handed
/// to the metric emitter.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributedFile {
    pub labels: AttributionLabels,
    pub coverage: FileCoverage,
}
