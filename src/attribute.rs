//! Joins parsed summary entries with ownership and application labels.

use crate::core::{AttributedFile, AttributionLabels, CoverageSummary};
use crate::owners;
use codeowners::Owners;

/// Literal segment marking the application layer in the supported
/// workspace layout.
const APPS_SEGMENT: &str = "apps/";

/// Derive the coarse application grouping for a report path: drop the
/// first `apps/` segment, then take the first `/`-delimited segment.
///
/// The heuristic covers exactly one workspace layout; paths from other
/// layouts get whatever their leading segment happens to be. Known
/// limitation, kept narrow on purpose.
pub fn application_name(path: &str) -> Option<String> {
    if path.is_empty() {
        return None;
    }
    let without_apps = path.replacen(APPS_SEGMENT, "", 1);
    without_apps.split('/').next().map(str::to_string)
}

/// Remove the first occurrence of the runner root anywhere in the
/// report key. Occurrence-based rather than anchored, matching the
/// pipelines this one replaces.
pub fn strip_runner_root(path: &str, runner_root: &str) -> String {
    if runner_root.is_empty() {
        return path.to_string();
    }
    path.replacen(runner_root, "", 1)
}

/// Attribute every file entry of a summary: strip the runner root from
/// the report key, resolve the owning team, derive the application
/// name. Labels are recomputed per entry, never cached.
pub fn attribute(
    summary: &CoverageSummary,
    ruleset: &Owners,
    runner_root: &str,
    team_prefix: &str,
) -> Vec<AttributedFile> {
    summary
        .file_entries()
        .map(|(key, coverage)| {
            let coverage_path = strip_runner_root(key, runner_root);
            let labels = AttributionLabels {
                owner_team: owners::resolve_owner_team(&coverage_path, ruleset, team_prefix),
                application_name: application_name(&coverage_path),
                coverage_path,
            };
            AttributedFile {
                labels,
                coverage: coverage.clone(),
            }
        })
        .collect()
}
