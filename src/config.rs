//! Immutable run configuration.

use crate::cli::Cli;
use std::path::PathBuf;

/// Everything one run needs, bound once at startup.
///
/// The pipeline is parameterized entirely by this value; there is no
/// other process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Telemetry service identifier reported with every observation.
    pub service_name: String,
    /// Root folder scanned for coverage reports, trailing separator
    /// included.
    pub coverage_folder: String,
    /// OTLP collector endpoint observations are pushed to.
    pub otel_collector_url: String,
    /// Absolute path prefix stripped from report keys.
    pub runner_root: String,
    /// Prefix identifying team owners among a rule's owner list.
    pub codeowners_team_prefix: String,
    /// Location of the CODEOWNERS ruleset.
    pub codeowners_file: PathBuf,
    /// Accepted for workflow parity; the pipeline itself never uses it.
    pub github_token: Option<String>,
}

impl From<&Cli> for PipelineConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            service_name: cli.service_name.clone(),
            coverage_folder: cli.coverage_folder.clone(),
            otel_collector_url: cli.otel_collector_url.clone(),
            runner_root: cli.runner_root.clone(),
            codeowners_team_prefix: cli.codeowners_team_prefix.clone(),
            codeowners_file: cli.codeowners_file.clone(),
            github_token: cli.github_token.clone(),
        }
    }
}
