use clap::Parser;
use std::path::PathBuf;

/// Scan a workspace for coverage summaries, attribute each file to its
/// owning team via CODEOWNERS, and push the figures as OTLP metrics.
#[derive(Parser, Debug)]
#[command(name = "covemit")]
#[command(about = "Attributes code coverage to owning teams and emits OTLP metrics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Telemetry service identifier reported with every metric
    #[arg(long = "service-name", env = "COVEMIT_SERVICE_NAME")]
    pub service_name: String,

    /// Root folder scanned for coverage-summary.json reports,
    /// trailing separator included
    #[arg(long = "coverage-folder", env = "COVEMIT_COVERAGE_FOLDER")]
    pub coverage_folder: String,

    /// OTLP collector endpoint metrics are pushed to
    #[arg(long = "otel-collector-url", env = "COVEMIT_OTEL_COLLECTOR_URL")]
    pub otel_collector_url: String,

    /// Absolute path prefix stripped from report keys
    #[arg(
        long = "runner-root",
        env = "COVEMIT_RUNNER_ROOT",
        default_value = "/home/runner/work"
    )]
    pub runner_root: String,

    /// Prefix identifying team owners in CODEOWNERS entries (e.g. @org/)
    #[arg(
        long = "codeowners-team-prefix",
        env = "COVEMIT_CODEOWNERS_TEAM_PREFIX",
        default_value = ""
    )]
    pub codeowners_team_prefix: String,

    /// Path to the CODEOWNERS ruleset
    #[arg(long = "codeowners-file", default_value = "CODEOWNERS")]
    pub codeowners_file: PathBuf,

    /// CI access token, accepted for workflow parity; unused by the pipeline
    #[arg(long = "github-token", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Increase verbosity level (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_hosting_workflow() {
        let cli = Cli::parse_from([
            "covemit",
            "--service-name",
            "svc",
            "--coverage-folder",
            "coverage/",
            "--otel-collector-url",
            "http://collector:4318/v1/metrics",
        ]);
        assert_eq!(cli.runner_root, "/home/runner/work");
        assert_eq!(cli.codeowners_team_prefix, "");
        assert_eq!(cli.codeowners_file, PathBuf::from("CODEOWNERS"));
        assert_eq!(cli.github_token, None);
        assert_eq!(cli.verbosity, 0);
    }
}
