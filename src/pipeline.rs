//! Orchestrates one coverage-emission run.

use crate::attribute;
use crate::config::PipelineConfig;
use crate::discovery;
use crate::emitter::MetricEmitter;
use crate::errors::Result;
use crate::owners;
use codeowners::Owners;

/// Run the full pipeline against the configured workspace.
pub fn run(config: &PipelineConfig) -> Result<()> {
    // Startup inputs come first: a missing ruleset fails before any
    // observation is buffered.
    let ruleset = owners::load_ruleset(&config.codeowners_file)?;
    let emitter = MetricEmitter::initialize(&config.service_name, &config.otel_collector_url)?;
    run_pipeline(config, &ruleset, emitter)
}

/// Drive discovery, attribution, and recording over an already
/// initialized emitter, then flush and shut the channel down.
///
/// A failure while recording is logged and swallowed so that buffered
/// observations still flush; skipping the flush would silently drop
/// everything recorded up to the failure.
pub fn run_pipeline(
    config: &PipelineConfig,
    ruleset: &Owners,
    emitter: MetricEmitter,
) -> Result<()> {
    log::info!("Meter provider created, recording coverage");

    if let Err(e) = record_coverage(config, ruleset, &emitter) {
        log::error!("Recording coverage failed: {e}");
    }
    log::info!("Coverage recorded");

    emitter.flush_and_shutdown()
}

fn record_coverage(
    config: &PipelineConfig,
    ruleset: &Owners,
    emitter: &MetricEmitter,
) -> Result<()> {
    let summaries = discovery::discover_summaries(&config.coverage_folder)?;

    for discovered in &summaries {
        log::info!("Processing file. Path: {}", discovered.path.display());
        for file in attribute::attribute(
            &discovered.summary,
            ruleset,
            &config.runner_root,
            &config.codeowners_team_prefix,
        ) {
            emitter.record_file(&file);
        }
    }

    Ok(())
}
