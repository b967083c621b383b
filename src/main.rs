use anyhow::Result;
use clap::Parser;
use covemit::cli::Cli;
use covemit::config::PipelineConfig;

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let config = PipelineConfig::from(&cli);

    // Top-level catch-all: a failed run is logged, never a crash, so
    // the hosting CI step carries on.
    if let Err(e) = covemit::pipeline::run(&config) {
        log::error!("Coverage pipeline failed: {e}");
    }

    Ok(())
}

// Map the repeatable -v flag onto the env_logger filter; RUST_LOG wins.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
