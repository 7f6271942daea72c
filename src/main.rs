use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use badge_scanner::cli::Cli;
use badge_scanner::config;
use badge_scanner::misc::render;
use badge_scanner::service::scan_badge;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse_args();

    // One request in flight, nothing to run in parallel.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    let scan_url = config::scan_url();
    info!("Pinging scanner API for Participant ID: {}", cli.id);
    let result = runtime.block_on(scan_badge(&scan_url, cli.id));

    println!("{}", render(&result));
    Ok(())
}
