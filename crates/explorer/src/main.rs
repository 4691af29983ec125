//! Insurance Cost Explorer - Main Entry Point
//!
//! Usage: `insurance-explorer [CONFIG_FILE]`. Prints the dashboard view as JSON.

use anyhow::Context;
use explorer::{init_logging, run, ExplorerConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => ExplorerConfig::load_from(&path),
        None => ExplorerConfig::load(),
    }
    .context("failed to load configuration")?;

    init_logging(&config.log_level);

    info!("=== Insurance Cost Explorer v{} ===", env!("CARGO_PKG_VERSION"));

    let view = run(&config)?;
    info!(
        "{} of {} records selected",
        view.filtered_records, view.total_records
    );

    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}
