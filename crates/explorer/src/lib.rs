//! Insurance Cost Explorer
//!
//! Loads the insurance dataset, derives demographic features and assembles the
//! filtered view handed to the presentation layer.

pub mod config;
pub mod view;

pub use config::ExplorerConfig;
pub use view::{build_view, ChargeSummary, DashboardView};

use data_loader::{load_records, LoadError};
use thiserror::Error;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Explorer error types
#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Load failed: {0}")]
    Load(#[from] LoadError),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
}

/// Initialize logging to stderr; later calls keep the first subscriber
pub fn init_logging(level: &str) {
    let level = level.parse::<Level>().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        debug!("Tracing subscriber already installed");
    }
}

/// Load the configured dataset and build its view
pub fn run(config: &ExplorerConfig) -> Result<DashboardView, ExplorerError> {
    let selection = config.selection()?;

    info!("Loading records from {}", config.data_path.display());
    let records = load_records(&config.data_path, &config.loader_config())?;

    Ok(build_view(&records, &selection, config.include_records))
}
