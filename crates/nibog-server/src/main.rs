//! Server binary for the NIBOG city admin.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `nibog-admin.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Build the seeded city catalog
//! 4. Assemble application state
//! 5. Serve until `Ctrl-C`

mod error;

use std::path::Path;
use std::sync::Arc;

use nibog_admin::AppState;
use nibog_core::config::{AdminConfig, LoggingConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Name of the configuration file looked up in the working directory.
const CONFIG_FILE: &str = "nibog-admin.yaml";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Config comes first so the log level and format can come from it.
    let (config, from_file) = load_config()?;
    init_tracing(&config.logging);

    info!("nibog-server starting");
    if from_file {
        info!(path = CONFIG_FILE, "Configuration loaded");
    } else {
        info!("Config file not found, using defaults");
    }
    info!(
        host = config.server.host,
        port = config.server.port,
        request_ms = config.latency.request_ms,
        saved_indicator_ms = config.latency.saved_indicator_ms,
        "Configuration"
    );

    let store = nibog_core::seed_catalog()?;
    info!(
        cities = store.cities().len(),
        venues = store.venues().len(),
        events = store.events().len(),
        "Catalog seeded"
    );

    let state = Arc::new(AppState::new(store, config.latency.clone())?);
    nibog_admin::start_server(&config.server, state).await?;

    info!("nibog-server shutdown complete");
    Ok(())
}

/// Load the admin configuration, falling back to defaults when the file
/// does not exist. The flag reports whether the file was read.
fn load_config() -> Result<(AdminConfig, bool), AppError> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        Ok((AdminConfig::from_file(path)?, true))
    } else {
        let mut config = AdminConfig::default();
        config.server.apply_env_overrides()?;
        Ok((config, false))
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
