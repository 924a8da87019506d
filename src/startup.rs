//! Application startup and initialization logic.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app_state::AppState;
use crate::config::{Config, LogFormat};
use crate::database;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the crate and tower-http log at the
/// configured level.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "movies_api={level},tower_http={level}",
            level = config.log_level
        )
        .into()
    });

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

/// Build the movie store and create the AppState.
pub async fn initialize_app(config: &Config) -> Result<AppState> {
    let store = database::setup_store(config.seed_file.as_deref())?;
    info!(movies = store.len().await, "✅ Movie store initialized");

    Ok(AppState::new(config.clone(), Arc::new(store)))
}
