//! Startup wiring
//!
//! Turns an `AppConfig` into a ready `SettingsStore`: pool, tables, repositories.

use settings_common::{
    try_init_tracing_with_config, AppConfig, AppError, AppResult, TracingConfig, TracingError,
};
use settings_db::{create_pool, create_schema, DatabaseConfig};
use tracing::{debug, info, instrument};

use crate::services::{ServiceContext, SettingsStore};

/// Connect to PostgreSQL, make sure the tables exist, and build the store
#[instrument(skip(config), fields(app = %config.app.name))]
pub async fn connect(config: &AppConfig) -> AppResult<SettingsStore> {
    let pool = create_pool(&DatabaseConfig::from(&config.database))
        .await
        .map_err(AppError::database)?;

    create_schema(&pool).await.map_err(AppError::database)?;

    info!("Settings store ready");
    Ok(SettingsStore::new(ServiceContext::postgres(pool)))
}

/// Load config from the environment, install logging, and connect
///
/// An already installed tracing subscriber is kept.
pub async fn init_from_env() -> AppResult<SettingsStore> {
    let config = AppConfig::from_env()?;

    install_tracing(&TracingConfig::from_app_config(&config));

    connect(&config).await
}

/// Install the subscriber unless the host process already has one
///
/// Returns whether this call installed it.
fn install_tracing(config: &TracingConfig) -> bool {
    match try_init_tracing_with_config(config) {
        Ok(()) => true,
        Err(TracingError::AlreadyInitialized) => {
            debug!("Tracing subscriber already installed, keeping it");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_tracing_keeps_existing_subscriber() {
        let config = TracingConfig::default();
        install_tracing(&config);

        // A second install always finds the first one in place
        assert!(!install_tracing(&config));
    }
}
