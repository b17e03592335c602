// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `hearth serve`: storage, life-story engine and HTTP gateway.

use std::sync::Arc;

use hearth_config::model::HearthConfig;
use hearth_core::{HearthError, PluginAdapter, StorageAdapter, SystemClock};
use hearth_gateway::{start_server, GatewayState};
use hearth_lifestory::LifeStoryEngine;
use hearth_storage::SqliteStorage;
use tracing::{info, warn};

use crate::shutdown;

/// Open and initialize SQLite storage from configuration.
pub async fn open_storage(config: &HearthConfig) -> Result<Arc<SqliteStorage>, HearthError> {
    let storage = SqliteStorage::new(config.storage.clone())
        .with_capture_agent(config.lifestory.capture_agent.clone());
    storage.initialize().await?;
    Ok(Arc::new(storage))
}

/// The life-story engine over `storage` with the system clock.
pub fn build_engine(config: &HearthConfig, storage: &Arc<SqliteStorage>) -> LifeStoryEngine {
    LifeStoryEngine::new(
        storage.clone(),
        storage.clone(),
        Arc::new(SystemClock),
        &config.lifestory,
    )
}

/// Run the gateway until SIGINT/SIGTERM, then checkpoint storage.
pub async fn run_serve(config: HearthConfig) -> Result<(), HearthError> {
    info!(
        agent = %config.agent.name,
        database = %config.storage.database_path,
        "starting hearth serve"
    );

    let storage = open_storage(&config).await?;
    let engine = Arc::new(build_engine(&config, &storage));
    let state = GatewayState::new(
        engine,
        storage.clone(),
        config.gateway.bearer_token.clone(),
    );

    let cancel = shutdown::install_signal_handler();
    let served = start_server(&config.gateway, state, cancel).await;

    if let Err(e) = storage.shutdown().await {
        warn!(error = %e, "storage shutdown failed");
    }
    served?;

    info!("hearth serve shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hearth={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}
