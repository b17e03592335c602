// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::get,
    Router,
};
use hearth_config::model::GatewayConfig;
use hearth_core::{HearthError, StorageAdapter};
use hearth_lifestory::LifeStoryEngine;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;

use crate::auth::{auth_middleware, AuthConfig};
use crate::handlers;

/// Health state for the unauthenticated health endpoint.
#[derive(Clone)]
pub struct HealthState {
    /// Process start time for uptime calculation.
    pub start_time: std::time::Instant,
}

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// Life-story services.
    pub engine: Arc<LifeStoryEngine>,
    /// Storage backend, used for health reporting.
    pub storage: Arc<dyn StorageAdapter>,
    pub auth: AuthConfig,
    pub health: HealthState,
}

impl GatewayState {
    pub fn new(
        engine: Arc<LifeStoryEngine>,
        storage: Arc<dyn StorageAdapter>,
        bearer_token: Option<String>,
    ) -> Self {
        Self {
            engine,
            storage,
            auth: AuthConfig { bearer_token },
            health: HealthState {
                start_time: std::time::Instant::now(),
            },
        }
    }
}

/// Build the router:
/// - GET /health (public)
/// - GET|POST /v1/residents/{id}/life-stories
/// - GET /v1/residents/{id}/life-stories/prompt
/// - GET /v1/residents/{id}/life-stories/context
/// - GET /v1/residents/{id}/life-stories/tags
pub fn router(state: GatewayState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(handlers::get_public_health))
        .with_state(state.clone());

    let api_routes = Router::new()
        .route(
            "/v1/residents/{id}/life-stories",
            get(handlers::list_life_stories).post(handlers::post_life_story),
        )
        .route(
            "/v1/residents/{id}/life-stories/prompt",
            get(handlers::get_prompt),
        )
        .route(
            "/v1/residents/{id}/life-stories/context",
            get(handlers::get_context),
        )
        .route(
            "/v1/residents/{id}/life-stories/tags",
            get(handlers::get_tag_summary),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.auth.clone(),
            auth_middleware,
        ))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(CorsLayer::permissive())
}

/// Bind to the configured address and serve until `cancel` fires.
pub async fn start_server(
    config: &GatewayConfig,
    state: GatewayState,
    cancel: CancellationToken,
) -> Result<(), HearthError> {
    if state.auth.bearer_token.is_none() {
        tracing::warn!("gateway.bearer_token is not set; all /v1 requests will be rejected");
    }

    let app = router(state);
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| HearthError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await
        .map_err(|e| HearthError::Internal(format!("gateway server error: {e}")))?;

    tracing::info!("Gateway server stopped");
    Ok(())
}
