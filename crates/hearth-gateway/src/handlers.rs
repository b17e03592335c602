// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the life-story REST API.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use hearth_core::{HealthStatus, HearthError, LifeStoryRecord, PluginAdapter, StoryQuery, TopicTag};
use hearth_lifestory::{AgentResponse, GeneratedPrompt, TagSummary};
use serde::{Deserialize, Serialize};

use crate::server::GatewayState;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A [`HearthError`] rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub HearthError);

impl From<HearthError> for ApiError {
    fn from(error: HearthError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            HearthError::NotFound { .. } => StatusCode::NOT_FOUND,
            HearthError::Storage { .. } | HearthError::Timeout { .. } => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            HearthError::Config(_) | HearthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status != StatusCode::NOT_FOUND {
            tracing::warn!(error = %self.0, %status, "request failed");
        }
        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// A stored story as returned by the list endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryView {
    pub id: String,
    pub story: String,
    pub warda_response: String,
    pub tags: Vec<TopicTag>,
    pub captured_at: DateTime<Utc>,
}

impl From<LifeStoryRecord> for StoryView {
    fn from(record: LifeStoryRecord) -> Self {
        Self {
            id: record.id,
            story: record.raw_text,
            warda_response: record.agent_response,
            tags: record.tags,
            captured_at: record.captured_at,
        }
    }
}

/// Query string for GET /v1/residents/{id}/life-stories.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub tag: Option<String>,
    pub limit: Option<usize>,
}

/// Query string for GET /v1/residents/{id}/life-stories/context.
#[derive(Debug, Deserialize)]
pub struct ContextParams {
    pub max: Option<usize>,
}

/// Request body for POST /v1/residents/{id}/life-stories.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureRequest {
    /// The resident's utterance.
    pub message: String,
    /// The agent's reply, as text or any JSON value.
    #[serde(default)]
    pub warda_response: Option<serde_json::Value>,
}

/// Response body for POST /v1/residents/{id}/life-stories.
#[derive(Debug, Serialize)]
pub struct CaptureResponse {
    pub stored: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// GET /health
pub async fn get_public_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    let status = match state.storage.health_check().await {
        Ok(HealthStatus::Healthy) => "healthy",
        Ok(HealthStatus::Unhealthy(_)) | Err(_) => "unhealthy",
    };
    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.health.start_time.elapsed().as_secs(),
    })
}

/// GET /v1/residents/{id}/life-stories
pub async fn list_life_stories(
    State(state): State<GatewayState>,
    Path(resident_id): Path<String>,
    Query(params): Query<ListParams>,
) -> Json<Vec<StoryView>> {
    let query = StoryQuery {
        tag: params.tag.filter(|t| !t.is_empty()),
        limit: params.limit.unwrap_or(state.engine.default_list_limit),
    };
    let records = state.engine.store.list(&resident_id, &query).await;
    Json(records.into_iter().map(StoryView::from).collect())
}

/// POST /v1/residents/{id}/life-stories
pub async fn post_life_story(
    State(state): State<GatewayState>,
    Path(resident_id): Path<String>,
    Json(body): Json<CaptureRequest>,
) -> Json<CaptureResponse> {
    let response = body
        .warda_response
        .map(AgentResponse::from)
        .unwrap_or_else(|| AgentResponse::Text(String::new()));
    let record = state
        .engine
        .store
        .save(&resident_id, &body.message, response)
        .await;
    Json(CaptureResponse {
        stored: record.is_some(),
        id: record.map(|r| r.id),
    })
}

/// GET /v1/residents/{id}/life-stories/prompt
pub async fn get_prompt(
    State(state): State<GatewayState>,
    Path(resident_id): Path<String>,
) -> Result<Json<GeneratedPrompt>, ApiError> {
    let prompt = state.engine.prompts.generate(&resident_id).await?;
    Ok(Json(prompt))
}

/// GET /v1/residents/{id}/life-stories/context
pub async fn get_context(
    State(state): State<GatewayState>,
    Path(resident_id): Path<String>,
    Query(params): Query<ContextParams>,
) -> impl IntoResponse {
    let max = params.max.unwrap_or(state.engine.context_max_entries);
    let context = state.engine.context.build(&resident_id, max).await;
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        context,
    )
}

/// GET /v1/residents/{id}/life-stories/tags
pub async fn get_tag_summary(
    State(state): State<GatewayState>,
    Path(resident_id): Path<String>,
) -> Json<TagSummary> {
    Json(state.engine.stats.summarize(&resident_id).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_request_accepts_any_response_shape() {
        let text: CaptureRequest =
            serde_json::from_str(r#"{"message":"I remember","wardaResponse":"Lovely"}"#).unwrap();
        assert_eq!(text.warda_response, Some(serde_json::json!("Lovely")));

        let structured: CaptureRequest = serde_json::from_str(
            r#"{"message":"I remember","wardaResponse":{"text":"Lovely"}}"#,
        )
        .unwrap();
        assert!(structured.warda_response.unwrap().is_object());

        let bare: CaptureRequest = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert!(bare.warda_response.is_none());
    }

    #[test]
    fn capture_response_omits_missing_id() {
        let json = serde_json::to_value(CaptureResponse {
            stored: false,
            id: None,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"stored": false}));
    }

    #[test]
    fn error_status_mapping() {
        let status = |e: HearthError| ApiError(e).into_response().status();
        assert_eq!(
            status(HearthError::resident_not_found("r")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status(HearthError::Storage {
                source: "down".into()
            }),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status(HearthError::Internal("bug".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
