// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway routes driven through the router over a temp SQLite harness.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use hearth_config::model::StorageConfig;
use hearth_core::ResidentProfile;
use hearth_gateway::{router, GatewayState};
use hearth_storage::SqliteStorage;
use hearth_test_utils::TestHarness;
use serde_json::{json, Value};
use tower::ServiceExt;

const TOKEN: &str = "test-token";

async fn app_with_token(token: Option<&str>) -> (TestHarness, Router) {
    let harness = TestHarness::builder().build().await.unwrap();
    harness.add_resident("res-1", Some("Margaret")).await.unwrap();
    let state = GatewayState::new(
        harness.engine.clone(),
        harness.storage.clone(),
        token.map(str::to_string),
    );
    (harness, router(state))
}

async fn app() -> (TestHarness, Router) {
    app_with_token(Some(TOKEN)).await
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {TOKEN}"))
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {TOKEN}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, request).await;
    (status, serde_json::from_str(&body).unwrap())
}

#[tokio::test]
async fn health_is_public() {
    let (_h, app) = app().await;
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send_json(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn health_reports_unhealthy_storage() {
    let harness = TestHarness::builder().build().await.unwrap();
    let unopened = SqliteStorage::new(StorageConfig::default());
    let app = router(GatewayState::new(
        harness.engine.clone(),
        Arc::new(unopened),
        Some(TOKEN.to_string()),
    ));
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send_json(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "unhealthy");
}

#[tokio::test]
async fn v1_requires_matching_bearer_token() {
    let (_h, app) = app().await;
    let missing = Request::builder()
        .uri("/v1/residents/res-1/life-stories")
        .body(Body::empty())
        .unwrap();
    assert_eq!(send(&app, missing).await.0, StatusCode::UNAUTHORIZED);

    let wrong = Request::builder()
        .uri("/v1/residents/res-1/life-stories")
        .header(header::AUTHORIZATION, "Bearer nope")
        .body(Body::empty())
        .unwrap();
    assert_eq!(send(&app, wrong).await.0, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn v1_is_closed_without_configured_token() {
    let (_h, app) = app_with_token(None).await;
    let (status, _) = send(&app, get("/v1/residents/res-1/life-stories")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn capture_then_list() {
    let (_h, app) = app().await;
    let (status, created) = send_json(
        &app,
        post_json(
            "/v1/residents/res-1/life-stories",
            json!({"message": "I used to go to the seaside every summer", "wardaResponse": "How lovely"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["stored"], true);
    let id = created["id"].as_str().unwrap().to_string();

    let (status, listed) = send_json(&app, get("/v1/residents/res-1/life-stories")).await;
    assert_eq!(status, StatusCode::OK);
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], id.as_str());
    assert_eq!(listed[0]["story"], "I used to go to the seaside every summer");
    assert_eq!(listed[0]["wardaResponse"], "How lovely");
    assert_eq!(listed[0]["tags"], json!(["topic:travel"]));
    assert!(listed[0]["capturedAt"].is_string());
}

#[tokio::test]
async fn non_story_is_not_stored() {
    let (_h, app) = app().await;
    let (status, body) = send_json(
        &app,
        post_json(
            "/v1/residents/res-1/life-stories",
            json!({"message": "What's for lunch?"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"stored": false}));
}

#[tokio::test]
async fn structured_agent_response_is_stored_as_json_text() {
    let (_h, app) = app().await;
    send(
        &app,
        post_json(
            "/v1/residents/res-1/life-stories",
            json!({"message": "I remember the blitz", "wardaResponse": {"text": "Tell me more"}}),
        ),
    )
    .await;
    let (_, listed) = send_json(&app, get("/v1/residents/res-1/life-stories")).await;
    assert_eq!(listed[0]["wardaResponse"], r#"{"text":"Tell me more"}"#);
}

#[tokio::test]
async fn list_filters_by_tag_and_limit() {
    let (harness, app) = app().await;
    harness.say("res-1", "I used to work in the mill").await.unwrap();
    harness.say("res-1", "I remember the seaside").await.unwrap();
    harness.say("res-1", "I used to sing in the choir").await.unwrap();

    let (_, work) = send_json(&app, get("/v1/residents/res-1/life-stories?tag=topic:work")).await;
    assert_eq!(work.as_array().unwrap().len(), 1);

    let (_, limited) = send_json(&app, get("/v1/residents/res-1/life-stories?limit=2")).await;
    let limited = limited.as_array().unwrap();
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0]["story"], "I used to sing in the choir");
}

#[tokio::test]
async fn prompt_for_known_resident() {
    let (harness, app) = app().await;
    harness
        .add_profile(
            "res-1",
            &ResidentProfile {
                birthplace: Some("Leeds".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let (status, body) = send_json(&app, get("/v1/residents/res-1/life-stories/prompt")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "questionnaire_driven");
    assert_eq!(
        body["prompt"],
        "Margaret, you grew up in Leeds. What do you remember most about it?"
    );
    assert!(body.get("basedOn").is_none());
}

#[tokio::test]
async fn follow_up_prompt_carries_based_on() {
    let (harness, app) = app().await;
    let record = harness.say("res-1", "I used to bake bread every Sunday").await.unwrap();

    let (_, body) = send_json(&app, get("/v1/residents/res-1/life-stories/prompt")).await;
    assert_eq!(body["type"], "follow_up");
    assert_eq!(body["basedOn"], record.id.as_str());
}

#[tokio::test]
async fn prompt_for_unknown_resident_is_404() {
    let (_h, app) = app().await;
    let (status, body) = send_json(&app, get("/v1/residents/ghost/life-stories/prompt")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("ghost"));
}

#[tokio::test]
async fn context_is_plain_text() {
    let (harness, app) = app().await;
    let response = app
        .clone()
        .oneshot(get("/v1/residents/res-1/life-stories/context"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(body.is_empty());

    for i in 0..3 {
        harness.say("res-1", &format!("I remember winter {i}")).await.unwrap();
    }
    let (_, text) = send(&app, get("/v1/residents/res-1/life-stories/context?max=2")).await;
    assert_eq!(text.lines().count(), 4);
    assert!(text.contains("winter 2"));
    assert!(!text.contains("winter 0"));
}

#[tokio::test]
async fn tag_summary() {
    let (harness, app) = app().await;
    harness.say("res-1", "I used to go camping").await.unwrap();
    harness.say("res-1", "My wife loved our holiday in Spain").await.unwrap();

    let (status, body) = send_json(&app, get("/v1/residents/res-1/life-stories/tags")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["tags"][0], json!({"tag": "topic:travel", "count": 2}));
    assert_eq!(body["tags"][1], json!({"tag": "family:spouse", "count": 1}));
}
