// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Types exchanged with callers of the life-story services.

use serde::Serialize;
use strum::Display;

/// The agent's reply at capture time, as text or any JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentResponse {
    Text(String),
    Json(serde_json::Value),
}

impl AgentResponse {
    /// Text form of the reply. JSON strings are unwrapped, `null` is empty and
    /// anything else is serialized compactly.
    pub fn into_text(self) -> String {
        match self {
            AgentResponse::Text(text) => text,
            AgentResponse::Json(serde_json::Value::String(text)) => text,
            AgentResponse::Json(serde_json::Value::Null) => String::new(),
            AgentResponse::Json(value) => value.to_string(),
        }
    }
}

impl From<&str> for AgentResponse {
    fn from(text: &str) -> Self {
        AgentResponse::Text(text.to_string())
    }
}

impl From<String> for AgentResponse {
    fn from(text: String) -> Self {
        AgentResponse::Text(text)
    }
}

impl From<serde_json::Value> for AgentResponse {
    fn from(value: serde_json::Value) -> Self {
        AgentResponse::Json(value)
    }
}

/// Which tier produced a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PromptKind {
    FollowUp,
    QuestionnaireDriven,
    Seasonal,
    General,
}

/// A reminiscence prompt ready for the agent to speak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPrompt {
    pub prompt: String,
    #[serde(rename = "type")]
    pub kind: PromptKind,
    /// Id of the record a follow-up refers to.
    #[serde(rename = "basedOn", skip_serializing_if = "Option::is_none")]
    pub based_on: Option<String>,
}

/// How often one tag appears across a resident's stories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Tag frequencies over a resident's recent stories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagSummary {
    /// Descending by count, ties alphabetical.
    pub tags: Vec<TagCount>,
    /// Number of stories examined.
    pub total: usize,
}
