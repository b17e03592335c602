// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-shot CLI commands: `detect`, `prompt` and `context`.

use hearth_config::model::HearthConfig;
use hearth_core::{HearthError, StorageAdapter, TopicTag};
use hearth_lifestory::{detect_story, extract_tags, matching_trigger};
use serde_json::json;

use crate::serve::{build_engine, open_storage};

/// Detection result for `hearth detect`, as JSON.
pub fn detect_report(text: &str) -> serde_json::Value {
    let tags: Vec<TopicTag> = extract_tags(text);
    json!({
        "story": detect_story(text),
        "trigger": matching_trigger(text).map(|family| family.to_string()),
        "tags": tags,
    })
}

/// Generate the next reminiscence prompt for a resident, as JSON.
pub async fn run_prompt(config: &HearthConfig, resident: &str) -> Result<String, HearthError> {
    let storage = open_storage(config).await?;
    let engine = build_engine(config, &storage);
    let generated = engine.prompts.generate(resident).await;
    storage.close().await?;

    let prompt = generated?;
    serde_json::to_string_pretty(&prompt).map_err(|e| HearthError::Internal(e.to_string()))
}

/// Render the agent context block for a resident.
pub async fn run_context(
    config: &HearthConfig,
    resident: &str,
    max: Option<usize>,
) -> Result<String, HearthError> {
    let storage = open_storage(config).await?;
    let engine = build_engine(config, &storage);
    let max = max.unwrap_or(engine.context_max_entries);
    let block = engine.context.build(resident, max).await;
    storage.close().await?;
    Ok(block)
}
