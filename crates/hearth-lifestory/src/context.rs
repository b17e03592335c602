// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Formats a resident's recent stories as a context block for the agent.

use std::sync::Arc;

use hearth_core::types::truncate_chars;
use hearth_core::{LifeStoryRecord, StoryQuery};

use crate::store::LifeStoryStore;

/// Characters of each story shown in the context block.
const CONTEXT_STORY_CHARS: usize = 150;

const HEADER: &str = "Life stories this resident has shared before:";
const INSTRUCTION: &str =
    "Refer back to these stories gently and invite the resident to tell you more about them.";

/// Builds the "previously shared stories" block injected into agent prompts.
pub struct ContextBuilder {
    store: Arc<LifeStoryStore>,
}

impl ContextBuilder {
    pub fn new(store: Arc<LifeStoryStore>) -> Self {
        Self { store }
    }

    /// The `max_entries` most recent stories as a text block, or `""` if
    /// there are none.
    pub async fn build(&self, owner_id: &str, max_entries: usize) -> String {
        let records = self
            .store
            .list(owner_id, &StoryQuery::recent(max_entries))
            .await;
        format_context(&records)
    }
}

fn format_line(record: &LifeStoryRecord) -> String {
    let tags = if record.tags.is_empty() {
        "none".to_string()
    } else {
        record
            .tags
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "- \"{}\" [tags: {tags}]",
        truncate_chars(&record.raw_text, CONTEXT_STORY_CHARS)
    )
}

/// Render records (already in display order) as a context block.
pub fn format_context(records: &[LifeStoryRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }
    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(HEADER.to_string());
    lines.extend(records.iter().map(format_line));
    lines.push(INSTRUCTION.to_string());
    lines.join("\n")
}
