// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Row shapes at the storage boundary.
//!
//! Life stories are stored as owner-scoped `memories` rows with a JSON
//! payload. Encoding and decoding of that payload happens only here.

use chrono::{DateTime, Utc};
use hearth_core::types::truncate_chars;
use hearth_core::{LifeStoryRecord, NewLifeStory, TopicTag};
use serde::{Deserialize, Serialize};

pub use hearth_core::{Resident, ResidentProfile};

/// `memories.kind` value for life stories.
pub const LIFE_STORY_KIND: &str = "life_story";

/// Characters of the story used for the row's short label.
const TITLE_MAX_CHARS: usize = 60;

/// JSON payload of a life-story row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryPayload {
    pub story: String,
    pub warda_response: String,
    pub tags: Vec<TopicTag>,
    pub captured_at: DateTime<Utc>,
}

impl From<&NewLifeStory> for StoryPayload {
    fn from(story: &NewLifeStory) -> Self {
        Self {
            story: story.raw_text.clone(),
            warda_response: story.agent_response.clone(),
            tags: story.tags.clone(),
            captured_at: story.captured_at,
        }
    }
}

impl StoryPayload {
    pub fn into_record(self, id: String, owner_id: String) -> LifeStoryRecord {
        LifeStoryRecord {
            id,
            owner_id,
            raw_text: self.story,
            agent_response: self.warda_response,
            tags: self.tags,
            captured_at: self.captured_at,
        }
    }
}

/// Short label stored alongside the payload.
pub fn story_title(raw_text: &str) -> String {
    let title = truncate_chars(raw_text.trim(), TITLE_MAX_CHARS);
    if title.is_empty() {
        "Life story".to_string()
    } else {
        title
    }
}

/// Sortable UTC timestamp used for the `captured_at` column.
pub fn sortable_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
