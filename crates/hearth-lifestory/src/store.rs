// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capture and listing of life stories over a [`LifeStoryRepository`].
//!
//! Repository failures never reach callers: a failed or timed-out save is
//! reported as "nothing stored" and a failed list as an empty list. Both are
//! logged, with timeouts logged separately from errors.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use hearth_config::model::LifeStoryConfig;
use hearth_core::types::{truncate_chars, RESPONSE_MAX_CHARS, STORY_MAX_CHARS};
use hearth_core::{
    Clock, HearthError, LifeStoryRecord, LifeStoryRepository, NewLifeStory, StoryQuery,
};
use tracing::{debug, info, warn};

use crate::detector::matching_trigger;
use crate::tags::extract_tags;
use crate::types::AgentResponse;

/// Detects, tags and persists life stories; lists them back.
pub struct LifeStoryStore {
    repository: Arc<dyn LifeStoryRepository>,
    clock: Arc<dyn Clock>,
    call_timeout: Duration,
}

impl LifeStoryStore {
    pub fn new(
        repository: Arc<dyn LifeStoryRepository>,
        clock: Arc<dyn Clock>,
        call_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            clock,
            call_timeout,
        }
    }

    pub fn from_config(
        repository: Arc<dyn LifeStoryRepository>,
        clock: Arc<dyn Clock>,
        config: &LifeStoryConfig,
    ) -> Self {
        Self::new(
            repository,
            clock,
            Duration::from_secs(config.store_timeout_secs),
        )
    }

    /// Store `raw_text` as a life story if it reads as one.
    ///
    /// Returns `None` when the text is not a story or the write did not
    /// succeed.
    pub async fn save(
        &self,
        owner_id: &str,
        raw_text: &str,
        agent_response: impl Into<AgentResponse>,
    ) -> Option<LifeStoryRecord> {
        let Some(trigger) = matching_trigger(raw_text) else {
            debug!(owner_id, "no life story detected");
            return None;
        };

        let story = NewLifeStory {
            owner_id: owner_id.to_string(),
            raw_text: truncate_chars(raw_text, STORY_MAX_CHARS),
            agent_response: truncate_chars(&agent_response.into().into_text(), RESPONSE_MAX_CHARS),
            tags: extract_tags(raw_text),
            captured_at: self.clock.now(),
        };
        debug!(owner_id, %trigger, tags = ?story.tags, "life story detected");

        let record = self
            .bounded("insert_life_story", owner_id, self.repository.insert_life_story(story))
            .await?;
        info!(owner_id, record_id = %record.id, tag_count = record.tags.len(), "life story captured");
        Some(record)
    }

    /// List an owner's stories, most recent first.
    pub async fn list(&self, owner_id: &str, query: &StoryQuery) -> Vec<LifeStoryRecord> {
        if query.limit == 0 {
            return Vec::new();
        }
        self.bounded(
            "list_life_stories",
            owner_id,
            self.repository.list_life_stories(owner_id, query),
        )
        .await
        .unwrap_or_default()
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        owner_id: &str,
        call: impl Future<Output = Result<T, HearthError>>,
    ) -> Option<T> {
        match tokio::time::timeout(self.call_timeout, call).await {
            Ok(Ok(value)) => Some(value),
            Ok(Err(error)) => {
                warn!(owner_id, operation, error = %error, "life story repository call failed");
                None
            }
            Err(_) => {
                warn!(
                    owner_id,
                    operation,
                    timeout_ms = self.call_timeout.as_millis() as u64,
                    "life story repository call timed out"
                );
                None
            }
        }
    }
}
