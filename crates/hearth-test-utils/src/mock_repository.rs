// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory life-story repository with failure and latency injection.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use hearth_core::types::serialized_tags;
use hearth_core::{HearthError, LifeStoryRecord, LifeStoryRepository, NewLifeStory, StoryQuery};
use tokio::sync::Mutex;

/// A [`LifeStoryRepository`] that keeps records in memory.
///
/// Listing follows the SQLite adapter: owner-scoped, newest first (ties by
/// reverse insertion), and the tag filter is a substring test against the
/// compact JSON tag list.
#[derive(Default)]
pub struct MockRepository {
    records: Mutex<Vec<LifeStoryRecord>>,
    failing: AtomicBool,
    delay: Mutex<Option<Duration>>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Delay every subsequent call, e.g. past the store's timeout.
    pub async fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.lock().await = delay;
    }

    /// Insert a fully-formed record, bypassing detection.
    pub async fn seed(&self, record: LifeStoryRecord) {
        self.records.lock().await.push(record);
    }

    /// Snapshot of everything stored, in insertion order.
    pub async fn records(&self) -> Vec<LifeStoryRecord> {
        self.records.lock().await.clone()
    }

    async fn before_call(&self) -> Result<(), HearthError> {
        let delay = *self.delay.lock().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(HearthError::Storage {
                source: "injected repository failure".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl LifeStoryRepository for MockRepository {
    async fn insert_life_story(&self, story: NewLifeStory) -> Result<LifeStoryRecord, HearthError> {
        self.before_call().await?;
        let record = story.into_record(uuid::Uuid::new_v4().to_string());
        self.records.lock().await.push(record.clone());
        Ok(record)
    }

    async fn list_life_stories(
        &self,
        owner_id: &str,
        query: &StoryQuery,
    ) -> Result<Vec<LifeStoryRecord>, HearthError> {
        self.before_call().await?;
        let records = self.records.lock().await;
        let mut matching: Vec<LifeStoryRecord> = records
            .iter()
            .rev()
            .filter(|r| r.owner_id == owner_id)
            .filter(|r| match &query.tag {
                Some(tag) => serialized_tags(&r.tags).contains(tag.as_str()),
                None => true,
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.captured_at.cmp(&a.captured_at));
        matching.truncate(query.limit);
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use hearth_core::TopicTag;

    fn story(owner: &str, text: &str, tags: &[&str]) -> NewLifeStory {
        NewLifeStory {
            owner_id: owner.into(),
            raw_text: text.into(),
            agent_response: String::new(),
            tags: tags.iter().map(|t| TopicTag::from_raw(*t)).collect(),
            captured_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn same_timestamp_lists_newest_insert_first() {
        let repo = MockRepository::new();
        repo.insert_life_story(story("a", "one", &[])).await.unwrap();
        repo.insert_life_story(story("a", "two", &[])).await.unwrap();
        let listed = repo.list_life_stories("a", &StoryQuery::recent(10)).await.unwrap();
        let texts: Vec<_> = listed.iter().map(|r| r.raw_text.as_str()).collect();
        assert_eq!(texts, vec!["two", "one"]);
    }

    #[tokio::test]
    async fn tag_filter_is_substring() {
        let repo = MockRepository::new();
        repo.insert_life_story(story("a", "shed", &["topic:workshop"])).await.unwrap();
        let listed = repo
            .list_life_stories("a", &StoryQuery::tagged("topic:work", 10))
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn injected_failure_surfaces_as_storage_error() {
        let repo = MockRepository::new();
        repo.set_failing(true);
        let err = repo.list_life_stories("a", &StoryQuery::recent(10)).await.unwrap_err();
        assert!(matches!(err, HearthError::Storage { .. }));
        repo.set_failing(false);
        assert!(repo.list_life_stories("a", &StoryQuery::recent(10)).await.is_ok());
    }
}
