// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage traits: backend lifecycle and the life-story repository.

use async_trait::async_trait;

use crate::error::HearthError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{LifeStoryRecord, NewLifeStory, StoryQuery};

/// Adapter for storage and persistence backends.
#[async_trait]
pub trait StorageAdapter: PluginAdapter {
    /// Initializes the storage backend (migrations, connection, pragmas).
    async fn initialize(&self) -> Result<(), HearthError>;

    /// Closes the storage backend, flushing pending writes.
    async fn close(&self) -> Result<(), HearthError>;
}

/// Append-only store of life-story records, scoped by owner.
///
/// Records are immutable once created; there is no update or delete.
#[async_trait]
pub trait LifeStoryRepository: Send + Sync {
    /// Persists a story and returns it with its assigned id.
    async fn insert_life_story(&self, story: NewLifeStory) -> Result<LifeStoryRecord, HearthError>;

    /// Lists an owner's stories, most recent first.
    ///
    /// `query.tag` is matched as a substring of the compact JSON tag list,
    /// so `topic:work` also matches `topic:workshop`.
    async fn list_life_stories(
        &self,
        owner_id: &str,
        query: &StoryQuery,
    ) -> Result<Vec<LifeStoryRecord>, HearthError>;
}
