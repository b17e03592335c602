// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end integration testing.
//!
//! `TestHarness` assembles the life-story engine over a temp SQLite database
//! with a fixed clock and a seeded RNG, so prompts and timestamps are
//! reproducible.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use hearth_config::model::{HearthConfig, LifeStoryConfig, StorageConfig};
use hearth_core::{HearthError, LifeStoryRecord, Resident, ResidentProfile, StorageAdapter};
use hearth_lifestory::LifeStoryEngine;
use hearth_storage::SqliteStorage;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::clock::FixedClock;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    lifestory: LifeStoryConfig,
    now: Option<DateTime<Utc>>,
    seed: u64,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            lifestory: LifeStoryConfig::default(),
            now: None,
            seed: 7,
        }
    }

    /// Override the life-story settings.
    pub fn with_lifestory_config(mut self, config: LifeStoryConfig) -> Self {
        self.lifestory = config;
        self
    }

    /// Start the clock at `now`.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Seed for the prompt generator's RNG.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the test harness, creating all required subsystems.
    pub async fn build(self) -> Result<TestHarness, HearthError> {
        let temp_dir =
            tempfile::TempDir::new().map_err(|e| HearthError::Storage { source: e.into() })?;
        let db_path = temp_dir.path().join("test.db");

        let storage_config = StorageConfig {
            database_path: db_path.to_string_lossy().to_string(),
            wal_mode: true,
        };
        let storage = SqliteStorage::new(storage_config.clone())
            .with_capture_agent(self.lifestory.capture_agent.clone());
        storage.initialize().await?;
        let storage = Arc::new(storage);

        let clock = Arc::new(match self.now {
            Some(now) => FixedClock::new(now),
            None => FixedClock::at(2026, 6, 15, 10, 30),
        });

        let engine = LifeStoryEngine::new(
            storage.clone(),
            storage.clone(),
            clock.clone(),
            &self.lifestory,
        )
        .with_rng(StdRng::seed_from_u64(self.seed));

        let config = HearthConfig {
            storage: storage_config,
            lifestory: self.lifestory,
            ..HearthConfig::default()
        };

        Ok(TestHarness {
            storage,
            engine: Arc::new(engine),
            clock,
            config,
            _temp_dir: temp_dir,
        })
    }
}

/// A complete life-story environment over temp storage.
pub struct TestHarness {
    /// SQLite storage (temp DB, cleaned up on drop).
    pub storage: Arc<SqliteStorage>,
    /// The engine under test.
    pub engine: Arc<LifeStoryEngine>,
    /// Clock shared by the engine.
    pub clock: Arc<FixedClock>,
    /// Configuration the harness was built with.
    pub config: HearthConfig,
    _temp_dir: tempfile::TempDir,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Register a resident in the directory.
    pub async fn add_resident(&self, id: &str, display_name: Option<&str>) -> Result<(), HearthError> {
        self.storage
            .register_resident(&Resident {
                id: id.to_string(),
                display_name: display_name.map(str::to_string),
            })
            .await
    }

    pub async fn add_profile(&self, id: &str, profile: &ResidentProfile) -> Result<(), HearthError> {
        self.storage.save_profile(id, profile).await
    }

    /// Run an utterance through capture, advancing the clock one minute
    /// first so successive captures have distinct timestamps.
    pub async fn say(&self, owner_id: &str, text: &str) -> Option<LifeStoryRecord> {
        self.clock.advance(chrono::Duration::minutes(1));
        self.engine.store.save(owner_id, text, "").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::StoryQuery;

    #[tokio::test]
    async fn builder_creates_working_environment() {
        let harness = TestHarness::builder().build().await.unwrap();
        let stories = harness
            .engine
            .store
            .list("res-1", &StoryQuery::default())
            .await;
        assert!(stories.is_empty());
    }

    #[tokio::test]
    async fn say_captures_stories_with_distinct_timestamps() {
        let harness = TestHarness::builder().build().await.unwrap();
        let first = harness.say("res-1", "I remember the coronation").await.unwrap();
        let second = harness.say("res-1", "I used to knit jumpers").await.unwrap();
        assert!(second.captured_at > first.captured_at);
        assert!(harness.say("res-1", "Is it raining?").await.is_none());
    }
}
