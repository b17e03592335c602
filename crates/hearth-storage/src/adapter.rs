// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the storage, repository and directory traits.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use hearth_config::model::StorageConfig;
use hearth_core::{
    AdapterType, HealthStatus, HearthError, LifeStoryRecord, LifeStoryRepository, NewLifeStory,
    PluginAdapter, Resident, ResidentDirectory, ResidentProfile, StorageAdapter, StoryQuery,
};

use crate::database::Database;
use crate::queries;

/// Attribution written to `memories.captured_by` unless overridden.
pub const DEFAULT_CAPTURE_AGENT: &str = "warda_auto";

/// SQLite-backed storage adapter.
///
/// The database is opened by [`StorageAdapter::initialize`]; every other
/// operation fails with a storage error until then.
pub struct SqliteStorage {
    config: StorageConfig,
    capture_agent: String,
    db: OnceCell<Database>,
}

impl SqliteStorage {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            capture_agent: DEFAULT_CAPTURE_AGENT.to_string(),
            db: OnceCell::new(),
        }
    }

    /// Override the attribution stamped on captured rows.
    pub fn with_capture_agent(mut self, capture_agent: impl Into<String>) -> Self {
        self.capture_agent = capture_agent.into();
        self
    }

    fn db(&self) -> Result<&Database, HearthError> {
        self.db.get().ok_or_else(|| HearthError::Storage {
            source: "storage not initialized -- call initialize() first".into(),
        })
    }

    /// Register a resident (seeding and tests).
    pub async fn register_resident(&self, resident: &Resident) -> Result<(), HearthError> {
        queries::residents::insert_resident(self.db()?, resident).await
    }

    /// Store a resident's questionnaire answers (seeding and tests).
    pub async fn save_profile(
        &self,
        resident_id: &str,
        profile: &ResidentProfile,
    ) -> Result<(), HearthError> {
        queries::residents::upsert_profile(self.db()?, resident_id, profile).await
    }
}

#[async_trait]
impl PluginAdapter for SqliteStorage {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, HearthError> {
        let Some(db) = self.db.get() else {
            return Ok(HealthStatus::Unhealthy("storage not initialized".to_string()));
        };
        let probe = db
            .connection()
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(crate::database::map_tr_err);
        match probe {
            Ok(()) => Ok(HealthStatus::Healthy),
            Err(e) => Ok(HealthStatus::Unhealthy(e.to_string())),
        }
    }

    async fn shutdown(&self) -> Result<(), HearthError> {
        if let Some(db) = self.db.get() {
            db.checkpoint().await?;
            debug!("shutdown: WAL checkpoint complete");
        }
        Ok(())
    }
}

#[async_trait]
impl StorageAdapter for SqliteStorage {
    async fn initialize(&self) -> Result<(), HearthError> {
        let db = Database::open(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| HearthError::Storage {
            source: "storage already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite storage initialized");
        Ok(())
    }

    async fn close(&self) -> Result<(), HearthError> {
        self.db()?.checkpoint().await?;
        debug!("WAL checkpoint complete");
        Ok(())
    }
}

#[async_trait]
impl LifeStoryRepository for SqliteStorage {
    async fn insert_life_story(&self, story: NewLifeStory) -> Result<LifeStoryRecord, HearthError> {
        queries::life_stories::insert_life_story(self.db()?, story, &self.capture_agent).await
    }

    async fn list_life_stories(
        &self,
        owner_id: &str,
        query: &StoryQuery,
    ) -> Result<Vec<LifeStoryRecord>, HearthError> {
        queries::life_stories::list_life_stories(self.db()?, owner_id, query).await
    }
}

#[async_trait]
impl ResidentDirectory for SqliteStorage {
    async fn find_resident(&self, resident_id: &str) -> Result<Option<Resident>, HearthError> {
        queries::residents::find_resident(self.db()?, resident_id).await
    }

    async fn resident_profile(
        &self,
        resident_id: &str,
    ) -> Result<Option<ResidentProfile>, HearthError> {
        queries::residents::get_profile(self.db()?, resident_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use hearth_core::TopicTag;
    use tempfile::tempdir;

    fn make_config(path: &str) -> StorageConfig {
        StorageConfig {
            database_path: path.to_string(),
            wal_mode: true,
        }
    }

    fn new_story(owner: &str, text: &str, tags: &[&str]) -> NewLifeStory {
        NewLifeStory {
            owner_id: owner.to_string(),
            raw_text: text.to_string(),
            agent_response: "That sounds wonderful.".to_string(),
            tags: tags.iter().map(|t| TopicTag::from_raw(*t)).collect(),
            captured_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn sqlite_storage_identity() {
        let storage = SqliteStorage::new(make_config("/tmp/unused.db"));
        assert_eq!(storage.name(), "sqlite");
        assert_eq!(storage.version(), semver::Version::new(0, 1, 0));
        assert_eq!(storage.adapter_type(), AdapterType::Storage);
    }

    #[tokio::test]
    async fn initialize_opens_database_at_configured_path() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("init_test.db");
        let storage = SqliteStorage::new(make_config(db_path.to_str().unwrap()));

        storage.initialize().await.unwrap();
        assert!(db_path.exists(), "database file should be created");
    }

    #[tokio::test]
    async fn initialize_twice_returns_error() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("double_init.db");
        let storage = SqliteStorage::new(make_config(db_path.to_str().unwrap()));

        storage.initialize().await.unwrap();
        assert!(storage.initialize().await.is_err());
    }

    #[tokio::test]
    async fn operations_fail_before_initialize() {
        let storage = SqliteStorage::new(make_config("/tmp/never-opened.db"));
        assert!(matches!(
            storage.health_check().await.unwrap(),
            HealthStatus::Unhealthy(_)
        ));
        assert!(storage
            .list_life_stories("res-1", &StoryQuery::recent(10))
            .await
            .is_err());
        assert!(storage.find_resident("res-1").await.is_err());
    }

    #[tokio::test]
    async fn health_check_returns_healthy_when_initialized() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("health.db");
        let storage = SqliteStorage::new(make_config(db_path.to_str().unwrap()));

        storage.initialize().await.unwrap();
        assert_eq!(storage.health_check().await.unwrap(), HealthStatus::Healthy);
    }

    #[tokio::test]
    async fn shutdown_before_initialize_is_a_no_op() {
        let storage = SqliteStorage::new(make_config("/tmp/never-opened.db"));
        storage.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn shutdown_truncates_the_wal() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("shutdown.db");
        let storage = SqliteStorage::new(make_config(db_path.to_str().unwrap()));
        storage.initialize().await.unwrap();
        storage
            .insert_life_story(new_story("res-1", "I remember the trams", &[]))
            .await
            .unwrap();

        storage.shutdown().await.unwrap();
        let wal = dir.path().join("shutdown.db-wal");
        let wal_len = std::fs::metadata(&wal).map(|m| m.len()).unwrap_or(0);
        assert_eq!(wal_len, 0);
    }

    #[tokio::test]
    async fn stories_persist_across_reopen() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("reopen.db");
        let path = db_path.to_str().unwrap();

        let storage = SqliteStorage::new(make_config(path));
        storage.initialize().await.unwrap();
        let saved = storage
            .insert_life_story(new_story("res-1", "I grew up in Glasgow", &["topic:home"]))
            .await
            .unwrap();
        storage.close().await.unwrap();
        drop(storage);

        let storage = SqliteStorage::new(make_config(path));
        storage.initialize().await.unwrap();
        let listed = storage
            .list_life_stories("res-1", &StoryQuery::recent(10))
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, saved.id);
        assert_eq!(listed[0].tags, vec![TopicTag::from_raw("topic:home")]);
    }

    #[tokio::test]
    async fn work_filter_also_matches_workshop() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("filter.db");
        let storage = SqliteStorage::new(make_config(db_path.to_str().unwrap()));
        storage.initialize().await.unwrap();

        storage
            .insert_life_story(new_story("res-1", "in the workshop", &["topic:workshop"]))
            .await
            .unwrap();
        storage
            .insert_life_story(new_story("res-1", "at the seaside", &["topic:travel"]))
            .await
            .unwrap();

        let listed = storage
            .list_life_stories("res-1", &StoryQuery::tagged("topic:work", 10))
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].raw_text, "in the workshop");
    }

    #[tokio::test]
    async fn custom_capture_agent_is_recorded() {
        let storage = SqliteStorage::new(make_config(":memory:")).with_capture_agent("night_shift");
        storage.initialize().await.unwrap();
        storage
            .insert_life_story(new_story("res-1", "I remember the war", &[]))
            .await
            .unwrap();

        let captured_by: String = storage
            .db()
            .unwrap()
            .connection()
            .call(|conn| -> Result<String, rusqlite::Error> {
                conn.query_row("SELECT captured_by FROM memories", [], |row| row.get(0))
            })
            .await
            .unwrap();
        assert_eq!(captured_by, "night_shift");
    }

    #[tokio::test]
    async fn directory_resolves_residents_and_profiles() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("directory.db");
        let storage = SqliteStorage::new(make_config(db_path.to_str().unwrap()));
        storage.initialize().await.unwrap();

        let resident = Resident {
            id: "res-1".into(),
            display_name: Some("Margaret".into()),
        };
        storage.register_resident(&resident).await.unwrap();
        storage
            .save_profile(
                "res-1",
                &ResidentProfile {
                    birthplace: Some("Leeds".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(storage.find_resident("res-1").await.unwrap(), Some(resident));
        assert_eq!(storage.find_resident("res-2").await.unwrap(), None);
        let profile = storage.resident_profile("res-1").await.unwrap().unwrap();
        assert_eq!(profile.birthplace(), Some("Leeds"));
        assert_eq!(storage.resident_profile("res-2").await.unwrap(), None);
    }
}
