// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Hearth reminiscence engine.
//!
//! This crate provides the shared error type, life-story domain types, and
//! the trait seams (repository, resident directory, clock, storage adapter)
//! that the rest of the workspace plugs into.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::HearthError;
pub use types::{
    AdapterType, HealthStatus, LifeStoryRecord, NewLifeStory, Resident, ResidentProfile,
    StoryQuery, TagFamily, TopicTag,
};

pub use traits::{
    Clock, LifeStoryRepository, PluginAdapter, ResidentDirectory, StorageAdapter, SystemClock,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hearth_error_variants() {
        let _config = HearthError::Config("test".into());
        let _storage = HearthError::Storage {
            source: Box::new(std::io::Error::other("test")),
        };
        let _timeout = HearthError::Timeout {
            duration: std::time::Duration::from_secs(5),
        };
        let _internal = HearthError::Internal("test".into());

        let missing = HearthError::resident_not_found("res-9");
        assert!(missing.is_not_found());
        assert_eq!(missing.to_string(), "resident not found: res-9");
    }

    #[test]
    fn adapter_type_round_trips_through_strings() {
        use std::str::FromStr;

        let s = AdapterType::Storage.to_string();
        assert_eq!(s, "Storage");
        assert_eq!(AdapterType::from_str(&s).unwrap(), AdapterType::Storage);
    }

    #[test]
    fn tag_family_parses_lowercase() {
        use std::str::FromStr;

        assert_eq!(TagFamily::from_str("era").unwrap(), TagFamily::Era);
        assert_eq!(TagFamily::Family.to_string(), "family");
        assert!(TagFamily::from_str("mood").is_err());
    }

    #[test]
    fn system_clock_moves_forward() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn all_traits_are_object_safe() {
        fn _repo(_: &dyn LifeStoryRepository) {}
        fn _directory(_: &dyn ResidentDirectory) {}
        fn _clock(_: &dyn Clock) {}
        fn _storage<T: StorageAdapter>() {}
    }
}
