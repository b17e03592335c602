// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static resident directory for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use hearth_core::{HearthError, Resident, ResidentDirectory, ResidentProfile};

/// A [`ResidentDirectory`] over fixed maps, with optional lookup failures.
#[derive(Default)]
pub struct MockDirectory {
    residents: HashMap<String, Resident>,
    profiles: HashMap<String, ResidentProfile>,
    fail_residents: AtomicBool,
    fail_profiles: AtomicBool,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resident, optionally with a display name.
    pub fn with_resident(mut self, id: &str, display_name: Option<&str>) -> Self {
        self.residents.insert(
            id.to_string(),
            Resident {
                id: id.to_string(),
                display_name: display_name.map(str::to_string),
            },
        );
        self
    }

    pub fn with_profile(mut self, id: &str, profile: ResidentProfile) -> Self {
        self.profiles.insert(id.to_string(), profile);
        self
    }

    /// Make resident lookups fail.
    pub fn set_failing_residents(&self, failing: bool) {
        self.fail_residents.store(failing, Ordering::SeqCst);
    }

    /// Make profile lookups fail.
    pub fn set_failing_profiles(&self, failing: bool) {
        self.fail_profiles.store(failing, Ordering::SeqCst);
    }
}

fn injected(what: &str) -> HearthError {
    HearthError::Storage {
        source: format!("injected {what} lookup failure").into(),
    }
}

#[async_trait]
impl ResidentDirectory for MockDirectory {
    async fn find_resident(&self, resident_id: &str) -> Result<Option<Resident>, HearthError> {
        if self.fail_residents.load(Ordering::SeqCst) {
            return Err(injected("resident"));
        }
        Ok(self.residents.get(resident_id).cloned())
    }

    async fn resident_profile(
        &self,
        resident_id: &str,
    ) -> Result<Option<ResidentProfile>, HearthError> {
        if self.fail_profiles.load(Ordering::SeqCst) {
            return Err(injected("profile"));
        }
        Ok(self.profiles.get(resident_id).cloned())
    }
}
