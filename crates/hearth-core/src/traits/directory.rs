// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only view of residents and their questionnaire profiles.

use async_trait::async_trait;

use crate::error::HearthError;
use crate::types::{Resident, ResidentProfile};

/// Resolves residents and their profiles. Hearth never writes through this.
#[async_trait]
pub trait ResidentDirectory: Send + Sync {
    /// Looks up a resident. `Ok(None)` means the resident does not exist.
    async fn find_resident(&self, resident_id: &str) -> Result<Option<Resident>, HearthError>;

    /// Questionnaire answers, if the resident has filled any in.
    async fn resident_profile(
        &self,
        resident_id: &str,
    ) -> Result<Option<ResidentProfile>, HearthError>;
}
