// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Hearth reminiscence engine.

use thiserror::Error;

/// The primary error type used across all Hearth traits and core operations.
#[derive(Debug, Error)]
pub enum HearthError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database connection, query failure, serialization).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A resident or record could not be resolved.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl HearthError {
    /// Shorthand for a missing resident.
    pub fn resident_not_found(id: impl Into<String>) -> Self {
        HearthError::NotFound {
            entity: "resident",
            id: id.into(),
        }
    }

    /// Returns true if this error means the requested entity does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, HearthError::NotFound { .. })
    }
}
