// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the life-story core and its collaborators.
//!
//! Everything async uses `#[async_trait]` so implementations can be held as
//! `Arc<dyn Trait>` and swapped for test doubles.

pub mod adapter;
pub mod clock;
pub mod directory;
pub mod storage;

pub use adapter::PluginAdapter;
pub use clock::{Clock, SystemClock};
pub use directory::ResidentDirectory;
pub use storage::{LifeStoryRepository, StorageAdapter};
