// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Life-story capture and reminiscence prompting for Hearth.
//!
//! ## Architecture
//!
//! - **detector**: ordered trigger table deciding whether speech is a story
//! - **tags**: era, family and topic tag extraction
//! - **LifeStoryStore**: detect, tag and persist; list back with timeouts
//! - **ContextBuilder**: recent stories as a text block for the agent
//! - **PromptGenerator**: follow-up, questionnaire, seasonal and general tiers
//! - **TagStatistics**: tag frequencies for a resident
//! - **LifeStoryEngine**: all of the above over one set of collaborators

pub mod calendar;
pub mod context;
pub mod detector;
pub mod engine;
pub mod prompt;
pub mod stats;
pub mod store;
pub mod tags;
pub mod types;

pub use context::ContextBuilder;
pub use detector::{detect_story, matching_trigger, TriggerFamily};
pub use engine::LifeStoryEngine;
pub use prompt::{PromptGenerator, PromptSettings};
pub use stats::TagStatistics;
pub use store::LifeStoryStore;
pub use tags::extract_tags;
pub use types::*;
