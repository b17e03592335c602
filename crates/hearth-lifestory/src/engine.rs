// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wiring of the life-story services over shared collaborators.

use std::sync::Arc;

use hearth_config::model::LifeStoryConfig;
use hearth_core::{Clock, LifeStoryRepository, ResidentDirectory};

use crate::context::ContextBuilder;
use crate::prompt::{PromptGenerator, PromptSettings};
use crate::stats::TagStatistics;
use crate::store::LifeStoryStore;

/// The store, context builder, prompt generator and tag statistics sharing
/// one repository, directory and clock.
pub struct LifeStoryEngine {
    pub store: Arc<LifeStoryStore>,
    pub context: ContextBuilder,
    pub prompts: PromptGenerator,
    pub stats: TagStatistics,
    /// Result limit for list calls that do not give one.
    pub default_list_limit: usize,
    /// Stories included in a context block by default.
    pub context_max_entries: usize,
}

impl LifeStoryEngine {
    pub fn new(
        repository: Arc<dyn LifeStoryRepository>,
        directory: Arc<dyn ResidentDirectory>,
        clock: Arc<dyn Clock>,
        config: &LifeStoryConfig,
    ) -> Self {
        let store = Arc::new(LifeStoryStore::from_config(
            repository,
            Arc::clone(&clock),
            config,
        ));
        Self {
            context: ContextBuilder::new(Arc::clone(&store)),
            prompts: PromptGenerator::new(
                Arc::clone(&store),
                directory,
                clock,
                PromptSettings::from(config),
            ),
            stats: TagStatistics::new(Arc::clone(&store), config.stats_window),
            store,
            default_list_limit: config.default_list_limit,
            context_max_entries: config.context_max_entries,
        }
    }

    /// Replace the prompt generator's RNG.
    pub fn with_rng(mut self, rng: rand::rngs::StdRng) -> Self {
        self.prompts = self.prompts.with_rng(rng);
        self
    }
}
