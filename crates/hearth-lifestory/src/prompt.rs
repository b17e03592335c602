// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tiered reminiscence prompt generation.
//!
//! Tiers are tried in order and the first that yields a candidate wins:
//!
//! 1. **Follow-up** on a randomly chosen recent story whose first topic has a
//!    template.
//! 2. **Questionnaire-driven** from the resident's profile answers.
//! 3. **Seasonal** from the current month and time of day.
//! 4. **General** open questions.
//!
//! The RNG lock is only taken between awaits, never across one.

use std::sync::{Arc, Mutex, MutexGuard};

use hearth_config::model::LifeStoryConfig;
use hearth_core::types::non_blank;
use hearth_core::{
    Clock, HearthError, LifeStoryRecord, ResidentDirectory, ResidentProfile, StoryQuery,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::calendar::{local_time, seasonal_topics};
use crate::store::LifeStoryStore;
use crate::types::{GeneratedPrompt, PromptKind};

const GENERAL_QUESTIONS: [&str; 4] = [
    "{name}, what's one of your favourite memories?",
    "{name}, what's something you're really proud of in your life?",
    "{name}, when was the happiest time of your life?",
    "{name}, what was your favourite place you ever lived?",
];

/// Follow-up question for a topic value (`travel`, `work`, ...).
fn follow_up_template(topic: &str) -> Option<&'static str> {
    let template = match topic {
        "work" => "{name}, you mentioned your working life before. What was a typical day at work like for you?",
        "education" => "{name}, you told me about your school days. Who was your favourite teacher?",
        "marriage" => "{name}, you shared a little about your wedding. What do you remember most about that day?",
        "travel" => "{name}, you told me about your travels. Where was the best place you ever visited?",
        "food" => "{name}, you mentioned cooking before. What was your favourite dish to make?",
        "military" => "{name}, you told me about your time in the service. What do you remember about the people you served with?",
        "music" => "{name}, you mentioned music and dancing. What songs bring back the happiest memories?",
        "garden" => "{name}, you told me about your garden. What did you most love growing?",
        "faith" => "{name}, you mentioned your church community. What did it mean to you over the years?",
        "sport" => "{name}, you told me about sport. Which team did you support, and why?",
        _ => return None,
    };
    Some(template)
}

fn with_article(noun: &str) -> String {
    let article = match noun.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    };
    format!("{article} {noun}")
}

fn fill(template: &str, name: &str) -> String {
    template.replace("{name}", name)
}

/// Tunables for [`PromptGenerator`].
#[derive(Debug, Clone)]
pub struct PromptSettings {
    /// Most recent stories considered for a follow-up.
    pub follow_up_window: usize,
    /// Offset from UTC used for month and hour-of-day topics.
    pub utc_offset_minutes: i32,
    /// Used when the resident has no display name.
    pub fallback_name: String,
    /// When false, seasonal prompts are skipped and general ones used instead.
    pub seasonal_prompts: bool,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self::from(&LifeStoryConfig::default())
    }
}

impl From<&LifeStoryConfig> for PromptSettings {
    fn from(config: &LifeStoryConfig) -> Self {
        Self {
            follow_up_window: config.follow_up_window,
            utc_offset_minutes: config.utc_offset_minutes,
            fallback_name: config.fallback_name.clone(),
            seasonal_prompts: config.seasonal_prompts,
        }
    }
}

/// Produces one reminiscence prompt per call for a resident.
pub struct PromptGenerator {
    store: Arc<LifeStoryStore>,
    directory: Arc<dyn ResidentDirectory>,
    clock: Arc<dyn Clock>,
    settings: PromptSettings,
    rng: Mutex<StdRng>,
}

impl PromptGenerator {
    pub fn new(
        store: Arc<LifeStoryStore>,
        directory: Arc<dyn ResidentDirectory>,
        clock: Arc<dyn Clock>,
        settings: PromptSettings,
    ) -> Self {
        Self {
            store,
            directory,
            clock,
            settings,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Replace the RNG, e.g. with a seeded one for reproducible choices.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = Mutex::new(rng);
        self
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Generate a prompt for `owner_id`.
    ///
    /// Fails with [`HearthError::NotFound`] if the resident does not exist and
    /// with the directory's error if the lookup itself fails. Every other
    /// failure degrades to a lower tier.
    pub async fn generate(&self, owner_id: &str) -> Result<GeneratedPrompt, HearthError> {
        let resident = self
            .directory
            .find_resident(owner_id)
            .await?
            .ok_or_else(|| HearthError::resident_not_found(owner_id))?;
        let name = non_blank(resident.display_name.as_deref())
            .unwrap_or(&self.settings.fallback_name)
            .to_string();

        let recent = self
            .store
            .list(owner_id, &StoryQuery::recent(self.settings.follow_up_window))
            .await;
        if let Some(prompt) = self.follow_up(&recent, &name) {
            debug!(owner_id, kind = %prompt.kind, "prompt generated");
            return Ok(prompt);
        }

        let profile = match self.directory.resident_profile(owner_id).await {
            Ok(profile) => profile,
            Err(error) => {
                warn!(owner_id, error = %error, "resident profile lookup failed; skipping profile prompts");
                None
            }
        };

        let prompt = profile
            .as_ref()
            .and_then(|profile| self.questionnaire(profile, &name))
            .or_else(|| self.seasonal(&name))
            .unwrap_or_else(|| self.general(&name));
        debug!(owner_id, kind = %prompt.kind, "prompt generated");
        Ok(prompt)
    }

    fn follow_up(&self, recent: &[LifeStoryRecord], name: &str) -> Option<GeneratedPrompt> {
        let record = recent.choose(&mut *self.rng())?;
        let template = follow_up_template(record.first_topic()?.value())?;
        Some(GeneratedPrompt {
            prompt: fill(template, name),
            kind: PromptKind::FollowUp,
            based_on: Some(record.id.clone()),
        })
    }

    fn questionnaire(&self, profile: &ResidentProfile, name: &str) -> Option<GeneratedPrompt> {
        let mut rng = self.rng();
        let mut candidates = Vec::with_capacity(3);
        if let Some(birthplace) = profile.birthplace() {
            candidates.push(format!(
                "{name}, you grew up in {birthplace}. What do you remember most about it?"
            ));
        }
        if let Some(occupation) = profile.occupation() {
            candidates.push(format!(
                "{name}, what was it like working as {}?",
                with_article(occupation)
            ));
        }
        if let Some(hobby) = profile.hobbies().choose(&mut *rng) {
            candidates.push(format!(
                "{name}, I hear you enjoy {hobby}. How did you first get into it?"
            ));
        }
        let prompt = candidates.choose(&mut *rng)?.clone();
        Some(GeneratedPrompt {
            prompt,
            kind: PromptKind::QuestionnaireDriven,
            based_on: None,
        })
    }

    fn seasonal(&self, name: &str) -> Option<GeneratedPrompt> {
        if !self.settings.seasonal_prompts {
            return None;
        }
        let local = local_time(self.clock.now(), self.settings.utc_offset_minutes);
        let topics = seasonal_topics(&local);
        let topic = topics.choose(&mut *self.rng())?;
        Some(GeneratedPrompt {
            prompt: format!("{name}, I was thinking about {topic}. Do you have any memories of that?"),
            kind: PromptKind::Seasonal,
            based_on: None,
        })
    }

    fn general(&self, name: &str) -> GeneratedPrompt {
        let template = GENERAL_QUESTIONS
            .choose(&mut *self.rng())
            .copied()
            .unwrap_or(GENERAL_QUESTIONS[0]);
        GeneratedPrompt {
            prompt: fill(template, name),
            kind: PromptKind::General,
            based_on: None,
        }
    }
}
