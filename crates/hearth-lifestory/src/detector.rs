// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recognises autobiographical speech.
//!
//! The classifier is an ordered table of case-insensitive patterns; a text is
//! a story if any family matches anywhere in it. Patterns favour precision:
//! "I went to the shops" is not a story, "I used to go to the shops" is.

use std::sync::LazyLock;

use regex::Regex;
use strum::Display;

/// The trigger family that made a text count as a story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum TriggerFamily {
    /// "I used to", "I remember", "back in", "in my day", ...
    Autobiographical,
    /// "my late husband always", "my mum used to", ...
    FamilyHabit,
    /// "during the war", "in the 60s", "in the 1960s"
    Era,
    /// "when I worked", "when I retired", ...
    LifeTransition,
    /// "my first job", "my first dance", ...
    First,
    /// "the old days", "the old neighbourhood", ...
    NostalgicPlace,
    /// "I grew up in", "born in", ...
    Origin,
}

static TRIGGER_RULES: LazyLock<Vec<(TriggerFamily, Regex)>> = LazyLock::new(|| {
    vec![
        (
            TriggerFamily::Autobiographical,
            Regex::new(r"(?i)\b(i used to|i remember|i recall|i once|back in|when i was|in my day)\b")
                .unwrap(),
        ),
        (
            TriggerFamily::FamilyHabit,
            Regex::new(
                r"(?i)\bmy\s+(late\s+)?(husband|wife|mother|father|dad|mum|brother|sister|son|daughter)\s+(used to|always|would|loved)\b",
            )
            .unwrap(),
        ),
        (
            TriggerFamily::Era,
            Regex::new(r"(?i)\b(during the war|after the war|in the (\d|\d{3})0s)\b").unwrap(),
        ),
        (
            TriggerFamily::LifeTransition,
            Regex::new(r"(?i)\bwhen i (worked|lived|moved|married|retired|started|grew up)\b")
                .unwrap(),
        ),
        (
            TriggerFamily::First,
            Regex::new(r"(?i)\bmy first (job|car|house|baby|dance|kiss|day at)\b").unwrap(),
        ),
        (
            TriggerFamily::NostalgicPlace,
            Regex::new(r"(?i)\bthe old (days|times|house|school|neighbou?rhood|street)\b").unwrap(),
        ),
        (
            TriggerFamily::Origin,
            Regex::new(r"(?i)\b(i grew up in|we lived in|born in|raised in)\b").unwrap(),
        ),
    ]
});

/// First trigger family matching `text`, in table order.
pub fn matching_trigger(text: &str) -> Option<TriggerFamily> {
    TRIGGER_RULES
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(family, _)| *family)
}

/// Returns true if `text` reads as an autobiographical story.
pub fn detect_story(text: &str) -> bool {
    matching_trigger(text).is_some()
}
