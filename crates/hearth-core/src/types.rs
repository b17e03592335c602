// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across Hearth crates.
//!
//! Life-story records and resident profiles live here so that repository
//! traits, the SQLite adapter, and the gateway all speak the same types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Maximum characters kept from the triggering utterance.
pub const STORY_MAX_CHARS: usize = 500;

/// Maximum characters kept from the agent's reply.
pub const RESPONSE_MAX_CHARS: usize = 300;

/// Rows returned by a list call that does not give a limit.
pub const DEFAULT_LIST_LIMIT: usize = 50;

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the kind of adapter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Storage,
}

/// Tag family prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TagFamily {
    Era,
    Family,
    Topic,
}

/// A categorical label such as `era:1965`, `family:spouse` or `topic:travel`.
///
/// Stored as the full `family:value` string. Tags written by other producers
/// are kept verbatim, even if their family is not one Hearth emits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicTag(String);

impl TopicTag {
    /// Builds a tag from a family and value.
    pub fn new(family: TagFamily, value: &str) -> Self {
        Self(format!("{family}:{value}"))
    }

    /// Wraps an already-formatted tag string.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The family part, if it is one Hearth knows.
    pub fn family(&self) -> Option<TagFamily> {
        let (family, _) = self.0.split_once(':')?;
        family.parse().ok()
    }

    /// The part after the first `:`.
    pub fn value(&self) -> &str {
        self.0.split_once(':').map(|(_, v)| v).unwrap_or(&self.0)
    }
}

impl std::fmt::Display for TopicTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable capture of one autobiographical utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeStoryRecord {
    /// Store-assigned identifier.
    pub id: String,
    /// Resident the story belongs to.
    pub owner_id: String,
    /// The triggering utterance, at most [`STORY_MAX_CHARS`] characters.
    pub raw_text: String,
    /// The agent's reply at capture time, at most [`RESPONSE_MAX_CHARS`] characters.
    pub agent_response: String,
    /// Tags in detection order.
    pub tags: Vec<TopicTag>,
    /// When the story was captured.
    pub captured_at: DateTime<Utc>,
}

impl LifeStoryRecord {
    /// First tag of the `topic:` family, if any.
    pub fn first_topic(&self) -> Option<&TopicTag> {
        self.tags
            .iter()
            .find(|t| t.family() == Some(TagFamily::Topic))
    }
}

/// A story ready to be persisted; the repository assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLifeStory {
    pub owner_id: String,
    pub raw_text: String,
    pub agent_response: String,
    pub tags: Vec<TopicTag>,
    pub captured_at: DateTime<Utc>,
}

impl NewLifeStory {
    /// Attach the store-assigned id, producing the persisted record.
    pub fn into_record(self, id: String) -> LifeStoryRecord {
        LifeStoryRecord {
            id,
            owner_id: self.owner_id,
            raw_text: self.raw_text,
            agent_response: self.agent_response,
            tags: self.tags,
            captured_at: self.captured_at,
        }
    }
}

/// Query parameters for listing a resident's stories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryQuery {
    /// Substring matched against the serialized tag list.
    pub tag: Option<String>,
    /// Maximum rows returned.
    pub limit: usize,
}

impl StoryQuery {
    pub fn recent(limit: usize) -> Self {
        Self { tag: None, limit }
    }

    pub fn tagged(tag: impl Into<String>, limit: usize) -> Self {
        Self {
            tag: Some(tag.into()),
            limit,
        }
    }
}

impl Default for StoryQuery {
    fn default() -> Self {
        Self::recent(DEFAULT_LIST_LIMIT)
    }
}

/// Serializes a tag list the way the tag filter sees it (compact JSON array).
pub fn serialized_tags(tags: &[TopicTag]) -> String {
    serde_json::to_string(tags).unwrap_or_default()
}

/// A resident known to the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resident {
    pub id: String,
    /// Preferred name used when addressing the resident.
    pub display_name: Option<String>,
}

/// Questionnaire answers used for profile-driven prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentProfile {
    pub birthplace: Option<String>,
    pub occupation: Option<String>,
    pub previous_occupation: Option<String>,
    #[serde(default)]
    pub hobbies: Vec<String>,
}

/// Trims a value and drops it if nothing is left.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl ResidentProfile {
    pub fn birthplace(&self) -> Option<&str> {
        non_blank(self.birthplace.as_deref())
    }

    /// Current occupation, else the previous one.
    pub fn occupation(&self) -> Option<&str> {
        non_blank(self.occupation.as_deref())
            .or_else(|| non_blank(self.previous_occupation.as_deref()))
    }

    pub fn hobbies(&self) -> Vec<&str> {
        self.hobbies
            .iter()
            .map(|h| h.trim())
            .filter(|h| !h.is_empty())
            .collect()
    }
}

/// Truncates to at most `max` characters without splitting a character.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_tag_parts() {
        let tag = TopicTag::new(TagFamily::Topic, "travel");
        assert_eq!(tag.as_str(), "topic:travel");
        assert_eq!(tag.family(), Some(TagFamily::Topic));
        assert_eq!(tag.value(), "travel");
    }

    #[test]
    fn foreign_tag_has_no_known_family() {
        let tag = TopicTag::from_raw("mood:happy");
        assert_eq!(tag.family(), None);
        assert_eq!(tag.value(), "happy");
    }

    #[test]
    fn tags_serialize_as_plain_strings() {
        let tags = vec![
            TopicTag::new(TagFamily::Family, "spouse"),
            TopicTag::new(TagFamily::Topic, "music"),
        ];
        assert_eq!(serialized_tags(&tags), r#"["family:spouse","topic:music"]"#);
    }

    #[test]
    fn first_topic_skips_other_families() {
        let record = LifeStoryRecord {
            id: "r1".into(),
            owner_id: "res-1".into(),
            raw_text: "text".into(),
            agent_response: String::new(),
            tags: vec![
                TopicTag::from_raw("era:1965"),
                TopicTag::from_raw("topic:travel"),
                TopicTag::from_raw("topic:food"),
            ],
            captured_at: Utc::now(),
        };
        assert_eq!(record.first_topic().unwrap().as_str(), "topic:travel");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars(&"x".repeat(600), 500).chars().count(), 500);
    }

    #[test]
    fn profile_blank_values_are_absent() {
        let profile = ResidentProfile {
            birthplace: Some("   ".into()),
            occupation: Some("".into()),
            previous_occupation: Some("nurse".into()),
            hobbies: vec!["".into(), " knitting ".into()],
        };
        assert_eq!(profile.birthplace(), None);
        assert_eq!(profile.occupation(), Some("nurse"));
        assert_eq!(profile.hobbies(), vec!["knitting"]);
    }
}
