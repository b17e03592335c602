// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tag frequency summaries.

use std::collections::HashMap;
use std::sync::Arc;

use hearth_core::{LifeStoryRecord, StoryQuery};

use crate::store::LifeStoryStore;
use crate::types::{TagCount, TagSummary};

/// Counts tags across a resident's most recent stories.
pub struct TagStatistics {
    store: Arc<LifeStoryStore>,
    window: usize,
}

impl TagStatistics {
    pub fn new(store: Arc<LifeStoryStore>, window: usize) -> Self {
        Self { store, window }
    }

    pub async fn summarize(&self, owner_id: &str) -> TagSummary {
        let records = self
            .store
            .list(owner_id, &StoryQuery::recent(self.window))
            .await;
        summarize_records(&records)
    }
}

/// Count tags, most frequent first and ties alphabetical.
pub fn summarize_records(records: &[LifeStoryRecord]) -> TagSummary {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for tag in records.iter().flat_map(|r| r.tags.iter()) {
        *counts.entry(tag.as_str()).or_default() += 1;
    }

    let mut tags: Vec<TagCount> = counts
        .into_iter()
        .map(|(tag, count)| TagCount {
            tag: tag.to_string(),
            count,
        })
        .collect();
    tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));

    TagSummary {
        tags,
        total: records.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use hearth_core::TopicTag;

    fn record(tags: &[&str]) -> LifeStoryRecord {
        LifeStoryRecord {
            id: "rec".into(),
            owner_id: "res-1".into(),
            raw_text: "I remember".into(),
            agent_response: String::new(),
            tags: tags.iter().map(|t| TopicTag::from_raw(*t)).collect(),
            captured_at: Utc::now(),
        }
    }

    #[test]
    fn counts_sorted_by_frequency_then_name() {
        let summary = summarize_records(&[
            record(&["topic:travel", "family:spouse"]),
            record(&["topic:travel"]),
            record(&["era:1965", "topic:music"]),
            record(&[]),
        ]);
        assert_eq!(summary.total, 4);
        let tags: Vec<_> = summary
            .tags
            .iter()
            .map(|c| (c.tag.as_str(), c.count))
            .collect();
        assert_eq!(
            tags,
            vec![
                ("topic:travel", 2),
                ("era:1965", 1),
                ("family:spouse", 1),
                ("topic:music", 1),
            ]
        );
    }

    #[test]
    fn no_records_give_empty_summary() {
        assert_eq!(summarize_records(&[]), TagSummary::default());
    }
}
