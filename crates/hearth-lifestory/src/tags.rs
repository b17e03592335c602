// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Topical tag extraction.
//!
//! Categories are checked in table order (era, family relations, topics) and
//! each emits at most one tag. Synonyms match on word boundaries,
//! case-insensitively.

use std::sync::LazyLock;

use hearth_core::{TagFamily, TopicTag};
use regex::Regex;

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(19|20)\d{2}\b").unwrap());

static DECADE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(forties|fifties|sixties|seventies|eighties|nineties)\b").unwrap()
});

/// (family, value, synonyms) in emission order.
const CATEGORIES: &[(TagFamily, &str, &[&str])] = &[
    (TagFamily::Family, "spouse", &["husband", "wife", "spouse", "partner"]),
    (TagFamily::Family, "mother", &["mother", "mum", "mam", "mammy", "ma"]),
    (TagFamily::Family, "father", &["father", "dad", "daddy", "da", "papa"]),
    (
        TagFamily::Family,
        "children",
        &["son", "daughter", "child", "children", "kids", "wee ones", "bairns"],
    ),
    (TagFamily::Family, "sibling", &["brother", "sister", "sibling"]),
    (
        TagFamily::Family,
        "grandchildren",
        &["grandchild", "grandchildren", "grandkids", "grandson", "granddaughter"],
    ),
    (
        TagFamily::Topic,
        "work",
        &["work", "job", "career", "office", "factory", "shop", "nurse", "teacher", "builder"],
    ),
    (
        TagFamily::Topic,
        "education",
        &["school", "university", "college", "class", "teacher", "exam"],
    ),
    (
        TagFamily::Topic,
        "military",
        &["war", "army", "navy", "airforce", "military", "service"],
    ),
    (
        TagFamily::Topic,
        "marriage",
        &["wedding", "married", "marriage", "honeymoon", "engagement"],
    ),
    (
        TagFamily::Topic,
        "travel",
        &["holiday", "vacation", "trip", "travel", "abroad", "seaside", "camping"],
    ),
    (
        TagFamily::Topic,
        "food",
        &["cook", "bake", "recipe", "kitchen", "dinner", "meal", "food"],
    ),
    (
        TagFamily::Topic,
        "garden",
        &["garden", "flowers", "plants", "allotment", "growing"],
    ),
    (
        TagFamily::Topic,
        "faith",
        &["church", "chapel", "mosque", "temple", "faith", "pray", "minister", "priest", "imam"],
    ),
    (
        TagFamily::Topic,
        "music",
        &["music", "dancing", "sing", "songs", "band", "concert", "piano"],
    ),
    (
        TagFamily::Topic,
        "sport",
        &["football", "cricket", "rugby", "tennis", "swimming", "sport", "team"],
    ),
];

struct Category {
    tag: TopicTag,
    pattern: Regex,
}

static CATEGORY_RULES: LazyLock<Vec<Category>> = LazyLock::new(|| {
    CATEGORIES
        .iter()
        .map(|(family, value, synonyms)| {
            let alternation = synonyms
                .iter()
                .map(|s| regex::escape(s))
                .collect::<Vec<_>>()
                .join("|");
            Category {
                tag: TopicTag::new(*family, value),
                pattern: Regex::new(&format!(r"(?i)\b({alternation})\b")).unwrap(),
            }
        })
        .collect()
});

/// Era token for `text`: the first explicit year, else the first decade word.
fn era_token(text: &str) -> Option<String> {
    YEAR.find(text)
        .or_else(|| DECADE.find(text))
        .map(|m| m.as_str().to_lowercase())
}

/// Extract tags from `text` in category order, at most one per category.
pub fn extract_tags(text: &str) -> Vec<TopicTag> {
    let mut tags = Vec::new();
    if let Some(token) = era_token(text) {
        tags.push(TopicTag::new(TagFamily::Era, &token));
    }
    tags.extend(
        CATEGORY_RULES
            .iter()
            .filter(|category| category.pattern.is_match(text))
            .map(|category| category.tag.clone()),
    );
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_strings(text: &str) -> Vec<String> {
        extract_tags(text)
            .into_iter()
            .map(|t| t.as_str().to_string())
            .collect()
    }

    #[test]
    fn husband_dancing_yields_spouse_then_music() {
        assert_eq!(
            tag_strings("My husband used to take me dancing every Friday"),
            vec!["family:spouse", "topic:music"]
        );
    }

    #[test]
    fn explicit_year_beats_decade_word() {
        assert_eq!(
            tag_strings("In the sixties, in 1965 to be exact"),
            vec!["era:1965"]
        );
        assert_eq!(tag_strings("Back in the Sixties"), vec!["era:sixties"]);
    }

    #[test]
    fn era_comes_first_then_family_then_topics() {
        assert_eq!(
            tag_strings("In 1972 my daughter and I went camping at the seaside"),
            vec!["era:1972", "family:children", "topic:travel"]
        );
    }

    #[test]
    fn each_category_emits_once() {
        let tags = tag_strings("church on Sunday, chapel on Wednesday, church again");
        assert_eq!(tags, vec!["topic:faith"]);
    }

    #[test]
    fn shared_synonym_tags_both_categories() {
        assert_eq!(
            tag_strings("I was a teacher"),
            vec!["topic:work", "topic:education"]
        );
    }

    #[test]
    fn decade_number_is_not_an_era_tag() {
        // "1960s" has no word boundary after the year, so only the detector
        // sees an era here.
        assert!(crate::detector::detect_story("Dances were big in the 1960s"));
        assert!(tag_strings("Dances were big in the 1960s").is_empty());
        assert!(tag_strings("in the 60s").is_empty());
    }

    #[test]
    fn synonyms_need_word_boundaries() {
        assert!(tag_strings("the warden was singular").is_empty());
        assert!(tag_strings("12345 is not a year").is_empty());
    }

    #[test]
    fn multi_word_synonym_matches() {
        assert_eq!(tag_strings("The wee ones loved it"), vec!["family:children"]);
    }

    #[test]
    fn plain_text_has_no_tags() {
        assert!(extract_tags("What a lovely day").is_empty());
    }
}
