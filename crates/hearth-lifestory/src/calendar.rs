// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Month and time-of-day conversation topics.

use chrono::{DateTime, Datelike, FixedOffset, Offset, Timelike, Utc};

/// Topics per calendar month, January first.
const MONTH_TOPICS: [&[&str]; 12] = [
    &["New Year celebrations", "Burns Night suppers", "snowy winter days"],
    &["Valentine's Day", "Pancake Day", "cosy winter evenings"],
    &["Mother's Day", "the first signs of spring", "St Patrick's Day"],
    &["Easter", "spring cleaning", "April showers"],
    &["May Day celebrations", "spring gardens in bloom"],
    &["summer holidays", "long summer evenings", "Father's Day"],
    &["trips to the seaside", "summer fairs and fetes"],
    &["summer picnics", "school holidays"],
    &["going back to school", "the harvest"],
    &["Halloween", "autumn leaves", "bonfires"],
    &["Bonfire Night", "Remembrance Day"],
    &["Christmas", "Hogmanay", "carol singing"],
];

/// Hour bands `[start, end)` and their topics. Hours before 06:00 have none.
const HOUR_TOPICS: &[(u32, u32, &[&str])] = &[
    (6, 10, &["breakfast time", "morning routines"]),
    (10, 12, &["going to the shops", "morning errands"]),
    (12, 14, &["Sunday dinners", "lunchtime at school or work"]),
    (14, 17, &["afternoon tea", "favourite hobbies"]),
    (17, 20, &["evening meals with the family", "listening to the radio in the evening"]),
    (20, 24, &["bedtime stories", "evening walks"]),
];

/// `now` shifted by `offset_minutes`. Out-of-range offsets fall back to UTC.
pub fn local_time(now: DateTime<Utc>, offset_minutes: i32) -> DateTime<FixedOffset> {
    let offset = offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix());
    now.with_timezone(&offset)
}

/// Topics for a zero-based month (0 = January).
pub fn month_topics(month0: u32) -> &'static [&'static str] {
    MONTH_TOPICS
        .get(month0 as usize)
        .copied()
        .unwrap_or_default()
}

/// Topics for an hour of the day (0-23).
pub fn hour_topics(hour: u32) -> &'static [&'static str] {
    HOUR_TOPICS
        .iter()
        .find(|(start, end, _)| (*start..*end).contains(&hour))
        .map(|(_, _, topics)| *topics)
        .unwrap_or_default()
}

/// Month topics followed by hour topics for a local time.
pub fn seasonal_topics(local: &DateTime<FixedOffset>) -> Vec<&'static str> {
    let mut topics = month_topics(local.month0()).to_vec();
    topics.extend_from_slice(hour_topics(local.hour()));
    topics
}
