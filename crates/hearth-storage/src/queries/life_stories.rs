// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Life-story insert and list operations. There is no update or delete.

use hearth_core::{HearthError, LifeStoryRecord, NewLifeStory, StoryQuery};
use rusqlite::params;
use rusqlite::types::Type;

use crate::database::{map_tr_err, Database};
use crate::models::{sortable_timestamp, story_title, StoryPayload, LIFE_STORY_KIND};

/// Insert a new life story, assigning its id.
pub async fn insert_life_story(
    db: &Database,
    story: NewLifeStory,
    captured_by: &str,
) -> Result<LifeStoryRecord, HearthError> {
    let id = uuid::Uuid::new_v4().to_string();
    let payload = serde_json::to_string(&StoryPayload::from(&story)).map_err(|e| {
        HearthError::Storage {
            source: Box::new(e),
        }
    })?;
    let title = story_title(&story.raw_text);
    let captured_at = sortable_timestamp(&story.captured_at);
    let captured_by = captured_by.to_string();
    let row_id = id.clone();
    let owner_id = story.owner_id.clone();

    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            conn.execute(
                "INSERT INTO memories (id, resident_id, kind, title, payload, captured_by, captured_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    row_id,
                    owner_id,
                    LIFE_STORY_KIND,
                    title,
                    payload,
                    captured_by,
                    captured_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;

    Ok(story.into_record(id))
}

/// List a resident's life stories, most recent first.
///
/// The tag filter is `instr` over the JSON tag array, i.e. plain substring
/// containment: `topic:work` matches a record tagged `topic:workshop`.
pub async fn list_life_stories(
    db: &Database,
    owner_id: &str,
    query: &StoryQuery,
) -> Result<Vec<LifeStoryRecord>, HearthError> {
    let owner_id = owner_id.to_string();
    let tag = query.tag.clone();
    let limit = i64::try_from(query.limit).unwrap_or(i64::MAX);

    db.connection()
        .call(move |conn| -> Result<Vec<LifeStoryRecord>, rusqlite::Error> {
            let mut stmt = conn.prepare(
                "SELECT id, resident_id, payload FROM memories
                 WHERE resident_id = ?1
                   AND kind = ?2
                   AND (?3 IS NULL OR instr(json_extract(payload, '$.tags'), ?3) > 0)
                 ORDER BY captured_at DESC, rowid DESC
                 LIMIT ?4",
            )?;
            let rows = stmt.query_map(params![owner_id, LIFE_STORY_KIND, tag, limit], |row| {
                let id: String = row.get(0)?;
                let owner: String = row.get(1)?;
                let payload: String = row.get(2)?;
                let decoded: StoryPayload = serde_json::from_str(&payload).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
                })?;
                Ok(decoded.into_record(id, owner))
            })?;
            rows.collect()
        })
        .await
        .map_err(map_tr_err)
}
