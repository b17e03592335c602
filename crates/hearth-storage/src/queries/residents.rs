// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resident and questionnaire-profile lookups.
//!
//! Residents are owned by the care-home system; the insert and upsert
//! functions exist for seeding and tests.

use hearth_core::HearthError;
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension};

use crate::database::{map_tr_err, Database};
use crate::models::{Resident, ResidentProfile};

/// Register a resident.
pub async fn insert_resident(db: &Database, resident: &Resident) -> Result<(), HearthError> {
    let id = resident.id.clone();
    let display_name = resident.display_name.clone();
    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            conn.execute(
                "INSERT INTO residents (id, display_name) VALUES (?1, ?2)",
                params![id, display_name],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Insert or replace a resident's questionnaire answers.
pub async fn upsert_profile(
    db: &Database,
    resident_id: &str,
    profile: &ResidentProfile,
) -> Result<(), HearthError> {
    let hobbies = serde_json::to_string(&profile.hobbies).map_err(|e| HearthError::Storage {
        source: Box::new(e),
    })?;
    let resident_id = resident_id.to_string();
    let profile = profile.clone();
    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            conn.execute(
                "INSERT INTO resident_profiles
                     (resident_id, birthplace, occupation, previous_occupation, hobbies)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(resident_id) DO UPDATE SET
                     birthplace = excluded.birthplace,
                     occupation = excluded.occupation,
                     previous_occupation = excluded.previous_occupation,
                     hobbies = excluded.hobbies,
                     updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
                params![
                    resident_id,
                    profile.birthplace,
                    profile.occupation,
                    profile.previous_occupation,
                    hobbies,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

pub async fn find_resident(db: &Database, id: &str) -> Result<Option<Resident>, HearthError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| -> Result<Option<Resident>, rusqlite::Error> {
            conn.query_row(
                "SELECT id, display_name FROM residents WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Resident {
                        id: row.get(0)?,
                        display_name: row.get(1)?,
                    })
                },
            )
            .optional()
        })
        .await
        .map_err(map_tr_err)
}

pub async fn get_profile(
    db: &Database,
    resident_id: &str,
) -> Result<Option<ResidentProfile>, HearthError> {
    let resident_id = resident_id.to_string();
    db.connection()
        .call(move |conn| -> Result<Option<ResidentProfile>, rusqlite::Error> {
            conn.query_row(
                "SELECT birthplace, occupation, previous_occupation, hobbies
                 FROM resident_profiles WHERE resident_id = ?1",
                params![resident_id],
                |row| {
                    let hobbies: String = row.get(3)?;
                    let hobbies: Vec<String> = serde_json::from_str(&hobbies).map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
                    })?;
                    Ok(ResidentProfile {
                        birthplace: row.get(0)?,
                        occupation: row.get(1)?,
                        previous_occupation: row.get(2)?,
                        hobbies,
                    })
                },
            )
            .optional()
        })
        .await
        .map_err(map_tr_err)
}
