//! Typed access to the flat `app_store` key namespace.
//!
//! Every persisted value is text: JSON documents for collections, raw
//! strings for scalars. Reads distinguish a missing key from one whose
//! text no longer decodes; the undecodable bytes are left in place so a
//! later version (or a curious user) can still inspect them.

use diesel::prelude::*;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::StorageError;
use crate::schema::app_store::dsl::*;
use ecolog_core::errors::Result;
use ecolog_core::store::StoreValue;

// Persisted key namespace.
pub const USER_ID_KEY: &str = "ecolog_user_id";
pub const DISPLAY_NAME_KEY: &str = "ecolog_display_name";
pub const POINTS_KEY: &str = "ecolog_points";
pub const ACTIVITIES_KEY: &str = "ecolog_activities";
pub const CHALLENGES_KEY: &str = "ecolog_challenges";
pub const BADGES_KEY: &str = "ecolog_badges";

#[derive(Insertable, Queryable, AsChangeset)]
#[diesel(table_name = crate::schema::app_store)]
pub struct StoreRow {
    pub store_key: String,
    pub store_value: String,
}

/// Reads the raw text under `key`, if any.
pub fn read_raw(conn: &mut SqliteConnection, key: &str) -> Result<Option<String>> {
    let value = app_store
        .filter(store_key.eq(key))
        .select(store_value)
        .first::<String>(conn)
        .optional()
        .map_err(StorageError::from)?;
    Ok(value)
}

/// Writes raw text under `key`, replacing any previous value.
pub fn write_raw(conn: &mut SqliteConnection, key: &str, value: &str) -> Result<()> {
    diesel::replace_into(app_store)
        .values(&StoreRow {
            store_key: key.to_string(),
            store_value: value.to_string(),
        })
        .execute(conn)
        .map_err(StorageError::from)?;
    Ok(())
}

/// Removes `key` entirely. Missing keys are fine.
pub fn delete_key(conn: &mut SqliteConnection, key: &str) -> Result<()> {
    diesel::delete(app_store.filter(store_key.eq(key)))
        .execute(conn)
        .map_err(StorageError::from)?;
    Ok(())
}

/// Reads and decodes the JSON document under `key`. Undecodable text
/// reads as `Corrupt` and stays in the table untouched.
pub fn read_document<T: DeserializeOwned>(
    conn: &mut SqliteConnection,
    key: &str,
) -> Result<StoreValue<T>> {
    match read_raw(conn, key)? {
        None => Ok(StoreValue::Absent),
        Some(text) => match serde_json::from_str(&text) {
            Ok(value) => Ok(StoreValue::Present(value)),
            Err(e) => {
                warn!("stored document under '{key}' failed to decode: {e}");
                Ok(StoreValue::Corrupt)
            }
        },
    }
}

/// Encodes `value` as JSON and writes it under `key`.
pub fn write_document<T: Serialize>(
    conn: &mut SqliteConnection,
    key: &str,
    value: &T,
) -> Result<()> {
    let text = serde_json::to_string(value)?;
    write_raw(conn, key, &text)
}

/// Reads the string-encoded integer counter under `key`.
pub fn read_counter(conn: &mut SqliteConnection, key: &str) -> Result<StoreValue<i64>> {
    match read_raw(conn, key)? {
        None => Ok(StoreValue::Absent),
        Some(text) => match text.trim().parse::<i64>() {
            Ok(value) => Ok(StoreValue::Present(value)),
            Err(e) => {
                warn!("stored counter under '{key}' failed to parse: {e}");
                Ok(StoreValue::Corrupt)
            }
        },
    }
}

/// Writes an integer counter as its decimal string under `key`.
pub fn write_counter(conn: &mut SqliteConnection, key: &str, value: i64) -> Result<()> {
    write_raw(conn, key, &value.to_string())
}
