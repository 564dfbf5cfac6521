use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Namespace shared by every persisted entry.
pub const STORAGE_PREFIX: &str = "828";

pub fn storage_key(collection: &str) -> String {
    format!("{STORAGE_PREFIX}-{collection}")
}

pub fn read_entry(conn: &Connection, key: &str) -> Result<Option<String>, ServerError> {
    conn.query_row(
        "select value from storage where key = ?",
        params![key],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("read {key} failed: {e}")))
}

pub fn write_entry(conn: &Connection, key: &str, value: &str) -> Result<(), ServerError> {
    conn.execute(
        "insert into storage (key, value) values (?, ?)
         on conflict (key) do update set value = excluded.value",
        params![key, value],
    )
    .map_err(|e| ServerError::DbError(format!("write {key} failed: {e}")))?;

    Ok(())
}

/// Loads one collection from its namespaced entry. A missing entry is an
/// empty collection; so is an entry that no longer parses, which gets a
/// warning instead of taking the whole app down with it.
pub fn load_collection<T: DeserializeOwned>(
    conn: &Connection,
    collection: &str,
) -> Result<Vec<T>, ServerError> {
    let key = storage_key(collection);

    let Some(raw) = read_entry(conn, &key)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(e) => {
            eprintln!("⚠️ Corrupt entry under {key}, starting empty: {e}");
            Ok(Vec::new())
        }
    }
}

/// Serializes the full collection back into its entry.
pub fn save_collection<T: Serialize>(
    conn: &Connection,
    collection: &str,
    items: &[T],
) -> Result<(), ServerError> {
    let raw = serde_json::to_string(items)
        .map_err(|e| ServerError::DbError(format!("serialize {collection} failed: {e}")))?;

    write_entry(conn, &storage_key(collection), &raw)
}
