use anyhow::Result;
use rusqlite::OptionalExtension;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::Store;

impl Store {
    /// Load the record under `key`, or `default` when the key is absent or
    /// the stored JSON no longer parses as `T`. Parse failures are recovered
    /// locally and never propagated.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T> {
        let raw = self.with_conn(|conn| {
            let row = conn
                .query_row("SELECT value FROM records WHERE key = ?1", [key], |row| {
                    row.get::<_, String>(0)
                })
                .optional()?;
            Ok(row)
        })?;

        match raw {
            Some(text) => match serde_json::from_str(&text) {
                Ok(value) => Ok(value),
                Err(e) => {
                    warn!("Malformed record under '{}', using default: {}", key, e);
                    Ok(default)
                }
            },
            None => Ok(default),
        }
    }

    /// Store `value` under `key`, replacing whatever was there.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let text = serde_json::to_string(value)?;
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO records (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
                (key, &text),
            )?;
            Ok(())
        })
    }

    /// Delete the record under `key`. Deleting an absent key is a no-op.
    pub fn remove(&self, key: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM records WHERE key = ?1", [key])?;
            Ok(())
        })
    }
}
