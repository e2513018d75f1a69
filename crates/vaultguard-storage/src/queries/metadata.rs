// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Metadata key/value operations.

use rusqlite::{params, OptionalExtension};
use vaultguard_core::VaultError;

use crate::database::Database;

/// Get a metadata value by key.
pub async fn get_metadata(db: &Database, key: &str) -> Result<Option<String>, VaultError> {
    let key = key.to_string();
    db.connection()
        .call(move |conn| -> Result<Option<String>, rusqlite::Error> {
            conn.query_row(
                "SELECT value FROM metadata WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Upsert a metadata value.
pub async fn set_metadata(db: &Database, key: &str, value: &str) -> Result<(), VaultError> {
    let key = key.to_string();
    let value = value.to_string();
    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            conn.execute(
                "INSERT INTO metadata (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Insert a metadata value only if the key is absent. Returns whether a row was written.
pub async fn insert_metadata(db: &Database, key: &str, value: &str) -> Result<bool, VaultError> {
    let key = key.to_string();
    let value = value.to_string();
    db.connection()
        .call(move |conn| -> Result<bool, rusqlite::Error> {
            let changed = conn.execute(
                "INSERT OR IGNORE INTO metadata (key, value) VALUES (?1, ?2)",
                params![key, value],
            )?;
            Ok(changed == 1)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
