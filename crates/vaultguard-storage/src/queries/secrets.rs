// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Secret entry operations. Entries are append-only.

use rusqlite::params;
use vaultguard_core::{SecretEntry, VaultError};

use crate::database::Database;

/// Insert a new entry and return its row id.
pub async fn insert_secret(db: &Database, entry: &SecretEntry) -> Result<i64, VaultError> {
    let entry = entry.clone();
    db.connection()
        .call(move |conn| -> Result<i64, rusqlite::Error> {
            conn.execute(
                "INSERT INTO secrets (site, username, ciphertext, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![entry.site, entry.username, entry.ciphertext, entry.created_at],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// List all entries in insertion order.
pub async fn list_secrets(db: &Database) -> Result<Vec<SecretEntry>, VaultError> {
    db.connection()
        .call(|conn| -> Result<Vec<SecretEntry>, rusqlite::Error> {
            let mut stmt = conn.prepare(
                "SELECT site, username, ciphertext, created_at FROM secrets ORDER BY id",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(SecretEntry {
                    site: row.get(0)?,
                    username: row.get(1)?,
                    ciphertext: row.get(2)?,
                    created_at: row.get(3)?,
                })
            })?;
            rows.collect()
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Number of stored entries.
pub async fn count_secrets(db: &Database) -> Result<u64, VaultError> {
    db.connection()
        .call(|conn| -> Result<u64, rusqlite::Error> {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM secrets", [], |row| row.get(0))?;
            Ok(count as u64)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
