// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the RecordStore trait.

use async_trait::async_trait;
use tracing::{debug, info};

use vaultguard_config::model::StorageConfig;
use vaultguard_core::{RecordStore, SecretEntry, VaultError};

use crate::database::Database;
use crate::{migrations, queries};

/// SQLite-backed record store.
///
/// Wraps a [`Database`] handle and delegates to the typed query modules.
/// Tables do not exist until [`RecordStore::create_schema`] has run.
#[derive(Debug, Clone)]
pub struct SqliteRecordStore {
    db: Database,
}

impl SqliteRecordStore {
    /// Open the database file named by the storage configuration.
    pub async fn open(config: &StorageConfig) -> Result<Self, VaultError> {
        let db = Database::open(&config.database_path, config.wal_mode).await?;
        Ok(Self { db })
    }

    /// Wrap an already-open database.
    pub fn from_database(db: Database) -> Self {
        Self { db }
    }

    /// Number of stored entries.
    pub async fn secret_count(&self) -> Result<u64, VaultError> {
        queries::secrets::count_secrets(&self.db).await
    }

    /// Checkpoint the WAL so the database file is self-contained.
    pub async fn close(&self) -> Result<(), VaultError> {
        self.db
            .connection()
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(crate::database::map_tr_err)?;
        debug!("WAL checkpoint complete");
        Ok(())
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn create_schema(&self) -> Result<(), VaultError> {
        let applied = migrations::migrate(&self.db).await?;
        if applied > 0 {
            info!(applied, "vault schema migrated");
        }
        Ok(())
    }

    async fn insert_secret(&self, entry: &SecretEntry) -> Result<i64, VaultError> {
        let id = queries::secrets::insert_secret(&self.db, entry).await?;
        debug!(id, site = %entry.site, "secret entry inserted");
        Ok(id)
    }

    async fn list_secrets(&self) -> Result<Vec<SecretEntry>, VaultError> {
        queries::secrets::list_secrets(&self.db).await
    }

    async fn get_metadata(&self, key: &str) -> Result<Option<String>, VaultError> {
        queries::metadata::get_metadata(&self.db, key).await
    }

    async fn set_metadata(&self, key: &str, value: &str) -> Result<(), VaultError> {
        queries::metadata::set_metadata(&self.db, key, value).await
    }

    async fn insert_metadata(&self, key: &str, value: &str) -> Result<bool, VaultError> {
        queries::metadata::insert_metadata(&self.db, key, value).await
    }
}
