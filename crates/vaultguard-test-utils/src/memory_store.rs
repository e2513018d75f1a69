// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory record store.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use vaultguard_core::{RecordStore, SecretEntry, VaultError};

#[derive(Debug, Default)]
struct State {
    schema_created: bool,
    secrets: Vec<SecretEntry>,
    metadata: BTreeMap<String, String>,
}

/// A record store that keeps everything in process memory.
///
/// Clones share state, so a test can hand one clone to the vault and keep
/// another to inspect or corrupt what was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    state: Arc<Mutex<State>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `create_schema` has been called.
    pub async fn schema_created(&self) -> bool {
        self.state.lock().await.schema_created
    }

    /// Number of metadata rows.
    pub async fn metadata_len(&self) -> usize {
        self.state.lock().await.metadata.len()
    }

    /// Replace the ciphertext of the entry at `index` (in insertion order).
    pub async fn tamper_secret(&self, index: usize, ciphertext: impl Into<String>) {
        let mut state = self.state.lock().await;
        if let Some(entry) = state.secrets.get_mut(index) {
            entry.ciphertext = ciphertext.into();
        }
    }

    async fn ensure_schema(&self) -> Result<tokio::sync::MutexGuard<'_, State>, VaultError> {
        let state = self.state.lock().await;
        if state.schema_created {
            Ok(state)
        } else {
            Err(VaultError::Storage {
                source: "schema not created".into(),
            })
        }
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn create_schema(&self) -> Result<(), VaultError> {
        self.state.lock().await.schema_created = true;
        Ok(())
    }

    async fn insert_secret(&self, entry: &SecretEntry) -> Result<i64, VaultError> {
        let mut state = self.ensure_schema().await?;
        state.secrets.push(entry.clone());
        Ok(state.secrets.len() as i64)
    }

    async fn list_secrets(&self) -> Result<Vec<SecretEntry>, VaultError> {
        Ok(self.ensure_schema().await?.secrets.clone())
    }

    async fn get_metadata(&self, key: &str) -> Result<Option<String>, VaultError> {
        Ok(self.ensure_schema().await?.metadata.get(key).cloned())
    }

    async fn set_metadata(&self, key: &str, value: &str) -> Result<(), VaultError> {
        self.ensure_schema()
            .await?
            .metadata
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn insert_metadata(&self, key: &str, value: &str) -> Result<bool, VaultError> {
        let mut state = self.ensure_schema().await?;
        if state.metadata.contains_key(key) {
            return Ok(false);
        }
        state.metadata.insert(key.to_string(), value.to_string());
        Ok(true)
    }
}
