// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record store trait for persistence backends (SQLite, in-memory, etc.).

use async_trait::async_trait;

use crate::error::VaultError;
use crate::types::SecretEntry;

/// Persists opaque encrypted entries and vault metadata.
///
/// The store never interprets ciphertext. If it is shared across processes,
/// serializing writes is the store's responsibility.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Create tables if they do not exist yet. Idempotent.
    async fn create_schema(&self) -> Result<(), VaultError>;

    /// Append a secret entry. Returns the assigned row id.
    async fn insert_secret(&self, entry: &SecretEntry) -> Result<i64, VaultError>;

    /// All entries in insertion order.
    async fn list_secrets(&self) -> Result<Vec<SecretEntry>, VaultError>;

    /// Read a metadata value, or `None` if the key was never written.
    async fn get_metadata(&self, key: &str) -> Result<Option<String>, VaultError>;

    /// Write a metadata value, replacing any existing one.
    async fn set_metadata(&self, key: &str, value: &str) -> Result<(), VaultError>;

    /// Write a metadata value only if the key is absent.
    ///
    /// Returns `true` if this call wrote the value, `false` if a value was
    /// already present (which is left untouched).
    async fn insert_metadata(&self, key: &str, value: &str) -> Result<bool, VaultError>;
}
