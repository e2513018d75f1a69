// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory salt store.

use std::sync::{Arc, Mutex};

use vaultguard_core::{SALT_LEN, SaltStore, VaultError};

/// Salt store that creates a deterministic salt on first use.
///
/// "Deterministic" is for test reproducibility only: the created salt is
/// the configured seed value, not random.
#[derive(Debug, Clone)]
pub struct MemorySaltStore {
    seed: [u8; SALT_LEN],
    salt: Arc<Mutex<Option<[u8; SALT_LEN]>>>,
}

impl MemorySaltStore {
    /// Empty store that will create `seed` on first `load_or_create`.
    pub fn new(seed: [u8; SALT_LEN]) -> Self {
        Self {
            seed,
            salt: Arc::new(Mutex::new(None)),
        }
    }

    /// Store that already holds `salt`.
    pub fn with_salt(salt: [u8; SALT_LEN]) -> Self {
        Self {
            seed: salt,
            salt: Arc::new(Mutex::new(Some(salt))),
        }
    }

    /// Simulate losing the salt and regenerating it with a different value.
    pub fn replace(&self, salt: [u8; SALT_LEN]) {
        if let Ok(mut guard) = self.salt.lock() {
            *guard = Some(salt);
        }
    }
}

impl Default for MemorySaltStore {
    fn default() -> Self {
        Self::new([7u8; SALT_LEN])
    }
}

impl SaltStore for MemorySaltStore {
    fn load_or_create(&self) -> Result<[u8; SALT_LEN], VaultError> {
        let mut guard = self
            .salt
            .lock()
            .map_err(|_| VaultError::Internal("salt mutex poisoned".to_string()))?;
        Ok(*guard.get_or_insert(self.seed))
    }

    fn exists(&self) -> bool {
        self.salt.lock().map(|g| g.is_some()).unwrap_or(false)
    }
}
