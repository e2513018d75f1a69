// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vault lifecycle: unlock, add, list, and lock.
//!
//! [`Vault::open`] creates the record store schema. Unlocking then runs the
//! whole gate in order:
//! - load the salt (creating it only for a brand new vault),
//! - derive the master key off the async runtime,
//! - write the verification record on first run,
//! - verify the key against that record.
//!
//! Any outcome other than a verified key is reported as
//! [`VaultError::AccessDenied`] with no further detail.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, warn};
use vaultguard_core::{IntegrityError, RecordStore, SaltStore, SecretEntry, VaultError};
use zeroize::Zeroizing;

use crate::crypto;
use crate::kdf::{self, KDF_ITERATIONS, MasterKey};
use crate::verify::{self, SetupOutcome, VERIFICATION_KEY, Verification};

/// Tunables for [`Vault`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultOptions {
    /// PBKDF2 iteration count. Only tests should lower this.
    pub kdf_iterations: u32,
}

impl Default for VaultOptions {
    fn default() -> Self {
        Self {
            kdf_iterations: KDF_ITERATIONS,
        }
    }
}

/// A locked vault: collaborators wired up, no key in memory.
pub struct Vault {
    store: Arc<dyn RecordStore>,
    salt_store: Arc<dyn SaltStore>,
    options: VaultOptions,
}

impl std::fmt::Debug for Vault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vault")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Vault {
    /// Wire up the collaborators and make sure the record store schema exists.
    pub async fn open(
        store: Arc<dyn RecordStore>,
        salt_store: Arc<dyn SaltStore>,
        options: VaultOptions,
    ) -> Result<Self, VaultError> {
        store.create_schema().await?;
        Ok(Self {
            store,
            salt_store,
            options,
        })
    }

    /// Whether a verification record exists, i.e. this is not a first run.
    pub async fn is_initialized(&self) -> Result<bool, VaultError> {
        Ok(self.store.get_metadata(VERIFICATION_KEY).await?.is_some())
    }

    /// Derive the key from `password` and open a session if it verifies.
    pub async fn unlock(&self, password: &SecretString) -> Result<VaultSession, VaultError> {
        let initialized = self.is_initialized().await?;
        if initialized && !self.salt_store.exists() {
            // A fresh salt would derive a different key and could never
            // verify; refuse instead of creating one.
            warn!("vault has a verification record but no salt");
            return Err(VaultError::AccessDenied);
        }

        let salt = self.salt_store.load_or_create()?;
        let iterations = self.options.kdf_iterations;
        let password_bytes = Zeroizing::new(password.expose_secret().as_bytes().to_vec());
        let key = tokio::task::spawn_blocking(move || {
            kdf::derive_key(&password_bytes, &salt, iterations)
        })
        .await
        .map_err(|e| VaultError::Internal(format!("key derivation task failed: {e}")))??;

        if verify::setup_verification(self.store.as_ref(), &key).await? == SetupOutcome::Created {
            info!("verification record created");
        }

        match verify::verify(self.store.as_ref(), &key).await? {
            Verification::Verified => {
                info!("vault unlocked");
                Ok(VaultSession {
                    key,
                    store: Arc::clone(&self.store),
                })
            }
            Verification::Rejected | Verification::Missing => {
                debug!("master password verification failed");
                Err(VaultError::AccessDenied)
            }
        }
    }
}

/// One decrypted entry from [`VaultSession::list_secrets`].
#[derive(Debug)]
pub struct RevealedSecret {
    pub site: String,
    pub username: String,
    pub created_at: String,
    /// The decrypted password, or the integrity failure for this record only.
    pub password: Result<SecretString, IntegrityError>,
}

/// An unlocked vault holding the master key for the session.
///
/// The key is zeroed when the session is dropped or [`locked`](Self::lock).
pub struct VaultSession {
    key: MasterKey,
    store: Arc<dyn RecordStore>,
}

impl std::fmt::Debug for VaultSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultSession")
            .field("key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl VaultSession {
    /// Encrypt `password` and store it alongside the plaintext identifiers.
    pub async fn add_secret(
        &self,
        site: &str,
        username: &str,
        password: &SecretString,
    ) -> Result<i64, VaultError> {
        let ciphertext = crypto::encrypt(password.expose_secret(), &self.key)?;
        let id = self
            .store
            .insert_secret(&SecretEntry::new(site, username, ciphertext))
            .await?;
        debug!(id, site = %site, username = %username, "secret stored");
        Ok(id)
    }

    /// Every stored entry in insertion order.
    ///
    /// A record that fails to decrypt carries its own `IntegrityError` and
    /// does not affect the others.
    pub async fn list_secrets(&self) -> Result<Vec<RevealedSecret>, VaultError> {
        let entries = self.store.list_secrets().await?;
        let revealed = entries
            .into_iter()
            .map(|entry| {
                let password = crypto::decrypt(&entry.ciphertext, &self.key).map(SecretString::from);
                if password.is_err() {
                    warn!(site = %entry.site, "stored secret failed to decrypt");
                }
                RevealedSecret {
                    site: entry.site,
                    username: entry.username,
                    created_at: entry.created_at,
                    password,
                }
            })
            .collect();
        Ok(revealed)
    }

    /// End the session, zeroing the key.
    pub fn lock(self) {
        drop(self);
        debug!("vault locked");
    }
}

/// Fixed-width placeholder shown in place of a masked password.
const MASK: &str = "********";

/// Passwords shorter than this are masked completely.
const MASK_MIN_LEN: usize = 12;

/// Characters of the tail left visible on long passwords.
const MASK_TAIL: usize = 2;

/// Mask a password for listings. Every password under 12 characters renders
/// the same, and at most the last two characters are shown.
pub fn mask_secret(value: &str) -> String {
    let len = value.chars().count();
    if len < MASK_MIN_LEN {
        return MASK.to_string();
    }
    let tail: String = value.chars().skip(len - MASK_TAIL).collect();
    format!("{MASK}{tail}")
}
