// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Master password verification without storing the password.
//!
//! At first setup a fixed sentinel string is encrypted under the derived key
//! and stored as a metadata row. Later unlocks decrypt that row: only the
//! original key reproduces the sentinel.

use tracing::debug;
use vaultguard_core::{RecordStore, VaultError};

use crate::crypto;
use crate::kdf::MasterKey;

/// Metadata key under which the verification record lives.
pub const VERIFICATION_KEY: &str = "verification";

/// Plaintext sealed into the verification record.
pub const VERIFICATION_SENTINEL: &str = "vault_verified";

/// Result of [`setup_verification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    /// A new record was written under the supplied key.
    Created,
    /// A record already existed and was left untouched.
    AlreadyPresent,
}

/// Result of [`verify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// The key decrypted the record to the sentinel.
    Verified,
    /// Decryption failed, or produced something other than the sentinel.
    Rejected,
    /// No record exists yet.
    Missing,
}

impl Verification {
    pub fn is_verified(self) -> bool {
        self == Verification::Verified
    }
}

/// Write the verification record if none exists.
///
/// First writer wins: an existing record is never replaced, whichever key
/// is passed here.
pub async fn setup_verification(
    store: &dyn RecordStore,
    key: &MasterKey,
) -> Result<SetupOutcome, VaultError> {
    if store.get_metadata(VERIFICATION_KEY).await?.is_some() {
        return Ok(SetupOutcome::AlreadyPresent);
    }

    let token = crypto::encrypt(VERIFICATION_SENTINEL, key)?;
    if store.insert_metadata(VERIFICATION_KEY, &token).await? {
        Ok(SetupOutcome::Created)
    } else {
        debug!("verification record written concurrently, keeping existing");
        Ok(SetupOutcome::AlreadyPresent)
    }
}

/// Check `key` against the stored verification record.
///
/// Integrity failures are folded into [`Verification::Rejected`]; only
/// storage failures are returned as errors.
pub async fn verify(store: &dyn RecordStore, key: &MasterKey) -> Result<Verification, VaultError> {
    let Some(token) = store.get_metadata(VERIFICATION_KEY).await? else {
        return Ok(Verification::Missing);
    };

    let outcome = match crypto::decrypt(&token, key) {
        Ok(plaintext) if plaintext == VERIFICATION_SENTINEL => Verification::Verified,
        _ => Verification::Rejected,
    };
    Ok(outcome)
}
