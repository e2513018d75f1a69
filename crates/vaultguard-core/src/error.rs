// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the VaultGuard secrets vault.

use std::path::PathBuf;

use thiserror::Error;

/// A ciphertext could not be authenticated under the supplied key.
///
/// Covers a wrong key, a flipped bit, a truncated token, and a token that is
/// not valid encoding at all. The cause is deliberately not distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("integrity check failed: wrong key or corrupted ciphertext")]
pub struct IntegrityError;

/// The primary error type used across all VaultGuard crates.
#[derive(Debug, Error)]
pub enum VaultError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Record store errors (database connection, query failure, migrations).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The salt blob could not be read or created.
    #[error("salt store error at {}: {source}", path.display())]
    Salt {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The salt blob exists but does not have the expected length.
    #[error("corrupted salt at {}: expected 16 bytes, found {len}", path.display())]
    CorruptSalt { path: PathBuf, len: usize },

    /// Key derivation rejected its parameters. Not expected under normal inputs.
    #[error("key derivation failed: {0}")]
    Derivation(String),

    /// Decryption failed authentication.
    #[error(transparent)]
    Integrity(#[from] IntegrityError),

    /// The supplied master password did not unlock the vault.
    ///
    /// Carries no detail on purpose: callers must not learn whether the
    /// password, the salt, or the verification record was at fault.
    #[error("access denied")]
    AccessDenied,

    /// The master password could not be obtained from the environment or a TTY.
    #[error("password prompt failed: {0}")]
    Prompt(String),

    /// A scorer model artifact could not be loaded.
    #[error("scorer model error: {0}")]
    Model(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl VaultError {
    /// Wrap any storage-layer error.
    pub fn storage<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage {
            source: Box::new(source),
        }
    }
}
