// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Salt persistence trait.

use crate::error::VaultError;

/// Length of the per-vault KDF salt in bytes.
pub const SALT_LEN: usize = 16;

/// Owns the vault's single random salt.
///
/// The salt is created lazily on first use and is immutable afterwards.
/// Losing it makes every existing ciphertext unrecoverable.
pub trait SaltStore: Send + Sync {
    /// Return the existing salt, creating it with secure randomness if absent.
    fn load_or_create(&self) -> Result<[u8; SALT_LEN], VaultError>;

    /// Whether a salt has been persisted yet.
    fn exists(&self) -> bool;
}
