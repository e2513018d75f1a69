// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! PBKDF2-HMAC-SHA256 key derivation from the master password.
//!
//! The iteration count is a fixed constant. Changing it changes every
//! derived key, which makes existing vaults unreadable exactly as losing
//! the salt would.

use std::num::NonZeroU32;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use ring::pbkdf2;
use ring::rand::{SecureRandom, SystemRandom};
use vaultguard_core::{SALT_LEN, VaultError};
use zeroize::Zeroizing;

/// PBKDF2 iteration count used for every vault.
///
/// Targets a few hundred milliseconds per unlock attempt on commodity
/// hardware.
pub const KDF_ITERATIONS: u32 = 480_000;

/// Length of the derived key in bytes.
pub const KEY_LEN: usize = 32;

/// The session key derived from the master password.
///
/// Only ever held in memory; zeroed on drop. Debug output omits the bytes.
pub struct MasterKey(Zeroizing<[u8; KEY_LEN]>);

impl MasterKey {
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// URL-safe base64 rendering of the key, zeroed on drop.
    pub fn to_base64url(&self) -> Zeroizing<String> {
        Zeroizing::new(URL_SAFE.encode(&self.0[..]))
    }
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MasterKey([REDACTED])")
    }
}

/// Derive the 32-byte master key from `password` and the vault salt.
///
/// Pure and deterministic. Blocking: callers on an async runtime should
/// run it via `spawn_blocking`.
pub fn derive_key(
    password: &[u8],
    salt: &[u8; SALT_LEN],
    iterations: u32,
) -> Result<MasterKey, VaultError> {
    let mut out = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_sha256(password, salt, iterations, &mut out[..])?;
    Ok(MasterKey(out))
}

fn pbkdf2_sha256(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) -> Result<(), VaultError> {
    let iterations = NonZeroU32::new(iterations)
        .ok_or_else(|| VaultError::Derivation("iteration count must be non-zero".to_string()))?;
    pbkdf2::derive(pbkdf2::PBKDF2_HMAC_SHA256, iterations, salt, password, out);
    Ok(())
}

/// Generate a random 16-byte salt from the system CSPRNG.
pub fn generate_salt() -> Result<[u8; SALT_LEN], VaultError> {
    let rng = SystemRandom::new();
    let mut salt = [0u8; SALT_LEN];
    rng.fill(&mut salt)
        .map_err(|_| VaultError::Internal("failed to generate random salt".to_string()))?;
    Ok(salt)
}
