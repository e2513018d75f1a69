// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! AES-256-GCM text tokens for individual secret fields.
//!
//! A token is URL-safe base64 (padded) over:
//!
//! ```text
//! version (1) | issued_at, u64 BE unix seconds (8) | nonce (12) | ciphertext | tag (16)
//! ```
//!
//! Version and timestamp are bound to the ciphertext as additional
//! authenticated data. Every call to [`encrypt`] draws a fresh random 96-bit
//! nonce from the system CSPRNG; nonce reuse would be catastrophic for GCM.

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use ring::aead::{AES_256_GCM, Aad, LessSafeKey, NONCE_LEN, Nonce, UnboundKey};
use ring::rand::{SecureRandom, SystemRandom};
use vaultguard_core::{IntegrityError, VaultError};

use crate::kdf::MasterKey;

/// Current token format version.
pub const TOKEN_VERSION: u8 = 0x01;

const HEADER_LEN: usize = 1 + 8;
const TAG_LEN: usize = 16;

/// Tokens stamped this far in the future are still accepted by [`decrypt_with_ttl`].
pub const MAX_CLOCK_SKEW: Duration = Duration::from_secs(60);

/// Encrypt `plaintext` under `key`, stamped with the current time.
pub fn encrypt(plaintext: &str, key: &MasterKey) -> Result<String, VaultError> {
    encrypt_at(plaintext, key, now_unix())
}

/// Encrypt with an explicit issue timestamp.
pub fn encrypt_at(plaintext: &str, key: &MasterKey, issued_at: u64) -> Result<String, VaultError> {
    let sealing_key = aead_key(key)
        .map_err(|_| VaultError::Internal("failed to create AES-256-GCM key".to_string()))?;

    let rng = SystemRandom::new();
    let mut nonce_bytes = [0u8; NONCE_LEN];
    rng.fill(&mut nonce_bytes)
        .map_err(|_| VaultError::Internal("failed to generate random nonce".to_string()))?;

    let header = header(issued_at);
    let mut in_out = plaintext.as_bytes().to_vec();
    sealing_key
        .seal_in_place_append_tag(
            Nonce::assume_unique_for_key(nonce_bytes),
            Aad::from(header),
            &mut in_out,
        )
        .map_err(|_| VaultError::Internal("AES-256-GCM encryption failed".to_string()))?;

    let mut token = Vec::with_capacity(HEADER_LEN + NONCE_LEN + in_out.len());
    token.extend_from_slice(&header);
    token.extend_from_slice(&nonce_bytes);
    token.extend_from_slice(&in_out);
    Ok(URL_SAFE.encode(token))
}

/// Decrypt a token produced by [`encrypt`].
///
/// Any malformed, truncated, tampered, or wrong-key token yields
/// [`IntegrityError`]; a plaintext is only returned if authentication passed.
pub fn decrypt(token: &str, key: &MasterKey) -> Result<String, IntegrityError> {
    let raw = URL_SAFE.decode(token.trim()).map_err(|_| IntegrityError)?;
    if raw.len() < HEADER_LEN + NONCE_LEN + TAG_LEN || raw[0] != TOKEN_VERSION {
        return Err(IntegrityError);
    }

    let (header, rest) = raw.split_at(HEADER_LEN);
    let (nonce_bytes, sealed) = rest.split_at(NONCE_LEN);
    let nonce = Nonce::try_assume_unique_for_key(nonce_bytes).map_err(|_| IntegrityError)?;

    let opening_key = aead_key(key).map_err(|_| IntegrityError)?;
    let mut in_out = sealed.to_vec();
    let plaintext = opening_key
        .open_in_place(nonce, Aad::from(header), &mut in_out)
        .map_err(|_| IntegrityError)?;

    String::from_utf8(plaintext.to_vec()).map_err(|_| IntegrityError)
}

/// Decrypt, additionally rejecting tokens older than `ttl` relative to `now`
/// (unix seconds) or stamped more than [`MAX_CLOCK_SKEW`] in the future.
pub fn decrypt_with_ttl(
    token: &str,
    key: &MasterKey,
    ttl: Duration,
    now: u64,
) -> Result<String, IntegrityError> {
    let plaintext = decrypt(token, key)?;
    // Safe to trust now: decrypt authenticated the header.
    let issued = issued_at(token).ok_or(IntegrityError)?;
    if issued > now.saturating_add(MAX_CLOCK_SKEW.as_secs()) {
        return Err(IntegrityError);
    }
    if now.saturating_sub(issued) > ttl.as_secs() {
        return Err(IntegrityError);
    }
    Ok(plaintext)
}

/// Read the issue timestamp from a token without decrypting it.
///
/// The value is unauthenticated until the token has passed [`decrypt`].
pub fn issued_at(token: &str) -> Option<u64> {
    let raw = URL_SAFE.decode(token.trim()).ok()?;
    if raw.len() < HEADER_LEN || raw[0] != TOKEN_VERSION {
        return None;
    }
    let stamp: [u8; 8] = raw[1..HEADER_LEN].try_into().ok()?;
    Some(u64::from_be_bytes(stamp))
}

fn aead_key(key: &MasterKey) -> Result<LessSafeKey, ring::error::Unspecified> {
    let unbound = UnboundKey::new(&AES_256_GCM, key.as_bytes())?;
    Ok(LessSafeKey::new(unbound))
}

fn header(issued_at: u64) -> [u8; HEADER_LEN] {
    let mut header = [0u8; HEADER_LEN];
    header[0] = TOKEN_VERSION;
    header[1..].copy_from_slice(&issued_at.to_be_bytes());
    header
}

fn now_unix() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp()).unwrap_or(0)
}
