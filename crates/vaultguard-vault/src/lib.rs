// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key derivation, authenticated encryption, and master password
//! verification for the VaultGuard secrets vault.
//!
//! A master key is derived from the master password and a per-vault salt
//! via PBKDF2-HMAC-SHA256. It encrypts every secret with AES-256-GCM and is
//! checked on each unlock against a stored verification record. The key
//! itself is never persisted.

pub mod crypto;
pub mod kdf;
pub mod prompt;
pub mod salt;
pub mod vault;
pub mod verify;

pub use crypto::{decrypt, encrypt};
pub use kdf::{KDF_ITERATIONS, MasterKey, derive_key};
pub use prompt::{get_master_password, get_master_password_with_confirm, read_hidden};
pub use salt::FileSaltStore;
pub use vault::{RevealedSecret, Vault, VaultOptions, VaultSession, mask_secret};
pub use verify::{SetupOutcome, Verification, setup_verification, verify};
