// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the VaultGuard secrets vault.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.
//!
//! The KDF iteration count and the URL risk thresholds are deliberately not
//! part of the configuration: both are fixed constants of the engine.

use serde::{Deserialize, Serialize};

/// Top-level VaultGuard configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VaultGuardConfig {
    /// Process-wide settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Record store settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Salt and key material settings.
    #[serde(default)]
    pub vault: VaultConfig,

    /// URL risk scorer settings.
    #[serde(default)]
    pub sentinel: SentinelConfig,
}

/// Process-wide configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Record store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file holding entries and metadata.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    data_file("vault.db")
}

fn default_wal_mode() -> bool {
    true
}

/// Salt configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VaultConfig {
    /// Path to the 16-byte salt blob. Losing this file makes every stored
    /// secret unrecoverable.
    #[serde(default = "default_salt_path")]
    pub salt_path: String,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            salt_path: default_salt_path(),
        }
    }
}

fn default_salt_path() -> String {
    data_file("salt.bin")
}

/// URL risk scorer configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SentinelConfig {
    /// Path to a scorer model artifact. `None` runs without a scorer, which
    /// scores every URL as 0.0.
    #[serde(default)]
    pub model_path: Option<String>,
}

fn data_file(name: &str) -> String {
    dirs::data_dir()
        .map(|p| p.join("vaultguard").join(name))
        .unwrap_or_else(|| std::path::PathBuf::from(name))
        .to_string_lossy()
        .into_owned()
}
