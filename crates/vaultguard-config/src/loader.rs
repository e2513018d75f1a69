// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./vaultguard.toml` > `~/.config/vaultguard/vaultguard.toml`
//! > `/etc/vaultguard/vaultguard.toml` with environment variable overrides via
//! the `VAULTGUARD_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::VaultGuardConfig;

/// Environment variable prefix for config overrides.
pub const ENV_PREFIX: &str = "VAULTGUARD_";

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/vaultguard/vaultguard.toml` (system-wide)
/// 3. `~/.config/vaultguard/vaultguard.toml` (user XDG config)
/// 4. `./vaultguard.toml` (local directory)
/// 5. `VAULTGUARD_*` environment variables
pub fn load_config() -> Result<VaultGuardConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<VaultGuardConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VaultGuardConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
///
/// Unlike the XDG files, an explicitly named file must exist.
pub fn load_config_from_path(path: &Path) -> Result<VaultGuardConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VaultGuardConfig::default()))
        .merge(Toml::file_exact(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(VaultGuardConfig::default()))
        .merge(Toml::file("/etc/vaultguard/vaultguard.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("vaultguard/vaultguard.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("vaultguard.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")`: key names contain
/// underscores, so `VAULTGUARD_STORAGE_DATABASE_PATH` must map to
/// `storage.database_path`, not `storage.database.path`.
///
/// `VAULTGUARD_MASTER_PASSWORD` is ignored here; it is read by the
/// password prompt, never stored in the config.
fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX)
        .ignore(&["master_password"])
        .map(|key| {
            // Keys arrive with their original case: VAULTGUARD_VAULT_SALT_PATH
            // -> "VAULT_SALT_PATH" -> "vault.salt_path".
            let mapped = map_env_key(&key.as_str().to_ascii_lowercase());
            mapped.into()
        })
}

/// Map a lowercased, prefix-stripped env key to its dotted config path.
pub(crate) fn map_env_key(key: &str) -> String {
    for section in ["general", "storage", "vault", "sentinel"] {
        if let Some(rest) = key.strip_prefix(section).and_then(|r| r.strip_prefix('_')) {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}
