// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes: non-empty paths, distinct salt and database files, a known
//! log level.

use std::path::Path;

use tracing::debug;

use crate::diagnostic::ConfigError;
use crate::model::VaultGuardConfig;

/// Log levels accepted by `general.log_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &VaultGuardConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.general.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "general.log_level `{}` is not one of: {}",
                config.general.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    let database_path = config.storage.database_path.trim();
    if database_path.is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    let salt_path = config.vault.salt_path.trim();
    if salt_path.is_empty() {
        errors.push(ConfigError::Validation {
            message: "vault.salt_path must not be empty".to_string(),
        });
    }

    // Writing the salt into the SQLite file (or vice versa) would destroy both.
    if !salt_path.is_empty() && Path::new(salt_path) == Path::new(database_path) {
        errors.push(ConfigError::Validation {
            message: format!(
                "vault.salt_path and storage.database_path must differ, both are `{salt_path}`"
            ),
        });
    }

    if let Some(model_path) = &config.sentinel.model_path {
        if model_path.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "sentinel.model_path must not be empty when set".to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        debug!(count = errors.len(), "configuration failed validation");
        Err(errors)
    }
}
