// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Master password acquisition via TTY prompt or the
//! `VAULTGUARD_MASTER_PASSWORD` environment variable.

use secrecy::{ExposeSecret, SecretString};
use vaultguard_core::VaultError;

/// The environment variable name for providing the master password.
pub const MASTER_PASSWORD_ENV_VAR: &str = "VAULTGUARD_MASTER_PASSWORD";

/// Get the master password from the environment or an interactive prompt.
///
/// Priority:
/// 1. `VAULTGUARD_MASTER_PASSWORD` (for scripted use)
/// 2. Hidden TTY prompt via `rpassword`
pub fn get_master_password() -> Result<SecretString, VaultError> {
    if let Some(password) = password_from_env() {
        return Ok(password);
    }

    if std::io::IsTerminal::is_terminal(&std::io::stdin()) {
        let password = read_hidden("Enter master password: ")?;
        if password.expose_secret().is_empty() {
            return Err(VaultError::Prompt("empty master password not allowed".to_string()));
        }
        return Ok(password);
    }

    Err(no_source())
}

/// Get a new master password, asking twice (first run only).
///
/// The environment variable is taken as-is without confirmation.
pub fn get_master_password_with_confirm() -> Result<SecretString, VaultError> {
    if let Some(password) = password_from_env() {
        return Ok(password);
    }

    if std::io::IsTerminal::is_terminal(&std::io::stdin()) {
        let first = read_hidden("New master password: ")?;
        let second = read_hidden("Confirm master password: ")?;
        return confirm(first, &second);
    }

    Err(no_source())
}

/// Read one line from the TTY without echo.
pub fn read_hidden(prompt: &str) -> Result<SecretString, VaultError> {
    rpassword::prompt_password(prompt)
        .map(SecretString::from)
        .map_err(|e| VaultError::Prompt(format!("failed to read password: {e}")))
}

fn password_from_env() -> Option<SecretString> {
    match std::env::var(MASTER_PASSWORD_ENV_VAR) {
        Ok(value) if !value.is_empty() => Some(SecretString::from(value)),
        _ => None,
    }
}

fn confirm(first: SecretString, second: &SecretString) -> Result<SecretString, VaultError> {
    if first.expose_secret() != second.expose_secret() {
        return Err(VaultError::Prompt("passwords do not match".to_string()));
    }
    if first.expose_secret().is_empty() {
        return Err(VaultError::Prompt("empty master password not allowed".to_string()));
    }
    Ok(first)
}

fn no_source() -> VaultError {
    VaultError::Prompt(format!(
        "no master password provided; set {MASTER_PASSWORD_ENV_VAR} or run interactively"
    ))
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn get_password_from_env_var() {
        // SAFETY: test-only env mutation, serialized with every other env test.
        unsafe { std::env::set_var(MASTER_PASSWORD_ENV_VAR, "test-password") };
        let result = get_master_password();
        unsafe { std::env::remove_var(MASTER_PASSWORD_ENV_VAR) };

        assert_eq!(result.unwrap().expose_secret(), "test-password");
    }

    #[test]
    #[serial]
    fn confirm_variant_accepts_env_var_without_prompting() {
        unsafe { std::env::set_var(MASTER_PASSWORD_ENV_VAR, "test-password") };
        let result = get_master_password_with_confirm();
        unsafe { std::env::remove_var(MASTER_PASSWORD_ENV_VAR) };

        assert!(result.is_ok());
    }

    #[test]
    #[serial]
    fn empty_env_var_is_ignored() {
        unsafe { std::env::set_var(MASTER_PASSWORD_ENV_VAR, "") };
        let from_env = password_from_env();
        unsafe { std::env::remove_var(MASTER_PASSWORD_ENV_VAR) };

        assert!(from_env.is_none());
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let err = confirm(
            SecretString::from("one".to_string()),
            &SecretString::from("two".to_string()),
        )
        .unwrap_err();
        assert!(err.to_string().contains("do not match"));
    }

    #[test]
    fn empty_confirmation_is_rejected() {
        let first = SecretString::from(String::new());
        let second = SecretString::from(String::new());
        assert!(confirm(first, &second).is_err());
    }

    #[test]
    fn matching_confirmation_is_accepted() {
        let first = SecretString::from("same".to_string());
        let second = SecretString::from("same".to_string());
        assert_eq!(confirm(first, &second).unwrap().expose_secret(), "same");
    }
}
