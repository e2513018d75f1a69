// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-shot subcommands and the workflows the interactive shell reuses.

use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use secrecy::ExposeSecret;
use tracing::debug;
use vaultguard_config::VaultGuardConfig;
use vaultguard_core::VaultError;
use vaultguard_sentinel::{RiskAssessment, RiskLevel, Sentinel};
use vaultguard_security::StrengthReport;
use vaultguard_storage::SqliteRecordStore;
use vaultguard_vault::{FileSaltStore, Vault, VaultOptions, VaultSession, mask_secret};

use crate::input::Prompter;

/// How an add-entry flow ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Stored(i64),
    /// The user chose to drop a high-risk URL.
    Discarded,
    /// Input closed before the entry was complete.
    Cancelled,
}

/// Wire the vault to the configured SQLite file and salt file.
pub async fn open_vault(config: &VaultGuardConfig) -> Result<(Vault, SqliteRecordStore), VaultError> {
    let store = SqliteRecordStore::open(&config.storage).await?;
    let salt = FileSaltStore::new(&config.vault.salt_path);
    let vault = Vault::open(
        Arc::new(store.clone()),
        Arc::new(salt),
        VaultOptions::default(),
    )
    .await?;
    Ok((vault, store))
}

pub fn build_sentinel(config: &VaultGuardConfig) -> Sentinel {
    Sentinel::from_model_path(config.sentinel.model_path.as_deref().map(Path::new))
}

/// Ask for the master password (twice on first run) and unlock.
pub async fn unlock(vault: &Vault) -> Result<VaultSession, VaultError> {
    let password = if vault.is_initialized().await? {
        vaultguard_vault::get_master_password()?
    } else {
        println!("{}", "No vault found, creating a new one.".dimmed());
        vaultguard_vault::get_master_password_with_confirm()?
    };
    vault.unlock(&password).await
}

/// Discard unless the answer is exactly `n`, ignoring case.
pub fn should_discard(answer: &str) -> bool {
    answer.to_lowercase() != "n"
}

/// Accept a weak password only on exactly `y`, ignoring case.
pub fn accepts_weak_password(answer: &str) -> bool {
    answer.to_lowercase() == "y"
}

/// The add-entry workflow: risk check, username, strength-gated password,
/// encrypt and store. Missing `site` / `username` are prompted for.
pub async fn add_entry(
    session: &VaultSession,
    sentinel: &Sentinel,
    prompter: &mut dyn Prompter,
    site: Option<String>,
    username: Option<String>,
) -> Result<AddOutcome, VaultError> {
    let site = match site {
        Some(site) => site,
        None => match prompter.line("Website URL: ")? {
            Some(site) => site,
            None => return Ok(AddOutcome::Cancelled),
        },
    };

    let assessment = sentinel.analyze_url(&site);
    println!("Risk assessment: {}", assessment.percent());
    match assessment.level {
        RiskLevel::High => {
            println!("{}", "HIGH PHISHING RISK DETECTED.".red().bold());
            let Some(answer) = prompter.line("Discard entry? (y/n): ")? else {
                return Ok(AddOutcome::Cancelled);
            };
            if should_discard(&answer) {
                debug!(site = %site, "high-risk entry discarded");
                return Ok(AddOutcome::Discarded);
            }
        }
        RiskLevel::Moderate => {
            println!("{}", "Moderate risk. Verify URL authenticity.".yellow());
        }
        RiskLevel::Low => {}
    }

    let username = match username {
        Some(username) => username,
        None => match prompter.line("Username: ")? {
            Some(username) => username,
            None => return Ok(AddOutcome::Cancelled),
        },
    };

    let password = loop {
        let Some(password) = prompter.secret("Enter password: ")? else {
            return Ok(AddOutcome::Cancelled);
        };
        let report = vaultguard_security::evaluate(password.expose_secret());
        if report.is_strong() {
            println!("{}", "Strong password.".green());
            break password;
        }
        print_weak(&report);
        let Some(answer) = prompter.line("Save anyway? (y/n): ")? else {
            return Ok(AddOutcome::Cancelled);
        };
        if accepts_weak_password(&answer) {
            break password;
        }
    };

    let id = session.add_secret(&site, &username, &password).await?;
    println!("{}", "Secret securely stored.".green());
    Ok(AddOutcome::Stored(id))
}

fn print_weak(report: &StrengthReport) {
    println!("{}", "Weak password:".yellow());
    for deficiency in &report.deficiencies {
        println!("  {} {deficiency}", "✗".red());
    }
}

/// Print every entry; a record that fails to decrypt gets a marker line.
/// Returns the number of entries printed.
pub async fn print_listing(session: &VaultSession, reveal: bool) -> Result<usize, VaultError> {
    let secrets = session.list_secrets().await?;
    if secrets.is_empty() {
        println!("Vault is empty.");
        return Ok(0);
    }
    for secret in &secrets {
        match &secret.password {
            Ok(password) => {
                let shown = if reveal {
                    password.expose_secret().to_string()
                } else {
                    mask_secret(password.expose_secret())
                };
                println!(
                    "URL: {} | User: {} | Pass: {shown}",
                    secret.site, secret.username
                );
            }
            Err(_) => {
                println!("URL: {} | {}", secret.site, "Decryption failed.".red());
            }
        }
    }
    Ok(secrets.len())
}

/// `vaultguard add`
pub async fn run_add(
    config: &VaultGuardConfig,
    prompter: &mut dyn Prompter,
    site: Option<String>,
    username: Option<String>,
) -> Result<(), VaultError> {
    let (vault, store) = open_vault(config).await?;
    let session = unlock(&vault).await?;
    let sentinel = build_sentinel(config);
    let outcome = add_entry(&session, &sentinel, prompter, site, username).await?;
    match outcome {
        AddOutcome::Stored(id) => debug!(id, "entry stored"),
        AddOutcome::Discarded => println!("Entry discarded."),
        AddOutcome::Cancelled => println!("Cancelled."),
    }
    session.lock();
    store.close().await
}

/// `vaultguard list`
pub async fn run_list(config: &VaultGuardConfig, reveal: bool) -> Result<(), VaultError> {
    let (vault, store) = open_vault(config).await?;
    let session = unlock(&vault).await?;
    print_listing(&session, reveal).await?;
    session.lock();
    store.close().await
}

/// `vaultguard check-url`
pub fn run_check_url(config: &VaultGuardConfig, url: &str, json: bool) -> Result<(), VaultError> {
    let sentinel = build_sentinel(config);
    let assessment = sentinel.analyze_url(url);
    if json {
        let rendered = serde_json::to_string_pretty(&assessment)
            .map_err(|e| VaultError::Internal(format!("failed to render JSON: {e}")))?;
        println!("{rendered}");
        return Ok(());
    }
    print_assessment(&assessment, sentinel.has_scorer());
    Ok(())
}

fn print_assessment(assessment: &RiskAssessment, has_scorer: bool) {
    println!("Features:");
    for (feature, value) in assessment.features.iter() {
        println!("  {:<16} {value}", feature.to_string());
    }
    let level = match assessment.level {
        RiskLevel::High => "high".red().bold(),
        RiskLevel::Moderate => "moderate".yellow(),
        RiskLevel::Low => "low".green(),
    };
    println!("Risk: {} ({level})", assessment.percent());
    if !has_scorer {
        println!("{}", "No scorer model configured; every URL scores 0.0.".dimmed());
    }
}

/// `vaultguard check-password`
pub fn run_check_password(prompter: &mut dyn Prompter) -> Result<(), VaultError> {
    let Some(password) = prompter.secret("Password to check: ")? else {
        return Err(VaultError::Prompt("no password given".to_string()));
    };
    let report = vaultguard_security::evaluate(password.expose_secret());
    println!("Score: {}/{}", report.score, vaultguard_security::MAX_SCORE);
    if report.is_strong() {
        println!("{}", "Strong password.".green());
    } else {
        print_weak(&report);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;
    use vaultguard_sentinel::ConstantScorer;
    use vaultguard_test_utils::{MemoryRecordStore, MemorySaltStore};

    use super::*;
    use crate::input::scripted::ScriptedPrompter;

    async fn session() -> VaultSession {
        let vault = Vault::open(
            Arc::new(MemoryRecordStore::new()),
            Arc::new(MemorySaltStore::default()),
            VaultOptions { kdf_iterations: 10 },
        )
        .await
        .unwrap();
        vault
            .unlock(&SecretString::from("master".to_string()))
            .await
            .unwrap()
    }

    fn sentinel(probability: f64) -> Sentinel {
        Sentinel::new(Some(Box::new(ConstantScorer::new(probability))))
    }

    #[test]
    fn discard_answers() {
        assert!(!should_discard("n"));
        assert!(!should_discard("N"));
        assert!(should_discard("y"));
        assert!(should_discard(""));
        assert!(should_discard("no"));
        assert!(should_discard(" n"));
    }

    #[test]
    fn weak_password_override_answers() {
        assert!(accepts_weak_password("y"));
        assert!(accepts_weak_password("Y"));
        assert!(!accepts_weak_password("yes"));
        assert!(!accepts_weak_password("n"));
        assert!(!accepts_weak_password(""));
    }

    #[tokio::test]
    async fn low_risk_strong_password_is_stored() {
        let session = session().await;
        let mut prompter = ScriptedPrompter::new(&["https://github.com", "octocat", "Tr0ub4dor&3xtra!"]);
        let outcome = add_entry(&session, &sentinel(0.0), &mut prompter, None, None)
            .await
            .unwrap();
        assert!(matches!(outcome, AddOutcome::Stored(_)));

        let listed = session.list_secrets().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].site, "https://github.com");
        assert_eq!(listed[0].username, "octocat");
        assert_eq!(prompter.remaining(), 0);
    }

    #[tokio::test]
    async fn high_risk_is_discarded_by_default() {
        let session = session().await;
        let mut prompter = ScriptedPrompter::new(&["", "unused"]);
        let outcome = add_entry(
            &session,
            &sentinel(0.9),
            &mut prompter,
            Some("http://paypa1-login.example".to_string()),
            Some("victim".to_string()),
        )
        .await
        .unwrap();
        assert_eq!(outcome, AddOutcome::Discarded);
        assert!(session.list_secrets().await.unwrap().is_empty());
        assert_eq!(prompter.prompts, vec!["Discard entry? (y/n): "]);
    }

    #[tokio::test]
    async fn high_risk_kept_on_explicit_no() {
        let session = session().await;
        let mut prompter = ScriptedPrompter::new(&["N", "Tr0ub4dor&3xtra!"]);
        let outcome = add_entry(
            &session,
            &sentinel(0.7),
            &mut prompter,
            Some("http://risky.example".to_string()),
            Some("me".to_string()),
        )
        .await
        .unwrap();
        assert!(matches!(outcome, AddOutcome::Stored(_)));
    }

    #[tokio::test]
    async fn moderate_risk_only_warns() {
        let session = session().await;
        let mut prompter = ScriptedPrompter::new(&["Tr0ub4dor&3xtra!"]);
        let outcome = add_entry(
            &session,
            &sentinel(0.5),
            &mut prompter,
            Some("http://maybe.example".to_string()),
            Some("me".to_string()),
        )
        .await
        .unwrap();
        assert!(matches!(outcome, AddOutcome::Stored(_)));
        assert_eq!(prompter.prompts, vec!["Enter password: "]);
    }

    #[tokio::test]
    async fn weak_password_loops_until_strong_or_accepted() {
        let session = session().await;
        let mut prompter = ScriptedPrompter::new(&["weak", "n", "alsoweak", "y"]);
        let outcome = add_entry(
            &session,
            &sentinel(0.0),
            &mut prompter,
            Some("https://example.com".to_string()),
            Some("me".to_string()),
        )
        .await
        .unwrap();
        assert!(matches!(outcome, AddOutcome::Stored(_)));

        let listed = session.list_secrets().await.unwrap();
        assert_eq!(listed[0].password.as_ref().unwrap().expose_secret(), "alsoweak");
    }

    #[tokio::test]
    async fn closed_input_cancels_without_storing() {
        let session = session().await;
        let mut prompter = ScriptedPrompter::new(&["https://example.com"]);
        let outcome = add_entry(&session, &sentinel(0.0), &mut prompter, None, None)
            .await
            .unwrap();
        assert_eq!(outcome, AddOutcome::Cancelled);
        assert!(session.list_secrets().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn listing_counts_entries() {
        let session = session().await;
        assert_eq!(print_listing(&session, false).await.unwrap(), 0);
        session
            .add_secret("a", "b", &SecretString::from("c".to_string()))
            .await
            .unwrap();
        assert_eq!(print_listing(&session, true).await.unwrap(), 1);
    }

    #[test]
    fn check_password_requires_input() {
        let mut prompter = ScriptedPrompter::new(&[]);
        assert!(run_check_password(&mut prompter).is_err());
        let mut prompter = ScriptedPrompter::new(&["Tr0ub4dor&3xtra!"]);
        assert!(run_check_password(&mut prompter).is_ok());
    }
}
