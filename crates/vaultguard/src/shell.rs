// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `vaultguard shell` command implementation.
//!
//! Unlocks the vault once, then loops over a numbered menu until the user
//! exits or input closes.

use colored::Colorize;
use tracing::info;
use vaultguard_config::VaultGuardConfig;
use vaultguard_core::VaultError;

use crate::commands::{self, AddOutcome};
use crate::input::Prompter;

/// One menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    View,
    Exit,
}

fn parse_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::Add),
        "2" => Some(MenuChoice::View),
        "3" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// Runs the `vaultguard shell` interactive menu.
pub async fn run_shell(
    config: &VaultGuardConfig,
    prompter: &mut dyn Prompter,
) -> Result<(), VaultError> {
    println!("{}", "VAULTGUARD SYSTEM ACTIVE".bold().green());

    let (vault, store) = commands::open_vault(config).await?;
    let session = commands::unlock(&vault).await?;
    println!("{}\n", "Vault unlocked successfully.".green());

    let sentinel = commands::build_sentinel(config);
    info!(scorer = sentinel.has_scorer(), "shell session started");

    loop {
        println!("\n{}", "--- VAULT MENU ---".bold());
        println!("1. Add Secret");
        println!("2. View Secrets");
        println!("3. Exit");
        let Some(line) = prompter.line("Select action: ")? else {
            break;
        };

        match parse_choice(&line) {
            Some(MenuChoice::Add) => {
                match commands::add_entry(&session, &sentinel, prompter, None, None).await {
                    Ok(AddOutcome::Discarded) => println!("Entry discarded."),
                    Ok(AddOutcome::Stored(_)) => {}
                    Ok(AddOutcome::Cancelled) => break,
                    Err(e) => eprintln!("{}: {e}", "error".red()),
                }
            }
            Some(MenuChoice::View) => {
                if let Err(e) = commands::print_listing(&session, true).await {
                    eprintln!("{}: {e}", "error".red());
                }
            }
            Some(MenuChoice::Exit) => break,
            None => println!("{}", "Invalid option.".yellow()),
        }
    }

    session.lock();
    store.close().await?;
    println!("{}", "Vault closed. Stay secure.".dimmed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices() {
        assert_eq!(parse_choice("1"), Some(MenuChoice::Add));
        assert_eq!(parse_choice(" 2 "), Some(MenuChoice::View));
        assert_eq!(parse_choice("3"), Some(MenuChoice::Exit));
        assert_eq!(parse_choice("4"), None);
        assert_eq!(parse_choice(""), None);
        assert_eq!(parse_choice("exit"), None);
    }
}
