// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! VaultGuard - a local secrets vault with phishing-aware entry.
//!
//! This is the binary entry point.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod commands;
mod input;
mod shell;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use vaultguard_config::VaultGuardConfig;
use vaultguard_core::VaultError;

use crate::input::TerminalPrompter;

/// VaultGuard - a local secrets vault with phishing-aware entry.
#[derive(Parser, Debug)]
#[command(name = "vaultguard", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the XDG hierarchy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Unlock the vault and open the interactive menu (default).
    Shell,
    /// Add one entry, prompting for anything not given.
    Add {
        #[arg(long)]
        site: Option<String>,
        #[arg(long)]
        user: Option<String>,
    },
    /// List stored entries with masked passwords.
    List {
        /// Print passwords in full.
        #[arg(long)]
        reveal: bool,
    },
    /// Score a URL without touching the vault.
    CheckUrl {
        url: String,
        /// Print the assessment as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Evaluate a password's strength without storing it.
    CheckPassword,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => vaultguard_config::load_and_validate_path(path),
        None => vaultguard_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            vaultguard_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.general.log_level);

    if let Err(e) = run(cli.command.unwrap_or(Commands::Shell), &config).await {
        match e {
            VaultError::AccessDenied => {
                eprintln!("{}", "Incorrect master password. Access denied.".red());
            }
            other => eprintln!("{}: {other}", "error".red()),
        }
        std::process::exit(1);
    }
}

async fn run(command: Commands, config: &VaultGuardConfig) -> Result<(), VaultError> {
    match command {
        Commands::Shell => {
            let mut prompter = TerminalPrompter::new()?;
            shell::run_shell(config, &mut prompter).await
        }
        Commands::Add { site, user } => {
            let mut prompter = TerminalPrompter::new()?;
            commands::run_add(config, &mut prompter, site, user).await
        }
        Commands::List { reveal } => commands::run_list(config, reveal).await,
        Commands::CheckUrl { url, json } => commands::run_check_url(config, &url, json),
        Commands::CheckPassword => {
            let mut prompter = TerminalPrompter::new()?;
            commands::run_check_password(&mut prompter)
        }
    }
}

/// Logs go to stderr so prompts and listings on stdout stay clean.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vaultguard={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}
