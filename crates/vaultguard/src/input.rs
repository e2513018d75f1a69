// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line and hidden-secret input for the interactive commands.

use std::io::{BufRead, IsTerminal, Write};

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use secrecy::SecretString;
use vaultguard_core::VaultError;

/// Source of user answers. `None` means the input was closed (EOF or Ctrl+C).
pub trait Prompter {
    fn line(&mut self, prompt: &str) -> Result<Option<String>, VaultError>;

    /// Read a value that must not be echoed.
    fn secret(&mut self, prompt: &str) -> Result<Option<SecretString>, VaultError>;
}

/// Reads from the terminal via rustyline and rpassword, or plain stdin
/// lines when stdin is not a terminal.
pub struct TerminalPrompter {
    editor: Option<DefaultEditor>,
}

impl TerminalPrompter {
    pub fn new() -> Result<Self, VaultError> {
        let editor = if std::io::stdin().is_terminal() {
            Some(DefaultEditor::new().map_err(|e| {
                VaultError::Internal(format!("failed to initialize readline: {e}"))
            })?)
        } else {
            None
        };
        Ok(Self { editor })
    }

    fn read_stdin_line(prompt: &str) -> Result<Option<String>, VaultError> {
        print!("{prompt}");
        std::io::stdout().flush().ok();

        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| VaultError::Prompt(format!("failed to read input: {e}")))?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

impl Prompter for TerminalPrompter {
    fn line(&mut self, prompt: &str) -> Result<Option<String>, VaultError> {
        let Some(editor) = self.editor.as_mut() else {
            return Self::read_stdin_line(prompt);
        };
        match editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(e) => Err(VaultError::Prompt(format!("failed to read input: {e}"))),
        }
    }

    fn secret(&mut self, prompt: &str) -> Result<Option<SecretString>, VaultError> {
        if self.editor.is_some() {
            vaultguard_vault::read_hidden(prompt).map(Some)
        } else {
            Ok(Self::read_stdin_line(prompt)?.map(SecretString::from))
        }
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use std::collections::VecDeque;

    use super::*;

    /// Answers prompts from a fixed script, then reports closed input.
    pub struct ScriptedPrompter {
        answers: VecDeque<String>,
        pub prompts: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                prompts: Vec::new(),
            }
        }

        pub fn remaining(&self) -> usize {
            self.answers.len()
        }
    }

    impl Prompter for ScriptedPrompter {
        fn line(&mut self, prompt: &str) -> Result<Option<String>, VaultError> {
            self.prompts.push(prompt.to_string());
            Ok(self.answers.pop_front())
        }

        fn secret(&mut self, prompt: &str) -> Result<Option<SecretString>, VaultError> {
            Ok(self.line(prompt)?.map(SecretString::from))
        }
    }
}
