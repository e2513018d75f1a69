// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Password hygiene checks for VaultGuard.
//!
//! Provides an additive, rule-based strength score used as an interactive
//! gate before a password is encrypted and stored.

pub mod strength;

pub use strength::{Deficiency, MAX_SCORE, STRONG_THRESHOLD, StrengthReport, evaluate};
