// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed query modules for vault tables.

pub mod metadata;
pub mod secrets;
