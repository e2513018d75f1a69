// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test doubles for VaultGuard engine tests.
//!
//! Provides in-memory collaborators so vault and sentinel tests run fast
//! and never touch disk.
//!
//! # Components
//!
//! - [`MemoryRecordStore`] - record store backed by a `Vec` and a `BTreeMap`
//! - [`MemorySaltStore`] - salt store holding an optional fixed salt
//! - [`FixedScorer`] - scorer returning a preset value and counting calls

pub mod memory_salt;
pub mod memory_store;
pub mod scorer;

pub use memory_salt::MemorySaltStore;
pub use memory_store::MemoryRecordStore;
pub use scorer::FixedScorer;
