// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seam traits between the vault engine and its collaborators.
//!
//! Each collaborator is passed in explicitly at construction so tests can
//! substitute in-memory doubles.

pub mod salt;
pub mod scorer;
pub mod storage;

pub use salt::SaltStore;
pub use scorer::Scorer;
pub use storage::RecordStore;
