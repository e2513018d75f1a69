// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Embedded database migrations using refinery.
//!
//! SQL migration files are compiled into the binary at build time via
//! `embed_migrations!`.

use vaultguard_core::VaultError;

use crate::database::Database;

mod embedded {
    use refinery::embed_migrations;
    embed_migrations!("migrations");
}

/// Run all pending migrations against the given connection.
///
/// Refinery tracks applied migrations in its own `refinery_schema_history` table,
/// so running this on an up-to-date database is a no-op.
pub fn run_migrations(conn: &mut rusqlite::Connection) -> Result<usize, refinery::Error> {
    let report = embedded::migrations::runner().run(conn)?;
    Ok(report.applied_migrations().len())
}

/// Run migrations on the database's writer thread.
pub async fn migrate(db: &Database) -> Result<usize, VaultError> {
    db.connection()
        .call(|conn| run_migrations(conn))
        .await
        .map_err(|e| VaultError::Storage {
            source: format!("migration failed: {e}").into(),
        })
}
