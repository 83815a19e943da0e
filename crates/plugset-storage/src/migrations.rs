// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schema migrations, compiled in from `migrations/*.sql`.

use plugset_core::PlugsetError;

mod embedded {
    refinery::embed_migrations!("migrations");
}

/// Bring the schema up to date. Already-applied versions are skipped.
pub fn run_migrations(conn: &mut rusqlite::Connection) -> Result<(), PlugsetError> {
    let report = embedded::migrations::runner()
        .run(conn)
        .map_err(PlugsetError::storage)?;
    for migration in report.applied_migrations() {
        tracing::debug!(version = migration.version(), name = migration.name(), "applied migration");
    }
    Ok(())
}
