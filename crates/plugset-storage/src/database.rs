// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Opening, tuning and closing the settings database.
//!
//! One [`Database`] owns the only connection; every statement goes through it.

use std::path::Path;
use std::time::Duration;

use plugset_core::PlugsetError;
use tracing::debug;

use crate::migrations::run_migrations;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Convert a tokio-rusqlite error into a storage error.
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error<rusqlite::Error>) -> PlugsetError {
    PlugsetError::storage(e)
}

/// Unwrap errors produced inside a connection closure that already speaks `PlugsetError`.
fn flatten_err(e: tokio_rusqlite::Error<PlugsetError>) -> PlugsetError {
    match e {
        tokio_rusqlite::Error::Error(inner) => inner,
        other => PlugsetError::storage(other),
    }
}

/// An open, migrated SQLite database.
pub struct Database {
    conn: tokio_rusqlite::Connection,
    path: String,
}

impl Database {
    /// Open (creating if needed) the database at `path` in WAL mode and run migrations.
    pub async fn open(path: &str) -> Result<Self, PlugsetError> {
        Self::open_with(path, true).await
    }

    /// Open the database, choosing whether to enable WAL journaling.
    pub async fn open_with(path: &str, wal_mode: bool) -> Result<Self, PlugsetError> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(PlugsetError::storage)?;
            }
        }

        let conn = tokio_rusqlite::Connection::open(path)
            .await
            .map_err(PlugsetError::storage)?;

        conn.call(move |conn| -> Result<(), PlugsetError> {
            let journal = if wal_mode { "WAL" } else { "DELETE" };
            conn.pragma_update_and_check(None, "journal_mode", journal, |row| {
                row.get::<_, String>(0)
            })
            .map_err(PlugsetError::storage)?;
            conn.execute_batch("PRAGMA synchronous = NORMAL; PRAGMA foreign_keys = ON;")
                .map_err(PlugsetError::storage)?;
            conn.busy_timeout(BUSY_TIMEOUT)
                .map_err(PlugsetError::storage)?;
            run_migrations(conn)
        })
        .await
        .map_err(flatten_err)?;

        debug!(path = %path, wal_mode, "database opened and migrated");
        Ok(Self {
            conn,
            path: path.to_string(),
        })
    }

    /// The single shared connection; every query goes through its background thread.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Flush the WAL into the main database file.
    pub async fn checkpoint(&self) -> Result<(), PlugsetError> {
        self.conn
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        debug!(path = %self.path, "WAL checkpoint complete");
        Ok(())
    }

    /// Checkpoint and close the connection.
    pub async fn close(self) -> Result<(), PlugsetError> {
        self.checkpoint().await?;
        self.conn.close().await.map_err(PlugsetError::storage)?;
        debug!(path = %self.path, "database closed");
        Ok(())
    }
}
