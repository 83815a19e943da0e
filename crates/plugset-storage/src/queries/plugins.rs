// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin settings record operations.

use plugset_core::{PluginRecord, PlugsetError};
use rusqlite::params;

use crate::database::Database;

/// Get the record of a plugin by its plugin id.
pub async fn find_plugin(db: &Database, plugin_id: &str) -> Result<Option<PluginRecord>, PlugsetError> {
    let plugin_id = plugin_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt =
                conn.prepare("SELECT id, plugin_id, configuration FROM plugins WHERE plugin_id = ?1")?;
            let result = stmt.query_row(params![plugin_id], |row| {
                Ok(PluginRecord {
                    id: Some(row.get(0)?),
                    plugin_id: row.get(1)?,
                    configuration: row.get(2)?,
                })
            });
            match result {
                Ok(record) => Ok(Some(record)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Insert or update a record and return it with its surrogate id.
///
/// A record carrying an id updates that row in place. A record without one
/// is inserted; if another writer inserted the same plugin id first, that row
/// is updated instead so the plugin id stays unique.
pub async fn save_plugin(db: &Database, record: PluginRecord) -> Result<PluginRecord, PlugsetError> {
    db.connection()
        .call(move |conn| {
            let id = match record.id {
                Some(id) => {
                    let updated = conn.execute(
                        "UPDATE plugins
                         SET configuration = ?1,
                             updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                         WHERE id = ?2",
                        params![record.configuration, id],
                    )?;
                    if updated == 0 {
                        return Err(rusqlite::Error::QueryReturnedNoRows);
                    }
                    id
                }
                None => conn.query_row(
                    "INSERT INTO plugins (plugin_id, configuration) VALUES (?1, ?2)
                     ON CONFLICT(plugin_id) DO UPDATE SET
                         configuration = excluded.configuration,
                         updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                     RETURNING id",
                    params![record.plugin_id, record.configuration],
                    |row| row.get(0),
                )?,
            };
            Ok(record.with_id(id))
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Number of stored plugin records.
pub async fn count_plugins(db: &Database) -> Result<i64, PlugsetError> {
    db.connection()
        .call(|conn| -> Result<i64, rusqlite::Error> {
            conn.query_row("SELECT COUNT(*) FROM plugins", [], |row| row.get(0))
        })
        .await
        .map_err(crate::database::map_tr_err)
}
