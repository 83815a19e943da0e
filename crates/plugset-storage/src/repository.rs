// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the SettingsRepository trait.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use plugset_config::StorageConfig;
use plugset_core::{HealthStatus, PluginRecord, PlugsetError, SettingsRepository};

use crate::database::Database;
use crate::queries;

/// SQLite-backed settings repository.
///
/// Wraps a [`Database`] handle and delegates to the typed query module. The
/// database is lazily opened by [`SqliteSettingsRepository::initialize`].
pub struct SqliteSettingsRepository {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteSettingsRepository {
    /// Create a repository for the configured database.
    ///
    /// The database connection is not opened until [`initialize`](Self::initialize) is called.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Create and initialize in one step.
    pub async fn open(config: StorageConfig) -> Result<Self, PlugsetError> {
        let repository = Self::new(config);
        repository.initialize().await?;
        Ok(repository)
    }

    /// Returns a reference to the underlying Database, or an error if not initialized.
    fn db(&self) -> Result<&Database, PlugsetError> {
        self.db.get().ok_or_else(|| PlugsetError::Storage {
            source: "storage not initialized -- call initialize() first".into(),
        })
    }

    /// Open the database and run migrations.
    pub async fn initialize(&self) -> Result<(), PlugsetError> {
        let db = Database::open_with(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| PlugsetError::Storage {
            source: "storage already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite settings repository initialized");
        Ok(())
    }

    /// Checkpoint the WAL. The connection itself is released on drop.
    pub async fn close(&self) -> Result<(), PlugsetError> {
        self.db()?.checkpoint().await
    }

    pub async fn health_check(&self) -> Result<HealthStatus, PlugsetError> {
        let db = match self.db() {
            Ok(db) => db,
            Err(e) => return Ok(HealthStatus::Unhealthy(e.to_string())),
        };
        db.connection()
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(crate::database::map_tr_err)?;
        Ok(HealthStatus::Healthy)
    }

    /// Number of plugins with stored settings.
    pub async fn count(&self) -> Result<i64, PlugsetError> {
        queries::plugins::count_plugins(self.db()?).await
    }
}

#[async_trait]
impl SettingsRepository for SqliteSettingsRepository {
    async fn find_by_plugin_id(&self, plugin_id: &str) -> Result<Option<PluginRecord>, PlugsetError> {
        queries::plugins::find_plugin(self.db()?, plugin_id).await
    }

    async fn upsert(&self, record: PluginRecord) -> Result<PluginRecord, PlugsetError> {
        let saved = queries::plugins::save_plugin(self.db()?, record).await?;
        debug!(plugin_id = %saved.plugin_id, id = ?saved.id, "plugin settings record saved");
        Ok(saved)
    }
}
