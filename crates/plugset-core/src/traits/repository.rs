// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistence boundary for plugin settings records.

use async_trait::async_trait;

use crate::error::PlugsetError;
use crate::record::PluginRecord;

/// Stores [`PluginRecord`]s keyed by plugin id.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Find the record of a plugin, if one was ever saved.
    async fn find_by_plugin_id(&self, plugin_id: &str) -> Result<Option<PluginRecord>, PlugsetError>;

    /// Insert a record without a surrogate id, or update the record with the
    /// given id. Returns the stored record with its id assigned. Atomicity of
    /// the write is the repository's responsibility.
    async fn upsert(&self, record: PluginRecord) -> Result<PluginRecord, PlugsetError>;
}
