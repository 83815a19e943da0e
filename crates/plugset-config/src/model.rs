// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed configuration sections. Unknown keys are rejected at every level.

use serde::{Deserialize, Serialize};

/// Root of `plugset.toml`. Every section may be omitted.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlugsetConfig {
    pub storage: StorageConfig,
    pub security: SecurityConfig,
    pub metadata: MetadataConfig,
}

/// `[storage]`: where plugin settings records live.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// SQLite database file. Parent directories are created on open.
    pub database_path: String,
    /// Open the database in write-ahead-log journal mode.
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let database_path = match dirs::data_dir() {
            Some(dir) => dir.join("plugset").join("plugset.db").display().to_string(),
            None => "plugset.db".to_string(),
        };
        Self {
            database_path,
            wal_mode: true,
        }
    }
}

/// `[security]`: who may edit plugin settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SecurityConfig {
    /// With security off, every user counts as an administrator.
    pub enabled: bool,
    /// Administrator usernames, matched case-insensitively.
    pub administrators: Vec<String>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            administrators: Vec::new(),
        }
    }
}

/// `[metadata]`: where declared settings schemas are loaded from.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetadataConfig {
    /// Directory of `*.toml` plugin settings manifests.
    pub manifest_dir: Option<String>,
}
