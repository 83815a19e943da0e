// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extension provider trait implemented by every pluggable integration point.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::configuration::PluginSettingsConfiguration;
use crate::error::PlugsetError;
use crate::types::ExtensionKind;
use crate::validation::ValidationOutcome;

/// A registered extension (SCM, package repository, task, ...).
///
/// At most one extension is expected to claim ownership of any given plugin
/// for settings purposes. The owning extension validates the plugin's
/// settings and is told when they change.
#[async_trait]
pub trait ExtensionProvider: Send + Sync + 'static {
    /// The extension point this provider implements.
    fn extension_kind(&self) -> ExtensionKind;

    /// Whether this extension handles the plugin with the given id.
    fn owns_plugin(&self, plugin_id: &str) -> bool;

    /// Validate a configuration view of the plugin's settings.
    ///
    /// The returned outcome holds every error the plugin reported; an `Err`
    /// means the plugin could not be asked at all.
    async fn validate_plugin_settings(
        &self,
        plugin_id: &str,
        configuration: &PluginSettingsConfiguration,
    ) -> Result<ValidationOutcome, PlugsetError>;

    /// Tell the plugin that its settings changed.
    async fn notify_plugin_settings_change(
        &self,
        plugin_id: &str,
        settings: &BTreeMap<String, Option<String>>,
    ) -> Result<(), PlugsetError>;
}
