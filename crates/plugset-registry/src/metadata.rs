// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declared plugin settings metadata, keyed by plugin id and extension kind.
//!
//! The registry is built once at startup (from manifests or by the plugin
//! lifecycle code) and then shared behind an `Arc`. Reads never need an
//! external lock; entries are cloned out so no map guard outlives a call.

use std::collections::HashMap;

use dashmap::DashMap;
use plugset_core::{ExtensionKind, PluginSettingsConfiguration};
use tracing::debug;

/// Declared settings of a plugin for one extension kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginSettingsMetadata {
    pub configuration: PluginSettingsConfiguration,
    pub template: Option<String>,
}

/// Thread-safe table of declared settings metadata.
///
/// A plugin may carry entries for several extension kinds; callers pick the
/// kind of the extension that currently owns the plugin.
#[derive(Debug, Default)]
pub struct MetadataRegistry {
    entries: DashMap<String, HashMap<ExtensionKind, PluginSettingsMetadata>>,
}

impl MetadataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the metadata of `plugin_id` for `kind`.
    ///
    /// A `None` configuration registers the kind with no declared keys.
    pub fn add_metadata_for(
        &self,
        plugin_id: &str,
        kind: ExtensionKind,
        configuration: Option<PluginSettingsConfiguration>,
        template: Option<String>,
    ) {
        let metadata = PluginSettingsMetadata {
            configuration: configuration.unwrap_or_default(),
            template,
        };
        debug!(
            plugin_id = %plugin_id,
            extension = %kind,
            keys = metadata.configuration.len(),
            "registering plugin settings metadata"
        );
        self.entries
            .entry(plugin_id.to_string())
            .or_default()
            .insert(kind, metadata);
    }

    /// Metadata registered for `plugin_id` under `kind`.
    pub fn lookup_for(&self, plugin_id: &str, kind: ExtensionKind) -> Option<PluginSettingsMetadata> {
        self.entries
            .get(plugin_id)
            .and_then(|kinds| kinds.get(&kind).cloned())
    }

    pub fn configuration_for(
        &self,
        plugin_id: &str,
        kind: ExtensionKind,
    ) -> Option<PluginSettingsConfiguration> {
        self.lookup_for(plugin_id, kind).map(|m| m.configuration)
    }

    pub fn template_for(&self, plugin_id: &str, kind: ExtensionKind) -> Option<String> {
        self.lookup_for(plugin_id, kind).and_then(|m| m.template)
    }

    /// Extension kinds with metadata for `plugin_id`, sorted.
    pub fn kinds_for(&self, plugin_id: &str) -> Vec<ExtensionKind> {
        let mut kinds: Vec<ExtensionKind> = self
            .entries
            .get(plugin_id)
            .map(|kinds| kinds.keys().copied().collect())
            .unwrap_or_default();
        kinds.sort();
        kinds
    }

    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.entries.contains_key(plugin_id)
    }

    /// Drop every entry of `plugin_id`. Returns whether anything was removed.
    pub fn remove_metadata_for(&self, plugin_id: &str) -> bool {
        let removed = self.entries.remove(plugin_id).is_some();
        if removed {
            debug!(plugin_id = %plugin_id, "removed plugin settings metadata");
        }
        removed
    }

    /// Remove everything.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of plugins with at least one entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
