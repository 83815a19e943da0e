// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lookup of descriptive plugin information.

use crate::plugin_info::CombinedPluginInfo;

/// Supplies the per-extension-kind infos of a loaded plugin.
pub trait PluginInfoFinder: Send + Sync {
    /// Combined info for the plugin, or `None` if the plugin is unknown.
    fn plugin_info_for(&self, plugin_id: &str) -> Option<CombinedPluginInfo>;
}
