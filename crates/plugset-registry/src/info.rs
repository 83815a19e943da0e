// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process [`PluginInfoFinder`] fed at startup.

use dashmap::DashMap;
use plugset_core::{CombinedPluginInfo, PluginInfo, PluginInfoFinder};

/// Combined plugin infos keyed by plugin id.
#[derive(Debug, Default)]
pub struct StaticPluginInfoFinder {
    infos: DashMap<String, CombinedPluginInfo>,
}

impl StaticPluginInfoFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an extension-specific info, replacing any earlier info of the same kind.
    pub fn add(&self, info: PluginInfo) {
        self.infos
            .entry(info.descriptor.id.clone())
            .or_default()
            .add(info);
    }

    pub fn remove(&self, plugin_id: &str) -> bool {
        self.infos.remove(plugin_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.infos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }
}

impl PluginInfoFinder for StaticPluginInfoFinder {
    fn plugin_info_for(&self, plugin_id: &str) -> Option<CombinedPluginInfo> {
        self.infos.get(plugin_id).map(|combined| combined.clone())
    }
}

#[cfg(test)]
mod tests {
    use plugset_core::{ExtensionKind, PluginDescriptor};

    use super::*;

    #[test]
    fn infos_are_combined_per_plugin() {
        let finder = StaticPluginInfoFinder::new();
        finder.add(PluginInfo::new(PluginDescriptor::new("p", "1"), ExtensionKind::Scm));
        finder.add(PluginInfo::new(PluginDescriptor::new("p", "1"), ExtensionKind::Task));
        finder.add(PluginInfo::new(PluginDescriptor::new("q", "1"), ExtensionKind::Task));

        let combined = finder.plugin_info_for("p").unwrap();
        assert_eq!(
            combined.extension_kinds().collect::<Vec<_>>(),
            vec![ExtensionKind::Scm, ExtensionKind::Task]
        );
        assert_eq!(finder.len(), 2);
        assert!(finder.plugin_info_for("missing").is_none());

        assert!(finder.remove("q"));
        assert_eq!(finder.len(), 1);
    }
}
