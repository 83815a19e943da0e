// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Descriptive plugin information exposed by extensions, used to decide which
//! extension renders the settings UI of a plugin.

use serde::{Deserialize, Serialize};

use crate::configuration::PropertyMetadata;
use crate::types::ExtensionKind;

/// Static description of a loaded plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub id: String,
    pub version: String,
    pub bundled: bool,
}

impl PluginDescriptor {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            bundled: false,
        }
    }
}

/// A configuration key advertised by an extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfiguration {
    pub key: String,
    #[serde(default)]
    pub metadata: PropertyMetadata,
}

impl PluginConfiguration {
    pub fn new(key: impl Into<String>, metadata: PropertyMetadata) -> Self {
        Self {
            key: key.into(),
            metadata,
        }
    }
}

/// Settings form exposed by an extension: configuration keys plus an optional view template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluggableInstanceSettings {
    #[serde(default)]
    pub configurations: Vec<PluginConfiguration>,
    #[serde(default)]
    pub view_template: Option<String>,
}

impl PluggableInstanceSettings {
    pub fn new(configurations: Vec<PluginConfiguration>) -> Self {
        Self {
            configurations,
            view_template: None,
        }
    }

    /// True when at least one configuration key is declared.
    pub fn declares_settings(&self) -> bool {
        !self.configurations.is_empty()
    }
}

/// Information about a plugin as seen by one extension kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    pub descriptor: PluginDescriptor,
    pub extension_kind: ExtensionKind,
    #[serde(default)]
    pub display_name: Option<String>,
    /// Plugin-level settings form, if the extension exposes one.
    #[serde(default)]
    pub plugin_settings: Option<PluggableInstanceSettings>,
}

impl PluginInfo {
    pub fn new(descriptor: PluginDescriptor, extension_kind: ExtensionKind) -> Self {
        Self {
            descriptor,
            extension_kind,
            display_name: None,
            plugin_settings: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_plugin_settings(mut self, settings: PluggableInstanceSettings) -> Self {
        self.plugin_settings = Some(settings);
        self
    }

    /// True when this extension declares a non-empty plugin settings form.
    pub fn handles_settings(&self) -> bool {
        self.plugin_settings
            .as_ref()
            .is_some_and(PluggableInstanceSettings::declares_settings)
    }
}

/// All per-extension-kind infos of one plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedPluginInfo {
    infos: Vec<PluginInfo>,
}

impl CombinedPluginInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an info, replacing any previous info of the same extension kind.
    pub fn add(&mut self, info: PluginInfo) {
        self.infos.retain(|existing| existing.extension_kind != info.extension_kind);
        self.infos.push(info);
    }

    pub fn extension_info(&self, kind: ExtensionKind) -> Option<&PluginInfo> {
        self.infos.iter().find(|info| info.extension_kind == kind)
    }

    pub fn extension_kinds(&self) -> impl Iterator<Item = ExtensionKind> + '_ {
        self.infos.iter().map(|info| info.extension_kind)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PluginInfo> {
        self.infos.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }
}

impl FromIterator<PluginInfo> for CombinedPluginInfo {
    fn from_iter<I: IntoIterator<Item = PluginInfo>>(iter: I) -> Self {
        let mut combined = Self::new();
        for info in iter {
            combined.add(info);
        }
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> PluginDescriptor {
        PluginDescriptor::new("plugin-id-1", "1")
    }

    #[test]
    fn info_without_settings_does_not_handle_settings() {
        let info = PluginInfo::new(descriptor(), ExtensionKind::Notification);
        assert!(!info.handles_settings());

        let empty = PluginInfo::new(descriptor(), ExtensionKind::Scm)
            .with_plugin_settings(PluggableInstanceSettings::new(vec![]));
        assert!(!empty.handles_settings());
    }

    #[test]
    fn info_with_configuration_handles_settings() {
        let info = PluginInfo::new(descriptor(), ExtensionKind::Scm).with_plugin_settings(
            PluggableInstanceSettings::new(vec![PluginConfiguration::new(
                "key",
                PropertyMetadata::default(),
            )]),
        );
        assert!(info.handles_settings());
    }

    #[test]
    fn combined_info_is_indexed_by_kind() {
        let combined: CombinedPluginInfo = vec![
            PluginInfo::new(descriptor(), ExtensionKind::Notification),
            PluginInfo::new(descriptor(), ExtensionKind::Scm).with_display_name("first"),
            PluginInfo::new(descriptor(), ExtensionKind::Scm).with_display_name("second"),
        ]
        .into_iter()
        .collect();

        assert_eq!(combined.iter().count(), 2);
        assert_eq!(
            combined
                .extension_info(ExtensionKind::Scm)
                .and_then(|i| i.display_name.as_deref()),
            Some("second")
        );
        assert!(combined.extension_info(ExtensionKind::Task).is_none());
    }
}
