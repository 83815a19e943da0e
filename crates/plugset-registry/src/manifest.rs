// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin settings manifests parsed from `plugin.toml` files.
//!
//! A manifest declares the settings keys one extension kind exposes for a
//! plugin:
//!
//! ```toml
//! [plugin]
//! id = "github.pr"
//! extension = "scm"
//! version = "1.2.0"
//! name = "GitHub pull requests"
//! template = "<div>...</div>"
//!
//! [[plugin.settings]]
//! key = "url"
//! required = true
//!
//! [[plugin.settings]]
//! key = "token"
//! secure = true
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use plugset_core::{
    ExtensionKind, PluggableInstanceSettings, PlugsetError, PluginConfiguration, PluginDescriptor,
    PluginInfo, PluginSettingsConfiguration, PluginSettingsProperty, PropertyMetadata,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::info::StaticPluginInfoFinder;
use crate::metadata::MetadataRegistry;

/// Parsed and validated settings manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginSettingsManifest {
    pub id: String,
    pub extension: ExtensionKind,
    pub version: Option<semver::Version>,
    pub display_name: Option<String>,
    pub template: Option<String>,
    pub settings: PluginSettingsConfiguration,
}

impl PluginSettingsManifest {
    /// Info advertised for this plugin by its extension kind.
    pub fn to_plugin_info(&self) -> PluginInfo {
        let version = self
            .version
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        let configurations = self
            .settings
            .iter()
            .map(|p| PluginConfiguration::new(p.key.clone(), p.metadata))
            .collect();

        let mut info = PluginInfo::new(PluginDescriptor::new(&self.id, version), self.extension)
            .with_plugin_settings(PluggableInstanceSettings {
                configurations,
                view_template: self.template.clone(),
            });
        if let Some(name) = &self.display_name {
            info = info.with_display_name(name);
        }
        info
    }

    /// Record the declared keys and template in `registry`.
    pub fn register(&self, registry: &MetadataRegistry) {
        registry.add_metadata_for(
            &self.id,
            self.extension,
            Some(self.settings.clone()),
            self.template.clone(),
        );
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    plugin: PluginSection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PluginSection {
    id: String,
    extension: String,
    version: Option<String>,
    name: Option<String>,
    template: Option<String>,
    #[serde(default)]
    settings: Vec<SettingSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingSection {
    key: String,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    secure: bool,
}

fn manifest_error(message: impl Into<String>) -> PlugsetError {
    PlugsetError::Config(format!("plugin manifest: {}", message.into()))
}

/// Parse a settings manifest from TOML content.
///
/// Rejects an empty id, an unknown extension kind, an invalid version, and
/// empty or repeated setting keys.
pub fn parse_manifest(toml_content: &str) -> Result<PluginSettingsManifest, PlugsetError> {
    let file: ManifestFile = toml::from_str(toml_content)
        .map_err(|e| PlugsetError::Config(format!("invalid plugin manifest: {e}")))?;
    let section = file.plugin;

    if section.id.trim().is_empty() {
        return Err(manifest_error("id must not be empty"));
    }

    let extension = ExtensionKind::from_str(&section.extension).map_err(|_| {
        manifest_error(format!(
            "unknown extension '{}'. Expected one of: package-repository, scm, task, notification, configrepo",
            section.extension
        ))
    })?;

    let version = section
        .version
        .as_deref()
        .map(semver::Version::parse)
        .transpose()
        .map_err(|e| manifest_error(format!("invalid version for '{}': {e}", section.id)))?;

    let mut seen = HashSet::new();
    let mut settings = PluginSettingsConfiguration::new();
    for setting in section.settings {
        if setting.key.trim().is_empty() {
            return Err(manifest_error(format!(
                "setting key of '{}' must not be empty",
                section.id
            )));
        }
        if !seen.insert(setting.key.clone()) {
            return Err(manifest_error(format!(
                "duplicate setting key '{}' in '{}'",
                setting.key, section.id
            )));
        }
        settings.add(PluginSettingsProperty::new(setting.key).with_metadata(PropertyMetadata {
            required: setting.required,
            secure: setting.secure,
        }));
    }

    Ok(PluginSettingsManifest {
        id: section.id,
        extension,
        version,
        display_name: section.name,
        template: section.template,
        settings,
    })
}

/// Read and parse a single manifest file.
pub fn load_manifest(path: &Path) -> Result<PluginSettingsManifest, PlugsetError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        PlugsetError::Config(format!(
            "failed to read manifest file '{}': {e}",
            path.display()
        ))
    })?;
    parse_manifest(&content).map_err(|e| match e {
        PlugsetError::Config(message) => {
            PlugsetError::Config(format!("{}: {message}", path.display()))
        }
        other => other,
    })
}

/// Load every `*.toml` manifest in `dir`, ordered by file name.
pub fn load_manifest_dir(dir: &Path) -> Result<Vec<PluginSettingsManifest>, PlugsetError> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        PlugsetError::Config(format!(
            "failed to read manifest directory '{}': {e}",
            dir.display()
        ))
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| PlugsetError::Config(format!("failed to list '{}': {e}", dir.display())))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
            paths.push(path);
        }
    }
    paths.sort();

    let manifests = paths
        .iter()
        .map(|path| {
            debug!(path = %path.display(), "loading plugin settings manifest");
            load_manifest(path)
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        dir = %dir.display(),
        count = manifests.len(),
        "loaded plugin settings manifests"
    );
    Ok(manifests)
}

/// Register manifests into the metadata registry and the plugin info finder.
pub fn register_manifests(
    manifests: &[PluginSettingsManifest],
    registry: &MetadataRegistry,
    finder: &StaticPluginInfoFinder,
) {
    for manifest in manifests {
        manifest.register(registry);
        finder.add(manifest.to_plugin_info());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GITHUB: &str = r#"
[plugin]
id = "github.pr"
extension = "scm"
version = "1.2.0"
name = "GitHub pull requests"
template = "<div>github</div>"

[[plugin.settings]]
key = "url"
required = true

[[plugin.settings]]
key = "token"
required = true
secure = true

[[plugin.settings]]
key = "org"
"#;

    #[test]
    fn parse_valid_manifest() {
        let manifest = parse_manifest(GITHUB).unwrap();
        assert_eq!(manifest.id, "github.pr");
        assert_eq!(manifest.extension, ExtensionKind::Scm);
        assert_eq!(manifest.version, Some(semver::Version::new(1, 2, 0)));
        assert_eq!(manifest.display_name.as_deref(), Some("GitHub pull requests"));
        assert_eq!(
            manifest.settings.keys().collect::<Vec<_>>(),
            vec!["url", "token", "org"]
        );
        let token = manifest.settings.get("token").unwrap();
        assert!(token.metadata.required && token.metadata.secure);
        assert!(!manifest.settings.get("org").unwrap().metadata.required);
    }

    #[test]
    fn parse_minimal_manifest() {
        let manifest = parse_manifest(
            r#"
[plugin]
id = "email"
extension = "notification"
"#,
        )
        .unwrap();
        assert_eq!(manifest.extension, ExtensionKind::Notification);
        assert!(manifest.settings.is_empty());
        assert!(manifest.version.is_none());
        assert!(!manifest.to_plugin_info().handles_settings());
    }

    #[test]
    fn parse_unknown_extension_fails() {
        let err = parse_manifest(
            r#"
[plugin]
id = "x"
extension = "deployment"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown extension 'deployment'"));
    }

    #[test]
    fn parse_empty_id_fails() {
        let err = parse_manifest(
            r#"
[plugin]
id = ""
extension = "task"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("id must not be empty"));
    }

    #[test]
    fn parse_duplicate_key_fails() {
        let err = parse_manifest(
            r#"
[plugin]
id = "x"
extension = "task"

[[plugin.settings]]
key = "a"

[[plugin.settings]]
key = "a"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate setting key 'a'"));
    }

    #[test]
    fn parse_invalid_version_fails() {
        let err = parse_manifest(
            r#"
[plugin]
id = "x"
extension = "task"
version = "one"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid version"));
    }

    #[test]
    fn plugin_info_carries_declared_settings() {
        let info = parse_manifest(GITHUB).unwrap().to_plugin_info();
        assert_eq!(info.extension_kind, ExtensionKind::Scm);
        assert_eq!(info.descriptor.version, "1.2.0");
        assert!(info.handles_settings());
        let settings = info.plugin_settings.unwrap();
        assert_eq!(settings.configurations.len(), 3);
        assert_eq!(settings.view_template.as_deref(), Some("<div>github</div>"));
    }

    #[test]
    fn register_fills_registry_and_finder() {
        use plugset_core::PluginInfoFinder;

        let registry = MetadataRegistry::new();
        let finder = StaticPluginInfoFinder::new();
        register_manifests(&[parse_manifest(GITHUB).unwrap()], &registry, &finder);

        assert_eq!(
            registry.template_for("github.pr", ExtensionKind::Scm).as_deref(),
            Some("<div>github</div>")
        );
        assert!(finder.plugin_info_for("github.pr").is_some());
    }
}
