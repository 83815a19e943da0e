// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The persisted form of a plugin's settings.

use serde::{Deserialize, Serialize};

use crate::error::PlugsetError;
use crate::settings::Settings;

/// A stored plugin settings row.
///
/// `id` is the storage-assigned surrogate key: `None` until the record has
/// been inserted, then preserved across every later update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRecord {
    pub id: Option<i64>,
    pub plugin_id: String,
    /// Serialized settings map (see [`Settings::to_json`]).
    pub configuration: Option<String>,
}

impl PluginRecord {
    /// A record that has never been persisted.
    pub fn new(plugin_id: impl Into<String>, configuration: Option<String>) -> Self {
        Self {
            id: None,
            plugin_id: plugin_id.into(),
            configuration,
        }
    }

    /// New unsaved record holding the serialized form of `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self, PlugsetError> {
        Ok(Self::new(settings.plugin_id(), Some(settings.to_json()?)))
    }

    /// Overwrite the stored configuration with `settings`, keeping the surrogate id.
    pub fn overwrite_with(&mut self, settings: &Settings) -> Result<(), PlugsetError> {
        self.configuration = Some(settings.to_json()?);
        Ok(())
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Deserialize the stored configuration back into settings.
    pub fn to_settings(&self) -> Result<Settings, PlugsetError> {
        Settings::from_json(self.plugin_id.clone(), self.configuration.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingValue;

    #[test]
    fn from_settings_has_no_surrogate_id() {
        let settings = Settings::new("plugin-id-2").with_settings([("p2-k1", "v1")]);
        let record = PluginRecord::from_settings(&settings).unwrap();

        assert_eq!(record.id, None);
        assert_eq!(record.plugin_id, "plugin-id-2");
        assert_eq!(record.configuration.as_deref(), Some(r#"{"p2-k1":"v1"}"#));
    }

    #[test]
    fn overwrite_preserves_surrogate_id() {
        let mut record = PluginRecord::new("plugin-id-1", Some("{}".into())).with_id(1);
        let settings = Settings::new("plugin-id-1").with_settings([
            ("p1-k1", Some("v1")),
            ("p1-k2", Some("v2")),
            ("p1-k3", None),
        ]);

        record.overwrite_with(&settings).unwrap();

        assert_eq!(record.id, Some(1));
        assert_eq!(
            record.configuration.as_deref(),
            Some(r#"{"p1-k1":"v1","p1-k2":"v2","p1-k3":null}"#)
        );
    }

    #[test]
    fn to_settings_restores_values() {
        let record = PluginRecord::new("p", Some(r#"{"a":"","b":null}"#.into()));
        let settings = record.to_settings().unwrap();

        assert_eq!(settings.plugin_id(), "p");
        assert_eq!(settings.value_for("a"), Some(&SettingValue::Empty));
        assert_eq!(settings.value_for("b"), Some(&SettingValue::Absent));
    }

    #[test]
    fn record_without_configuration_loads_empty_settings() {
        let record = PluginRecord::new("p", None);
        assert!(record.to_settings().unwrap().is_empty());
    }
}
