// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-plugin settings value and its three-state property values.
//!
//! A [`Settings`] is a transient view: it is built per request either from a
//! persisted [`PluginRecord`](crate::record::PluginRecord) or from caller input,
//! and it collects per-key validation errors reported by the owning extension.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::configuration::PluginSettingsConfiguration;
use crate::error::PlugsetError;
use crate::validation::ValidationOutcome;

/// A single settings value.
///
/// `Empty` and `Absent` are distinct and survive a store/load round trip:
/// `Empty` serializes as `""`, `Absent` as `null`. A `Present("")` is the
/// same value as `Empty`: it compares and hashes equal to it, and
/// [`SettingValue::present`] never builds one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum SettingValue {
    /// A non-empty string.
    Present(String),
    /// The empty string.
    Empty,
    /// No value (null).
    Absent,
}

impl SettingValue {
    /// A string value; the empty string becomes [`SettingValue::Empty`].
    pub fn present(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            SettingValue::Empty
        } else {
            SettingValue::Present(value)
        }
    }

    /// Borrow the value the way a nullable string would expose it.
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            SettingValue::Present(value) => Some(value),
            SettingValue::Empty => Some(""),
            SettingValue::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, SettingValue::Absent)
    }
}

impl PartialEq for SettingValue {
    fn eq(&self, other: &Self) -> bool {
        self.as_deref() == other.as_deref()
    }
}

impl Eq for SettingValue {}

impl Hash for SettingValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_deref().hash(state);
    }
}

impl Default for SettingValue {
    fn default() -> Self {
        SettingValue::Absent
    }
}

impl From<Option<String>> for SettingValue {
    fn from(value: Option<String>) -> Self {
        match value {
            None => SettingValue::Absent,
            Some(v) => SettingValue::present(v),
        }
    }
}

impl From<SettingValue> for Option<String> {
    fn from(value: SettingValue) -> Self {
        match value {
            SettingValue::Present(v) => Some(v),
            SettingValue::Empty => Some(String::new()),
            SettingValue::Absent => None,
        }
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Some(value).into()
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        value.to_string().into()
    }
}

impl From<Option<&str>> for SettingValue {
    fn from(value: Option<&str>) -> Self {
        value.map(str::to_string).into()
    }
}

/// Settings of one plugin plus the validation errors attached to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    plugin_id: String,
    values: BTreeMap<String, SettingValue>,
    errors: BTreeMap<String, Vec<String>>,
}

impl Settings {
    /// Empty settings for the given plugin.
    pub fn new(plugin_id: impl Into<String>) -> Self {
        Self {
            plugin_id: plugin_id.into(),
            values: BTreeMap::new(),
            errors: BTreeMap::new(),
        }
    }

    /// Builder form of [`Settings::populate_settings_map`].
    pub fn with_settings<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<SettingValue>,
    {
        self.populate_settings_map(entries);
        self
    }

    /// Insert every entry, replacing values of keys already present.
    pub fn populate_settings_map<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<SettingValue>,
    {
        for (key, value) in entries {
            self.values.insert(key.into(), value.into());
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<SettingValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn plugin_id(&self) -> &str {
        &self.plugin_id
    }

    /// Value stored for `key`, or `None` if the key is not part of these settings.
    pub fn value_for(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn values(&self) -> &BTreeMap<String, SettingValue> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Append an error message for `key`. Duplicates are kept.
    pub fn add_error(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(key.into()).or_default().push(message.into());
    }

    /// Merge every error of a validation outcome, in order.
    pub fn merge_validation(&mut self, outcome: &ValidationOutcome) {
        for error in outcome.errors() {
            self.add_error(error.key.clone(), error.message.clone());
        }
    }

    /// Error messages for `key`; empty when the key has none.
    pub fn error_for(&self, key: &str) -> &[String] {
        self.errors.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|messages| !messages.is_empty())
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Flattened key/value pairs handed to extensions on change notification.
    pub fn as_key_value_pairs(&self) -> BTreeMap<String, Option<String>> {
        self.values
            .iter()
            .map(|(key, value)| (key.clone(), value.clone().into()))
            .collect()
    }

    /// Configuration view over the declared keys of this plugin.
    ///
    /// Every declared property is listed in declaration order with its value
    /// taken from these settings, or `Absent` if not supplied. Without a
    /// declaration the view lists the supplied keys instead.
    pub fn to_configuration(
        &self,
        declared: Option<&PluginSettingsConfiguration>,
    ) -> PluginSettingsConfiguration {
        match declared {
            Some(declared) => declared.with_values(|key| self.values.get(key).cloned()),
            None => self
                .values
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        }
    }

    /// Serialize the settings map, encoding `Absent` as `null` and `Empty` as `""`.
    pub fn to_json(&self) -> Result<String, PlugsetError> {
        serde_json::to_string(&self.values).map_err(|source| PlugsetError::Serialization {
            plugin_id: self.plugin_id.clone(),
            source,
        })
    }

    /// Rebuild settings from a serialized map. `None` or blank input yields empty settings.
    pub fn from_json(plugin_id: impl Into<String>, json: Option<&str>) -> Result<Self, PlugsetError> {
        let mut settings = Settings::new(plugin_id);
        let Some(json) = json.filter(|j| !j.trim().is_empty()) else {
            return Ok(settings);
        };
        let values: Option<BTreeMap<String, SettingValue>> =
            serde_json::from_str(json).map_err(|source| PlugsetError::Serialization {
                plugin_id: settings.plugin_id.clone(),
                source,
            })?;
        settings.values = values.unwrap_or_default();
        Ok(settings)
    }
}
