// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declared plugin settings configuration.
//!
//! The same type serves as the declared schema held by the metadata registry
//! (values all `Absent`) and as the configuration view handed to an extension
//! for validation (values filled from the submitted settings).

use serde::{Deserialize, Serialize};

use crate::settings::SettingValue;

/// Flags attached to a declared settings property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyMetadata {
    /// The extension requires a value for this key.
    #[serde(default)]
    pub required: bool,
    /// The value is a secret and should not be echoed back.
    #[serde(default)]
    pub secure: bool,
}

/// One declared settings property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginSettingsProperty {
    pub key: String,
    #[serde(default)]
    pub value: SettingValue,
    #[serde(default)]
    pub metadata: PropertyMetadata,
}

impl PluginSettingsProperty {
    /// A property with no value and default metadata.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: SettingValue::Absent,
            metadata: PropertyMetadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: PropertyMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_value(mut self, value: impl Into<SettingValue>) -> Self {
        self.value = value.into();
        self
    }
}

/// Ordered list of settings properties with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginSettingsConfiguration {
    properties: Vec<PluginSettingsProperty>,
}

impl PluginSettingsConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a property. A property whose key is already present replaces the
    /// existing one in place, keeping the original position.
    pub fn add(&mut self, property: PluginSettingsProperty) {
        match self.properties.iter_mut().find(|p| p.key == property.key) {
            Some(existing) => *existing = property,
            None => self.properties.push(property),
        }
    }

    pub fn get(&self, key: &str) -> Option<&PluginSettingsProperty> {
        self.properties.iter().find(|p| p.key == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PluginSettingsProperty> {
        self.properties.iter()
    }

    /// Declared keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|p| p.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Copy of this configuration with each value looked up by key.
    /// Keys the lookup does not know become `Absent`.
    pub fn with_values<F>(&self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<SettingValue>,
    {
        self.properties
            .iter()
            .map(|p| PluginSettingsProperty {
                key: p.key.clone(),
                value: lookup(&p.key).unwrap_or_default(),
                metadata: p.metadata,
            })
            .collect()
    }
}

impl FromIterator<PluginSettingsProperty> for PluginSettingsConfiguration {
    fn from_iter<I: IntoIterator<Item = PluginSettingsProperty>>(iter: I) -> Self {
        let mut configuration = Self::new();
        for property in iter {
            configuration.add(property);
        }
        configuration
    }
}

impl FromIterator<(String, SettingValue)> for PluginSettingsConfiguration {
    fn from_iter<I: IntoIterator<Item = (String, SettingValue)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(key, value)| PluginSettingsProperty::new(key).with_value(value))
            .collect()
    }
}

impl<'a> IntoIterator for &'a PluginSettingsConfiguration {
    type Item = &'a PluginSettingsProperty;
    type IntoIter = std::slice::Iter<'a, PluginSettingsProperty>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}
