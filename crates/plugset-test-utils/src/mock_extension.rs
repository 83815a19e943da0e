// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock extension provider for deterministic testing.
//!
//! `MockExtension` answers ownership from a configurable set of plugin ids,
//! returns scripted validation outcomes, and records every call so tests can
//! assert exactly which extension was asked what.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use plugset_core::{
    ExtensionKind, ExtensionProvider, PluginSettingsConfiguration, PlugsetError, ValidationOutcome,
};

/// What `notify_plugin_settings_change` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyBehaviour {
    #[default]
    Accept,
    Fail,
    Panic,
}

#[derive(Default)]
struct State {
    owned: HashSet<String>,
    outcomes: HashMap<String, ValidationOutcome>,
    failing_validation: HashSet<String>,
    notify: NotifyBehaviour,
    ownership_checks: Vec<String>,
    validations: Vec<(String, PluginSettingsConfiguration)>,
    notifications: Vec<(String, BTreeMap<String, Option<String>>)>,
}

/// Scriptable extension provider.
pub struct MockExtension {
    kind: ExtensionKind,
    state: Mutex<State>,
}

impl MockExtension {
    pub fn new(kind: ExtensionKind) -> Self {
        Self {
            kind,
            state: Mutex::new(State::default()),
        }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, State> {
        // A panicking notification may poison the lock; the data is still usable.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Claim ownership of `plugin_id`.
    pub fn owns(&self, plugin_id: &str) {
        self.state().owned.insert(plugin_id.to_string());
    }

    /// Return `outcome` when asked to validate `plugin_id`. Defaults to a clean outcome.
    pub fn validation_outcome(&self, plugin_id: &str, outcome: ValidationOutcome) {
        self.state().outcomes.insert(plugin_id.to_string(), outcome);
    }

    /// Fail with a provider error when asked to validate `plugin_id`.
    pub fn fail_validation(&self, plugin_id: &str) {
        self.state().failing_validation.insert(plugin_id.to_string());
    }

    pub fn notify_behaviour(&self, behaviour: NotifyBehaviour) {
        self.state().notify = behaviour;
    }

    /// Plugin ids passed to `owns_plugin`, in call order.
    pub fn ownership_checks(&self) -> Vec<String> {
        self.state().ownership_checks.clone()
    }

    /// Configuration views passed to `validate_plugin_settings`.
    pub fn validations(&self) -> Vec<(String, PluginSettingsConfiguration)> {
        self.state().validations.clone()
    }

    /// Key/value maps passed to `notify_plugin_settings_change`.
    pub fn notifications(&self) -> Vec<(String, BTreeMap<String, Option<String>>)> {
        self.state().notifications.clone()
    }

    pub fn validation_count(&self) -> usize {
        self.state().validations.len()
    }

    pub fn notification_count(&self) -> usize {
        self.state().notifications.len()
    }
}

#[async_trait]
impl ExtensionProvider for MockExtension {
    fn extension_kind(&self) -> ExtensionKind {
        self.kind
    }

    fn owns_plugin(&self, plugin_id: &str) -> bool {
        let mut state = self.state();
        state.ownership_checks.push(plugin_id.to_string());
        state.owned.contains(plugin_id)
    }

    async fn validate_plugin_settings(
        &self,
        plugin_id: &str,
        configuration: &PluginSettingsConfiguration,
    ) -> Result<ValidationOutcome, PlugsetError> {
        let mut state = self.state();
        state
            .validations
            .push((plugin_id.to_string(), configuration.clone()));
        if state.failing_validation.contains(plugin_id) {
            return Err(PlugsetError::Provider {
                message: format!("{} extension could not validate '{plugin_id}'", self.kind),
                source: None,
            });
        }
        Ok(state.outcomes.get(plugin_id).cloned().unwrap_or_default())
    }

    async fn notify_plugin_settings_change(
        &self,
        plugin_id: &str,
        settings: &BTreeMap<String, Option<String>>,
    ) -> Result<(), PlugsetError> {
        let behaviour = {
            let mut state = self.state();
            state
                .notifications
                .push((plugin_id.to_string(), settings.clone()));
            state.notify
        };
        match behaviour {
            NotifyBehaviour::Accept => Ok(()),
            NotifyBehaviour::Fail => Err(PlugsetError::Notification {
                plugin_id: plugin_id.to_string(),
                message: "mock extension refused the notification".to_string(),
            }),
            NotifyBehaviour::Panic => panic!("mock extension panicked during notification"),
        }
    }
}
