// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The settings orchestrator.

use std::sync::Arc;

use plugset_core::{
    AuthorizationGate, ExtensionProvider, FingerprintService, PluginInfo, PluginInfoFinder,
    PluginRecord, PluginSettingsConfiguration, PlugsetError, SettingsRepository, Settings,
    Username, ValidationOutcome,
};
use plugset_registry::{ExtensionSet, MetadataRegistry};
use tracing::{debug, info, warn};

use crate::notification::{NotificationOutcome, notify_settings_change};

/// Loads, validates and saves plugin settings on behalf of their owning extension.
///
/// Every collaborator is injected; the registry and extension set are shared
/// read-mostly structures and the orchestrator adds no locking of its own.
pub struct PluginSettingsService {
    extensions: Arc<ExtensionSet>,
    metadata: Arc<MetadataRegistry>,
    repository: Arc<dyn SettingsRepository>,
    gate: Arc<dyn AuthorizationGate>,
    fingerprints: Arc<dyn FingerprintService>,
    plugin_infos: Arc<dyn PluginInfoFinder>,
}

impl PluginSettingsService {
    pub fn new(
        extensions: Arc<ExtensionSet>,
        metadata: Arc<MetadataRegistry>,
        repository: Arc<dyn SettingsRepository>,
        gate: Arc<dyn AuthorizationGate>,
        fingerprints: Arc<dyn FingerprintService>,
        plugin_infos: Arc<dyn PluginInfoFinder>,
    ) -> Self {
        Self {
            extensions,
            metadata,
            repository,
            gate,
            fingerprints,
            plugin_infos,
        }
    }

    /// Stored settings of a plugin, or `None` if it was never saved.
    pub async fn load_stored_plugin_settings(
        &self,
        plugin_id: &str,
    ) -> Result<Option<Settings>, PlugsetError> {
        self.repository
            .find_by_plugin_id(plugin_id)
            .await?
            .map(|record| record.to_settings())
            .transpose()
    }

    /// Fingerprint of what is stored for `plugin_id`. A plugin that was never
    /// saved has the fingerprint of empty settings.
    pub async fn current_fingerprint(&self, plugin_id: &str) -> Result<String, PlugsetError> {
        let current = self
            .load_stored_plugin_settings(plugin_id)
            .await?
            .unwrap_or_else(|| Settings::new(plugin_id));
        Ok(self.fingerprints.fingerprint_of(&current))
    }

    /// Validate and save settings on behalf of `caller`.
    ///
    /// Fails with `Unauthorized` for non-administrators, `UnresolvedPlugin`
    /// when no extension owns the plugin, and `Validation` when the owner
    /// rejects the settings. In the last case the errors are also attached to
    /// `settings`. Nothing is persisted unless every check passes.
    pub async fn save_plugin_settings(
        &self,
        caller: &Username,
        settings: &mut Settings,
    ) -> Result<(), PlugsetError> {
        if !self.gate.is_administrator(caller) {
            warn!(user = %caller, plugin_id = %settings.plugin_id(), "rejected settings save: not an administrator");
            return Err(PlugsetError::Unauthorized {
                user: caller.to_string(),
            });
        }

        let owner = self.resolve_owner(settings.plugin_id())?;
        let outcome = self.validate_with(owner, settings).await?;
        if !outcome.is_successful() {
            warn!(
                plugin_id = %settings.plugin_id(),
                errors = outcome.len(),
                "rejected settings save: validation failed"
            );
            return Err(PlugsetError::Validation {
                plugin_id: settings.plugin_id().to_string(),
                errors: outcome,
            });
        }

        self.persist(settings).await?;
        self.notify(owner, settings).await;
        Ok(())
    }

    /// Like [`save_plugin_settings`](Self::save_plugin_settings), but first
    /// rejects the save with `Conflict` when `expected_fingerprint` does not
    /// match the stored settings. The fingerprint check runs before anything
    /// else.
    pub async fn update_plugin_settings(
        &self,
        caller: &Username,
        settings: &mut Settings,
        expected_fingerprint: &str,
    ) -> Result<(), PlugsetError> {
        let current = self.current_fingerprint(settings.plugin_id()).await?;
        if current != expected_fingerprint {
            warn!(
                plugin_id = %settings.plugin_id(),
                "rejected settings update: stale fingerprint"
            );
            return Err(PlugsetError::Conflict {
                plugin_id: settings.plugin_id().to_string(),
            });
        }

        self.save_plugin_settings(caller, settings).await
    }

    /// Persist settings without authorization or validation.
    ///
    /// For internal callers that are already authorized. The owner, when one
    /// resolves, is still notified.
    pub async fn save_plugin_settings_for(&self, settings: &Settings) -> Result<(), PlugsetError> {
        let owner = self.extensions.resolve_owner(settings.plugin_id()).ok();

        if let Some(owner) = owner {
            if let Some(declared) = self.declared_configuration(owner, settings.plugin_id()) {
                let undeclared: Vec<&str> = settings
                    .keys()
                    .filter(|key| declared.get(key).is_none())
                    .collect();
                if !undeclared.is_empty() {
                    debug!(
                        plugin_id = %settings.plugin_id(),
                        keys = ?undeclared,
                        "saving settings with undeclared keys"
                    );
                }
            }
        } else {
            debug!(plugin_id = %settings.plugin_id(), "saving settings for plugin without an owning extension");
        }

        self.persist(settings).await?;
        if let Some(owner) = owner {
            self.notify(owner, settings).await;
        }
        Ok(())
    }

    /// Ask the owning extension to validate `settings`, attaching every
    /// reported error to it.
    pub async fn validate_plugin_settings_for(
        &self,
        settings: &mut Settings,
    ) -> Result<(), PlugsetError> {
        let owner = self.resolve_owner(settings.plugin_id())?;
        self.validate_with(owner, settings).await?;
        Ok(())
    }

    /// Info of the first owning extension whose descriptor exposes a settings
    /// form and which has settings metadata registered for the plugin.
    pub fn provider_info_that_handles_settings(&self, plugin_id: &str) -> Option<PluginInfo> {
        let combined = self.plugin_infos.plugin_info_for(plugin_id)?;
        self.extensions.owners_of(plugin_id).find_map(|extension| {
            let kind = extension.extension_kind();
            if self.metadata.lookup_for(plugin_id, kind).is_none() {
                return None;
            }
            combined
                .extension_info(kind)
                .filter(|info| info.handles_settings())
                .cloned()
        })
    }

    /// View template registered for the plugin under its owning extension.
    pub fn settings_template_for(&self, plugin_id: &str) -> Option<String> {
        let owner = self.extensions.resolve_owner(plugin_id).ok()?;
        self.metadata.template_for(plugin_id, owner.extension_kind())
    }

    fn resolve_owner(&self, plugin_id: &str) -> Result<&Arc<dyn ExtensionProvider>, PlugsetError> {
        match self.extensions.resolve_owner(plugin_id) {
            Ok(owner) => {
                debug!(plugin_id = %plugin_id, extension = %owner.extension_kind(), "resolved owning extension");
                Ok(owner)
            }
            Err(e) => {
                warn!(plugin_id = %plugin_id, "no extension owns plugin");
                Err(e)
            }
        }
    }

    fn declared_configuration(
        &self,
        owner: &Arc<dyn ExtensionProvider>,
        plugin_id: &str,
    ) -> Option<PluginSettingsConfiguration> {
        self.metadata
            .configuration_for(plugin_id, owner.extension_kind())
    }

    async fn validate_with(
        &self,
        owner: &Arc<dyn ExtensionProvider>,
        settings: &mut Settings,
    ) -> Result<ValidationOutcome, PlugsetError> {
        let declared = self.declared_configuration(owner, settings.plugin_id());
        let view = settings.to_configuration(declared.as_ref());
        let outcome = owner
            .validate_plugin_settings(settings.plugin_id(), &view)
            .await?;
        settings.merge_validation(&outcome);
        Ok(outcome)
    }

    async fn persist(&self, settings: &Settings) -> Result<PluginRecord, PlugsetError> {
        let record = match self.repository.find_by_plugin_id(settings.plugin_id()).await? {
            Some(mut existing) => {
                existing.overwrite_with(settings)?;
                existing
            }
            None => PluginRecord::from_settings(settings)?,
        };
        let saved = self.repository.upsert(record).await?;
        info!(plugin_id = %saved.plugin_id, id = ?saved.id, "plugin settings saved");
        Ok(saved)
    }

    async fn notify(&self, owner: &Arc<dyn ExtensionProvider>, settings: &Settings) {
        if let NotificationOutcome::Failed(error) = notify_settings_change(owner, settings).await {
            warn!(
                plugin_id = %settings.plugin_id(),
                extension = %owner.extension_kind(),
                error = %error,
                "ignoring failure while notifying plugin of settings change"
            );
        }
    }
}
