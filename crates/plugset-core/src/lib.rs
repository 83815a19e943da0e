// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Plugset plugin settings management.
//!
//! This crate provides the settings domain types, the error type, and the
//! collaborator traits (extension providers, repository, authorization,
//! fingerprinting, plugin info) that the settings orchestrator composes.

pub mod configuration;
pub mod error;
pub mod plugin_info;
pub mod record;
pub mod settings;
pub mod traits;
pub mod types;
pub mod validation;

// Re-export key items at crate root for ergonomic imports.
pub use configuration::{PluginSettingsConfiguration, PluginSettingsProperty, PropertyMetadata};
pub use error::{PlugsetError, STALE_RESOURCE_CONFIG, UNAUTHORIZED_TO_EDIT};
pub use plugin_info::{
    CombinedPluginInfo, PluggableInstanceSettings, PluginConfiguration, PluginDescriptor,
    PluginInfo,
};
pub use record::PluginRecord;
pub use settings::{SettingValue, Settings};
pub use types::{ExtensionKind, HealthStatus, Username};
pub use validation::{ValidationError, ValidationOutcome};

pub use traits::{
    AuthorizationGate, ExtensionProvider, FingerprintService, PluginInfoFinder,
    SettingsRepository,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_collaborator_traits_are_exported() {
        // Compiles only if every trait is reachable from the crate root.
        fn _assert_extension<T: ExtensionProvider>() {}
        fn _assert_repository<T: SettingsRepository>() {}
        fn _assert_gate<T: AuthorizationGate>() {}
        fn _assert_fingerprint<T: FingerprintService>() {}
        fn _assert_info_finder<T: PluginInfoFinder>() {}
    }

    #[test]
    fn collaborator_traits_are_object_safe() {
        fn _boxed(
            _: Box<dyn ExtensionProvider>,
            _: Box<dyn SettingsRepository>,
            _: Box<dyn AuthorizationGate>,
            _: Box<dyn FingerprintService>,
            _: Box<dyn PluginInfoFinder>,
        ) {
        }
    }
}
