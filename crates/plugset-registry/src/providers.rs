// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered set of extension providers and plugin ownership resolution.

use std::sync::Arc;

use plugset_core::{ExtensionKind, ExtensionProvider, PlugsetError};
use tracing::debug;

/// Extension providers in registration order.
///
/// Registration order is the tie-breaker for ownership: when two providers
/// claim the same plugin, the one registered first wins.
#[derive(Default, Clone)]
pub struct ExtensionSet {
    extensions: Vec<Arc<dyn ExtensionProvider>>,
}

impl ExtensionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider after every provider already registered.
    pub fn register(&mut self, extension: Arc<dyn ExtensionProvider>) {
        debug!(extension = %extension.extension_kind(), "registering extension provider");
        self.extensions.push(extension);
    }

    /// Builder form of [`ExtensionSet::register`].
    pub fn with(mut self, extension: Arc<dyn ExtensionProvider>) -> Self {
        self.register(extension);
        self
    }

    /// The first provider that owns `plugin_id`.
    pub fn resolve_owner(&self, plugin_id: &str) -> Result<&Arc<dyn ExtensionProvider>, PlugsetError> {
        self.extensions
            .iter()
            .find(|extension| extension.owns_plugin(plugin_id))
            .ok_or_else(|| PlugsetError::UnresolvedPlugin {
                plugin_id: plugin_id.to_string(),
            })
    }

    /// Every provider that owns `plugin_id`, in registration order.
    pub fn owners_of<'a>(
        &'a self,
        plugin_id: &'a str,
    ) -> impl Iterator<Item = &'a Arc<dyn ExtensionProvider>> + 'a {
        self.extensions
            .iter()
            .filter(move |extension| extension.owns_plugin(plugin_id))
    }

    /// Providers implementing `kind`, in registration order.
    pub fn by_kind(&self, kind: ExtensionKind) -> impl Iterator<Item = &Arc<dyn ExtensionProvider>> {
        self.extensions
            .iter()
            .filter(move |extension| extension.extension_kind() == kind)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arc<dyn ExtensionProvider>> {
        self.extensions.iter()
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl std::fmt::Debug for ExtensionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.extensions.iter().map(|e| e.extension_kind()))
            .finish()
    }
}
