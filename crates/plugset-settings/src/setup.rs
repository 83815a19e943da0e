// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Startup population of the shared registries from `[metadata]`.

use std::path::Path;

use plugset_config::MetadataConfig;
use plugset_core::PlugsetError;
use plugset_registry::{MetadataRegistry, StaticPluginInfoFinder, load_manifest_dir, register_manifests};
use tracing::debug;

/// Register every manifest in the configured `manifest_dir`.
///
/// Returns the number of manifests registered; zero when no directory is
/// configured. A missing or unreadable directory is an error.
pub fn load_configured_metadata(
    config: &MetadataConfig,
    metadata: &MetadataRegistry,
    plugin_infos: &StaticPluginInfoFinder,
) -> Result<usize, PlugsetError> {
    let Some(dir) = config.manifest_dir.as_deref() else {
        debug!("no manifest directory configured");
        return Ok(0);
    };
    let manifests = load_manifest_dir(Path::new(dir))?;
    register_manifests(&manifests, metadata, plugin_infos);
    Ok(manifests.len())
}
