// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared, read-mostly lookup structures consulted by the settings orchestrator.
//!
//! - [`MetadataRegistry`] maps `(plugin id, extension kind)` to declared
//!   settings keys and an optional view template.
//! - [`ExtensionSet`] is the ordered list of extension providers used to
//!   resolve which extension owns a plugin.
//! - [`StaticPluginInfoFinder`] serves combined plugin info for the settings UI.
//! - [`manifest`] loads declared settings from `plugin.toml` files.

pub mod info;
pub mod manifest;
pub mod metadata;
pub mod providers;

pub use info::StaticPluginInfoFinder;
pub use manifest::{
    PluginSettingsManifest, load_manifest, load_manifest_dir, parse_manifest, register_manifests,
};
pub use metadata::{MetadataRegistry, PluginSettingsMetadata};
pub use providers::ExtensionSet;
