// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits consumed by the settings orchestrator.
//!
//! Traits that may perform I/O use `#[async_trait]` for dynamic dispatch
//! compatibility; cheap lookups stay synchronous.

pub mod auth;
pub mod extension;
pub mod fingerprint;
pub mod plugin_info;
pub mod repository;

pub use auth::AuthorizationGate;
pub use extension::ExtensionProvider;
pub use fingerprint::FingerprintService;
pub use plugin_info::PluginInfoFinder;
pub use repository::SettingsRepository;
