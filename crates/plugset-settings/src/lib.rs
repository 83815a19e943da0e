// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin settings orchestration.
//!
//! [`PluginSettingsService`] resolves which extension owns a plugin, checks
//! the caller and the caller's fingerprint, asks the owning extension to
//! validate, persists the result and finally tells the extension about the
//! change. Notification failures are logged and never fail a save.

pub mod auth;
pub mod fingerprint;
pub mod notification;
pub mod result;
pub mod service;
pub mod setup;

pub use auth::AdministratorGate;
pub use fingerprint::ContentFingerprinter;
pub use notification::NotificationOutcome;
pub use result::OperationResult;
pub use service::PluginSettingsService;
pub use setup::load_configured_metadata;
