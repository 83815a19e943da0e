// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outcome of telling an extension that its plugin's settings changed.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use plugset_core::{ExtensionProvider, PlugsetError, Settings};

/// Result of a change notification. The orchestrator logs `Failed` and
/// carries on; a notification never changes the outcome of a save.
#[derive(Debug)]
pub enum NotificationOutcome {
    Delivered,
    Failed(PlugsetError),
}

impl NotificationOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, NotificationOutcome::Delivered)
    }
}

/// Notify `extension` of `settings`, turning errors and panics into `Failed`.
pub async fn notify_settings_change(
    extension: &Arc<dyn ExtensionProvider>,
    settings: &Settings,
) -> NotificationOutcome {
    let pairs = settings.as_key_value_pairs();
    let call = extension.notify_plugin_settings_change(settings.plugin_id(), &pairs);

    match AssertUnwindSafe(call).catch_unwind().await {
        Ok(Ok(())) => NotificationOutcome::Delivered,
        Ok(Err(error)) => NotificationOutcome::Failed(error),
        Err(panic) => NotificationOutcome::Failed(PlugsetError::Notification {
            plugin_id: settings.plugin_id().to_string(),
            message: panic_message(panic.as_ref()),
        }),
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        format!("extension panicked: {message}")
    } else if let Some(message) = panic.downcast_ref::<String>() {
        format!("extension panicked: {message}")
    } else {
        "extension panicked".to_string()
    }
}
