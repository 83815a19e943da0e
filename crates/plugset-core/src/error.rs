// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for plugin settings management.

use thiserror::Error;

use crate::validation::ValidationOutcome;

/// Marker embedded in the message of every authorization failure.
pub const UNAUTHORIZED_TO_EDIT: &str = "UNAUTHORIZED_TO_EDIT";

/// Marker embedded in the message of every stale-fingerprint failure.
pub const STALE_RESOURCE_CONFIG: &str = "STALE_RESOURCE_CONFIG";

/// The primary error type used across all Plugset collaborators and the orchestrator.
#[derive(Debug, Error)]
pub enum PlugsetError {
    /// Configuration errors (invalid TOML, malformed manifests, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database connection, query failure).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Stored or supplied configuration could not be (de)serialized.
    #[error("could not serialize settings for plugin '{plugin_id}': {source}")]
    Serialization {
        plugin_id: String,
        source: serde_json::Error,
    },

    /// The caller is not an administrator.
    #[error("{}: user '{user}' is not authorized to edit plugin settings", UNAUTHORIZED_TO_EDIT)]
    Unauthorized { user: String },

    /// No registered extension claims the plugin.
    #[error("Plugin '{plugin_id}' does not exist or does not implement settings validation")]
    UnresolvedPlugin { plugin_id: String },

    /// The owning extension rejected one or more settings.
    #[error("plugin '{plugin_id}' rejected settings: {errors}")]
    Validation {
        plugin_id: String,
        errors: ValidationOutcome,
    },

    /// The caller's fingerprint does not match the stored settings.
    #[error(
        "{}: settings for plugin '{plugin_id}' were modified by someone else, reload and retry",
        STALE_RESOURCE_CONFIG
    )]
    Conflict { plugin_id: String },

    /// The owning extension failed while being told about a settings change.
    #[error("failed to notify plugin '{plugin_id}' of settings change: {message}")]
    Notification { plugin_id: String, message: String },

    /// An extension provider failed outside of notification.
    #[error("extension error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PlugsetError {
    /// HTTP status an outer API layer should report for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            PlugsetError::Unauthorized { .. } => 401,
            PlugsetError::UnresolvedPlugin { .. } | PlugsetError::Validation { .. } => 422,
            PlugsetError::Conflict { .. } => 412,
            _ => 500,
        }
    }

    /// Wraps any storage-layer error.
    pub fn storage(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        PlugsetError::Storage {
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn status_codes_follow_error_kind() {
        let unauthorized = PlugsetError::Unauthorized {
            user: "bob".into(),
        };
        let unresolved = PlugsetError::UnresolvedPlugin {
            plugin_id: "p".into(),
        };
        let validation = PlugsetError::Validation {
            plugin_id: "p".into(),
            errors: ValidationOutcome::default(),
        };
        let conflict = PlugsetError::Conflict {
            plugin_id: "p".into(),
        };
        let internal = PlugsetError::Internal("boom".into());

        assert_eq!(unauthorized.http_status(), 401);
        assert_eq!(unresolved.http_status(), 422);
        assert_eq!(validation.http_status(), 422);
        assert_eq!(conflict.http_status(), 412);
        assert_eq!(internal.http_status(), 500);
    }

    #[test]
    fn messages_carry_markers() {
        let unauthorized = PlugsetError::Unauthorized {
            user: "bob".into(),
        };
        assert_eq!(
            unauthorized.to_string(),
            format!("{UNAUTHORIZED_TO_EDIT}: user 'bob' is not authorized to edit plugin settings")
        );

        let conflict = PlugsetError::Conflict {
            plugin_id: "p".into(),
        };
        assert!(conflict.to_string().starts_with(&format!("{STALE_RESOURCE_CONFIG}: ")));
    }

    #[test]
    fn unresolved_plugin_message_is_exact() {
        let err = PlugsetError::UnresolvedPlugin {
            plugin_id: "non-existent-plugin".into(),
        };
        assert_eq!(
            err.to_string(),
            "Plugin 'non-existent-plugin' does not exist or does not implement settings validation"
        );
    }

    #[test]
    fn validation_message_lists_errors() {
        let mut errors = ValidationOutcome::new();
        errors.push(ValidationError::new("foo", "foo is a required field"));
        let err = PlugsetError::Validation {
            plugin_id: "some-plugin".into(),
            errors,
        };
        assert!(err.to_string().contains("foo: foo is a required field"));
    }
}
