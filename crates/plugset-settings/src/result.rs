// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP-shaped result of a settings operation, for an outer API layer.

use std::fmt;

use plugset_core::PlugsetError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult {
    pub code: u16,
    pub message: String,
}

impl OperationResult {
    pub fn ok() -> Self {
        Self {
            code: 200,
            message: "OK".to_string(),
        }
    }

    pub fn from_error(error: &PlugsetError) -> Self {
        Self {
            code: error.http_status(),
            message: error.to_string(),
        }
    }

    pub fn from_outcome<T>(outcome: &Result<T, PlugsetError>) -> Self {
        match outcome {
            Ok(_) => Self::ok(),
            Err(error) => Self::from_error(error),
        }
    }

    pub fn is_successful(&self) -> bool {
        (200..300).contains(&self.code)
    }
}

impl fmt::Display for OperationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use plugset_core::{STALE_RESOURCE_CONFIG, UNAUTHORIZED_TO_EDIT};

    use super::*;

    #[test]
    fn ok_is_successful() {
        let result = OperationResult::from_outcome::<()>(&Ok(()));
        assert!(result.is_successful());
        assert_eq!(result.code, 200);
    }

    #[test]
    fn errors_keep_their_markers() {
        let unauthorized = OperationResult::from_error(&PlugsetError::Unauthorized {
            user: "non-admin".into(),
        });
        assert_eq!(unauthorized.code, 401);
        assert!(unauthorized.to_string().contains(UNAUTHORIZED_TO_EDIT));
        assert!(!unauthorized.is_successful());

        let stale = OperationResult::from_outcome::<()>(&Err(PlugsetError::Conflict {
            plugin_id: "p".into(),
        }));
        assert_eq!(stale.code, 412);
        assert!(stale.to_string().contains(STALE_RESOURCE_CONFIG));
    }
}
