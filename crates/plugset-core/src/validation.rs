// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validation results reported by extension providers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Settings key the error applies to.
    pub key: String,
    /// Human-readable message.
    pub message: String,
}

impl ValidationError {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Ordered list of validation errors. Empty means the settings are valid.
///
/// Extensions evaluate all of their rules before returning, so an outcome may
/// hold several errors, including several for the same key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationOutcome {
    errors: Vec<ValidationError>,
}

impl ValidationOutcome {
    /// An empty (successful) outcome.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Convenience for `push(ValidationError::new(key, message))`.
    pub fn add_error(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.push(ValidationError::new(key, message));
    }

    pub fn is_successful(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl FromIterator<ValidationError> for ValidationOutcome {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationOutcome {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.key, e.message))
            .collect();
        write!(f, "{}", rendered.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_outcome_is_successful() {
        let outcome = ValidationOutcome::new();
        assert!(outcome.is_successful());
        assert!(outcome.is_empty());
    }

    #[test]
    fn errors_keep_insertion_order_and_duplicates() {
        let mut outcome = ValidationOutcome::new();
        outcome.add_error("url", "url is required");
        outcome.add_error("token", "token is required");
        outcome.add_error("url", "url must be https");

        assert!(!outcome.is_successful());
        assert_eq!(outcome.len(), 3);
        let keys: Vec<&str> = outcome.errors().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["url", "token", "url"]);
    }

    #[test]
    fn display_joins_errors() {
        let outcome: ValidationOutcome = vec![
            ValidationError::new("a", "bad a"),
            ValidationError::new("b", "bad b"),
        ]
        .into_iter()
        .collect();
        assert_eq!(outcome.to_string(), "a: bad a; b: bad b");
    }
}
