// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configured administrator list.

use std::collections::HashSet;

use plugset_config::SecurityConfig;
use plugset_core::{AuthorizationGate, Username};

/// Grants edit rights to the configured administrators.
///
/// Names are compared case-insensitively. With security disabled every
/// caller is an administrator.
#[derive(Debug, Clone)]
pub struct AdministratorGate {
    enabled: bool,
    administrators: HashSet<String>,
}

impl AdministratorGate {
    pub fn new<I, S>(administrators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            enabled: true,
            administrators: administrators
                .into_iter()
                .map(|name| name.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    pub fn from_config(config: &SecurityConfig) -> Self {
        Self {
            enabled: config.enabled,
            ..Self::new(&config.administrators)
        }
    }

    /// A gate that lets everyone through.
    pub fn allow_all() -> Self {
        Self {
            enabled: false,
            administrators: HashSet::new(),
        }
    }
}

impl AuthorizationGate for AdministratorGate {
    fn is_administrator(&self, caller: &Username) -> bool {
        !self.enabled
            || self
                .administrators
                .contains(&caller.as_str().trim().to_lowercase())
    }
}
