// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the orchestrator and its collaborators.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Identity of the caller, as established by the authentication subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(pub String);

impl Username {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of extension point a provider implements.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum ExtensionKind {
    PackageRepository,
    Scm,
    Task,
    Notification,
    #[strum(serialize = "configrepo")]
    #[serde(rename = "configrepo")]
    ConfigRepo,
}

/// Health status reported by storage health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Fully operational.
    Healthy,
    /// Operational but experiencing issues.
    Degraded(String),
    /// Not operational.
    Unhealthy(String),
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn extension_kind_names_are_stable() {
        assert_eq!(ExtensionKind::PackageRepository.to_string(), "package-repository");
        assert_eq!(ExtensionKind::Scm.to_string(), "scm");
        assert_eq!(ExtensionKind::Task.to_string(), "task");
        assert_eq!(ExtensionKind::Notification.to_string(), "notification");
        assert_eq!(ExtensionKind::ConfigRepo.to_string(), "configrepo");
    }

    #[test]
    fn extension_kind_parses_its_own_display() {
        for kind in ExtensionKind::iter() {
            let parsed = ExtensionKind::from_str(&kind.to_string()).expect("should parse back");
            assert_eq!(kind, parsed);
        }
        assert_eq!(ExtensionKind::from_str("SCM").unwrap(), ExtensionKind::Scm);
        assert!(ExtensionKind::from_str("analytics").is_err());
    }

    #[test]
    fn extension_kind_serde_matches_display() {
        let json = serde_json::to_string(&ExtensionKind::ConfigRepo).unwrap();
        assert_eq!(json, "\"configrepo\"");
        let parsed: ExtensionKind = serde_json::from_str("\"package-repository\"").unwrap();
        assert_eq!(parsed, ExtensionKind::PackageRepository);
    }

    #[test]
    fn username_displays_inner_name() {
        let user = Username::new("admin");
        assert_eq!(user.to_string(), "admin");
        assert_eq!(user.as_str(), "admin");
    }
}
