// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Semantic checks that serde cannot express.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::{PlugsetConfig, SecurityConfig};

/// Check `config` and report every problem found, not just the first.
pub fn validate_config(config: &PlugsetConfig) -> Result<(), Vec<ConfigError>> {
    let mut problems: Vec<String> = Vec::new();

    if config.storage.database_path.trim().is_empty() {
        problems.push("storage.database_path must not be empty".into());
    }
    problems.extend(administrator_problems(&config.security));
    if config
        .metadata
        .manifest_dir
        .as_deref()
        .is_some_and(|dir| dir.trim().is_empty())
    {
        problems.push("metadata.manifest_dir must not be empty when set".into());
    }

    match problems.is_empty() {
        true => Ok(()),
        false => Err(problems.into_iter().map(ConfigError::validation).collect()),
    }
}

fn administrator_problems(security: &SecurityConfig) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut problems = Vec::new();
    for (index, name) in security.administrators.iter().enumerate() {
        let normalized = name.trim().to_lowercase();
        if normalized.is_empty() {
            problems.push(format!("security.administrators[{index}] must not be empty"));
        } else if !seen.insert(normalized) {
            problems.push(format!(
                "duplicate administrator `{name}` in security.administrators"
            ));
        }
    }
    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(config: &PlugsetConfig) -> Vec<String> {
        match validate_config(config) {
            Ok(()) => Vec::new(),
            Err(errors) => errors.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn defaults_are_valid() {
        assert!(messages(&PlugsetConfig::default()).is_empty());
    }

    #[test]
    fn blank_database_path_is_rejected() {
        let mut config = PlugsetConfig::default();
        config.storage.database_path = " ".to_string();
        let found = messages(&config);
        assert_eq!(found.len(), 1);
        assert!(found[0].contains("database_path"));
    }

    #[test]
    fn administrators_differing_only_in_case_are_duplicates() {
        let mut config = PlugsetConfig::default();
        config.security.administrators = vec!["Admin".into(), "admin".into()];
        assert!(messages(&config)[0].contains("duplicate administrator `admin`"));
    }

    #[test]
    fn every_problem_is_reported() {
        let mut config = PlugsetConfig::default();
        config.storage.database_path = String::new();
        config.security.administrators = vec![String::new()];
        config.metadata.manifest_dir = Some(String::new());
        assert_eq!(messages(&config).len(), 3);
    }
}
