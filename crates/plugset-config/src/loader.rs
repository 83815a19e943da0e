// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading.
//!
//! Layers, lowest precedence first: compiled defaults, the system file
//! `/etc/plugset/plugset.toml`, the user file under the XDG config dir,
//! `./plugset.toml`, then `PLUGSET_*` environment variables.

#![allow(clippy::result_large_err)] // figment::Error is foreign and large

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::PlugsetConfig;

const FILE_NAME: &str = "plugset.toml";

/// Sections whose keys may be overridden through the environment.
const ENV_SECTIONS: [&str; 3] = ["storage", "security", "metadata"];

/// Config files consulted by [`load_config`], lowest precedence first.
/// Files that do not exist are skipped by figment.
pub fn config_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from("/etc/plugset").join(FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("plugset").join(FILE_NAME));
    }
    candidates.push(PathBuf::from(FILE_NAME));
    candidates
}

/// Load from every candidate file plus the environment.
pub fn load_config() -> Result<PlugsetConfig, figment::Error> {
    build_figment().extract()
}

/// Load from a TOML string alone. No files or environment are read.
pub fn load_config_from_str(toml_content: &str) -> Result<PlugsetConfig, figment::Error> {
    defaults().merge(Toml::string(toml_content)).extract()
}

/// Load from one file, still honouring environment overrides.
pub fn load_config_from_path(path: &Path) -> Result<PlugsetConfig, figment::Error> {
    defaults()
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The full layered figment used by [`load_config`].
pub fn build_figment() -> Figment {
    config_file_candidates()
        .into_iter()
        .fold(defaults(), |figment, path| figment.merge(Toml::file(path)))
        .merge(env_provider())
}

fn defaults() -> Figment {
    Figment::from(Serialized::defaults(PlugsetConfig::default()))
}

/// `PLUGSET_<SECTION>_<KEY>` becomes `<section>.<key>`. Only the first
/// underscore after the section name is turned into a dot, so
/// `PLUGSET_STORAGE_DATABASE_PATH` lands on `storage.database_path`.
fn env_provider() -> Env {
    Env::prefixed("PLUGSET_").map(|key| {
        let key = key.as_str().to_ascii_lowercase();
        let dotted = ENV_SECTIONS.iter().find_map(|section| {
            key.strip_prefix(section)
                .and_then(|rest| rest.strip_prefix('_'))
                .map(|rest| format!("{section}.{rest}"))
        });
        dotted.unwrap_or(key).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_vars_map_into_sections() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PLUGSET_STORAGE_DATABASE_PATH", "/tmp/env.db");
            jail.set_env("PLUGSET_SECURITY_ENABLED", "false");
            jail.set_env("PLUGSET_METADATA_MANIFEST_DIR", "/opt/plugins");

            let config: PlugsetConfig = defaults().merge(env_provider()).extract()?;

            assert_eq!(config.storage.database_path, "/tmp/env.db");
            assert!(!config.security.enabled);
            assert_eq!(config.metadata.manifest_dir.as_deref(), Some("/opt/plugins"));
            Ok(())
        });
    }

    #[test]
    fn local_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "plugset.toml",
                r#"
[security]
administrators = ["root"]
"#,
            )?;
            let config = build_figment().extract::<PlugsetConfig>()?;
            assert_eq!(config.security.administrators, vec!["root"]);
            assert!(config.security.enabled);
            Ok(())
        });
    }

    #[test]
    fn local_file_is_the_last_candidate() {
        let candidates = config_file_candidates();
        assert_eq!(candidates.last(), Some(&PathBuf::from("plugset.toml")));
        assert!(candidates[0].starts_with("/etc/plugset"));
    }
}
