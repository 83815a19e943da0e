// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugset configuration.
//!
//! A [`PlugsetConfig`] is read from layered TOML files and `PLUGSET_*`
//! environment variables, rejected if it contains unknown keys, then checked
//! for semantic problems. Every failure comes back as a [`ConfigError`]
//! diagnostic.
//!
//! ```no_run
//! match plugset_config::load_and_validate() {
//!     Ok(config) => println!("database: {}", config.storage.database_path),
//!     Err(errors) => plugset_config::render_errors(&errors),
//! }
//! ```

#![allow(clippy::result_large_err)]

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{ConfigError, TomlSource, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{MetadataConfig, PlugsetConfig, SecurityConfig, StorageConfig};

/// Load every configuration layer, then validate the result.
pub fn load_and_validate() -> Result<PlugsetConfig, Vec<ConfigError>> {
    let config = checked(loader::load_config(), on_disk_sources)?;
    tracing::debug!(database = %config.storage.database_path, "configuration loaded");
    Ok(config)
}

/// Parse and validate a TOML document without touching files or the environment.
pub fn load_and_validate_str(toml_content: &str) -> Result<PlugsetConfig, Vec<ConfigError>> {
    checked(loader::load_config_from_str(toml_content), || {
        vec![TomlSource::new("<inline>", toml_content)]
    })
}

/// Validate a successful load, or translate its figment error. Sources are
/// only read when there is an error to point into.
fn checked(
    loaded: Result<PlugsetConfig, figment::Error>,
    sources: impl FnOnce() -> Vec<TomlSource>,
) -> Result<PlugsetConfig, Vec<ConfigError>> {
    let config =
        loaded.map_err(|err| diagnostic::figment_to_config_errors(err, &sources()))?;
    validation::validate_config(&config)?;
    Ok(config)
}

fn on_disk_sources() -> Vec<TomlSource> {
    loader::config_file_candidates()
        .iter()
        .filter_map(|path| TomlSource::read(path))
        .collect()
}
