// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Config errors as miette diagnostics.
//!
//! Figment reports unknown keys, wrong types and missing keys. Each one is
//! turned into a [`ConfigError`], pointing into the offending TOML file when
//! the file can be found and proposing the closest valid key for typos.

#![allow(unused_assignments)] // triggered by miette's Diagnostic derive

use std::path::Path;

use figment::error::Kind;
use miette::{Diagnostic, GraphicalReportHandler, NamedSource, SourceSpan};
use thiserror::Error;

/// Jaro-Winkler score a valid key must beat to be proposed as a correction.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// The text of one TOML file, kept so errors can point into it.
#[derive(Debug, Clone)]
pub struct TomlSource {
    pub name: String,
    pub content: String,
}

impl TomlSource {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Read `path`, or `None` when it cannot be read.
    pub fn read(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let name = std::path::absolute(path)
            .unwrap_or_else(|_| path.to_path_buf())
            .display()
            .to_string();
        Some(Self { name, content })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(plugset::config::unknown_key),
        help("{}", unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        key: String,
        /// Closest valid key, when one is similar enough.
        suggestion: Option<String>,
        valid_keys: Vec<String>,
        #[label("not a recognized key here")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    #[error("invalid type for key `{key}`: found {found}, expected {expected}")]
    #[diagnostic(code(plugset::config::invalid_type), help("use a value of type {expected}"))]
    InvalidType {
        key: String,
        found: String,
        expected: String,
    },

    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(plugset::config::missing_key),
        help("set `{key}` in plugset.toml")
    )]
    MissingKey { key: String },

    /// Rejected by [`crate::validation::validate_config`].
    #[error("validation error: {message}")]
    #[diagnostic(code(plugset::config::validation))]
    Validation { message: String },

    #[error("configuration error: {0}")]
    #[diagnostic(code(plugset::config::other))]
    Other(String),
}

impl ConfigError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    fn from_figment(error: figment::error::Error, sources: &[TomlSource]) -> Self {
        let section = error.path.clone();
        match &error.kind {
            Kind::UnknownField(field, expected) => {
                let (span, src) = match locate(&error, &section, field, sources) {
                    Some((span, src)) => (Some(span), Some(src)),
                    None => (None, None),
                };
                Self::UnknownKey {
                    key: field.clone(),
                    suggestion: suggest_key(field, expected),
                    valid_keys: expected.iter().map(|k| k.to_string()).collect(),
                    span,
                    src,
                }
            }
            Kind::MissingField(field) => Self::MissingKey {
                key: field.to_string(),
            },
            Kind::InvalidType(found, expected) => Self::InvalidType {
                key: section.join("."),
                found: found.to_string(),
                expected: expected.clone(),
            },
            _ => Self::Other(error.to_string()),
        }
    }
}

fn unknown_key_help(suggestion: Option<&str>, valid_keys: &[String]) -> String {
    let valid = valid_keys.join(", ");
    match suggestion {
        Some(key) => format!("did you mean `{key}`? Valid keys: {valid}"),
        None => format!("valid keys: {valid}"),
    }
}

/// Flatten a figment error, which may carry several failures, into diagnostics.
pub fn figment_to_config_errors(
    err: figment::Error,
    sources: &[TomlSource],
) -> Vec<ConfigError> {
    err.into_iter()
        .map(|error| ConfigError::from_figment(error, sources))
        .collect()
}

/// Span of `field` inside the file the error was read from.
fn locate(
    error: &figment::error::Error,
    section: &[String],
    field: &str,
    sources: &[TomlSource],
) -> Option<(SourceSpan, NamedSource<String>)> {
    let file = error
        .metadata
        .as_ref()
        .and_then(|m| m.source.as_ref())
        .and_then(|source| match source {
            figment::Source::File(path) => Some(path.display().to_string()),
            _ => None,
        });
    let source = match file {
        Some(name) => sources.iter().find(|s| s.name == name)?,
        // Inline strings carry no file path; fall back to the only source.
        None if sources.len() == 1 => &sources[0],
        None => return None,
    };

    let mut table = section.to_vec();
    if table.last().is_some_and(|last| last == field) {
        table.pop();
    }
    let offset = find_key_offset(&source.content, &table, field)?;
    Some((
        SourceSpan::new(offset.into(), field.len()),
        NamedSource::new(&source.name, source.content.clone()),
    ))
}

/// Byte offset of `field` defined directly under the table named by `section`
/// (`[]` for the root table).
pub fn find_key_offset(content: &str, section: &[String], field: &str) -> Option<usize> {
    let wanted = section.join(".");
    let mut table = String::new();
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let start = offset;
        offset += line.len();

        let body = line.trim_start();
        let indent = line.len() - body.len();
        let body = body.trim_end();

        if let Some(header) = body.strip_prefix('[') {
            table = header
                .trim_start_matches('[')
                .split(']')
                .next()
                .unwrap_or_default()
                .trim()
                .to_string();
            continue;
        }

        if table != wanted {
            continue;
        }
        let Some(rest) = body.strip_prefix(field) else {
            continue;
        };
        if rest.trim_start().starts_with('=') {
            return Some(start + indent);
        }
    }

    None
}

/// The valid key most similar to `unknown`, if any beats the threshold.
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    valid_keys
        .iter()
        .map(|key| (strsim::jaro_winkler(unknown, key), *key))
        .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, key)| key.to_string())
}

/// Render `errors` as a single graphical report.
pub fn render_report(errors: &[ConfigError]) -> String {
    let handler = GraphicalReportHandler::new();
    let mut out = String::new();
    for error in errors {
        let mut rendered = String::new();
        match handler.render_report(&mut rendered, error as &dyn Diagnostic) {
            Ok(()) => out.push_str(&rendered),
            Err(_) => {
                out.push_str(&format!("Error: {error}"));
                out.push('\n');
            }
        }
    }
    out
}

/// Print `errors` to stderr.
pub fn render_errors(errors: &[ConfigError]) {
    eprint!("{}", render_report(errors));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(name: &str) -> Vec<String> {
        vec![name.to_string()]
    }

    #[test]
    fn suggests_closest_key_for_typos() {
        assert_eq!(
            suggest_key("adminstrators", &["enabled", "administrators"]),
            Some("administrators".to_string())
        );
        assert_eq!(
            suggest_key("databse_path", &["database_path", "wal_mode"]),
            Some("database_path".to_string())
        );
    }

    #[test]
    fn no_suggestion_for_distant_typo() {
        assert_eq!(suggest_key("zzzzzz", &["database_path", "wal_mode"]), None);
    }

    #[test]
    fn finds_key_inside_its_table() {
        let content = "[security]\nenabled = true\n\n[storage]\ndatabse_path = \"x.db\"\n";
        let offset = find_key_offset(content, &section("storage"), "databse_path").unwrap();
        assert_eq!(&content[offset..offset + 12], "databse_path");
    }

    #[test]
    fn ignores_same_key_in_other_tables() {
        let content = "[security]\nenabled = true\n[storage]\nwal_mode = true\n";
        assert!(find_key_offset(content, &section("storage"), "enabled").is_none());
        assert!(find_key_offset(content, &section("metadata"), "enabled").is_none());
    }

    #[test]
    fn root_keys_use_empty_section() {
        let content = "telemetry = 1\n[storage]\n";
        assert_eq!(find_key_offset(content, &[], "telemetry"), Some(0));
    }

    #[test]
    fn unknown_key_from_inline_source_gets_span() {
        let toml = "[storage]\ndatabse_path = \"x.db\"\n";
        let err = crate::loader::load_config_from_str(toml).unwrap_err();
        let errors = figment_to_config_errors(err, &[TomlSource::new("<inline>", toml)]);

        match &errors[0] {
            ConfigError::UnknownKey {
                suggestion, span, ..
            } => {
                assert_eq!(suggestion.as_deref(), Some("database_path"));
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn report_names_the_error_code() {
        let error = ConfigError::validation("storage.database_path must not be empty");
        let report = render_report(&[error]);
        assert!(report.contains("plugset::config::validation"));
    }
}
