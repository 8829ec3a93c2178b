// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration diagnostics.
//!
//! figment reports every problem it finds as a key path plus an error kind.
//! [`from_figment`] turns those into [`ConfigError`]s that point at the
//! offending line of the TOML file they came from, and offers the closest
//! known key when an unknown one looks like a typo.

#![allow(unused_assignments)] // miette's Diagnostic derive trips this lint

use figment::error::Kind;
use miette::{Diagnostic, GraphicalReportHandler, NamedSource, SourceSpan};
use thiserror::Error;

/// Jaro-Winkler score above which a known key is offered as a correction.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration file as `(path, contents)`, for span resolution.
pub type TomlSource = (String, String);

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("unknown key `{key}` in {section}")]
    #[diagnostic(
        code(dropchat::config::unknown_key),
        help("{}", unknown_key_help(suggestion.as_deref(), known))
    )]
    UnknownKey {
        key: String,
        /// `[section]`, or "the top level" for unknown sections.
        section: String,
        suggestion: Option<String>,
        /// Comma-separated keys accepted at that position.
        known: String,
        #[label("not a dropchat setting")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    #[error("`{key}` has the wrong type: {detail}")]
    #[diagnostic(code(dropchat::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        key: String,
        detail: String,
        expected: String,
        #[label("this value")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(dropchat::config::missing_key),
        help("set `{key}` in dropchat.toml or through a DROPCHAT_* variable")
    )]
    MissingKey { key: String },

    /// Parsed fine but fails a semantic check.
    #[error("invalid configuration: {message}")]
    #[diagnostic(code(dropchat::config::validation))]
    Validation { message: String },

    #[error("configuration error: {0}")]
    #[diagnostic(code(dropchat::config::other))]
    Other(String),
}

fn unknown_key_help(suggestion: Option<&str>, known: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? known keys: {known}"),
        None => format!("known keys: {known}"),
    }
}

/// Convert every error carried by a `figment::Error` into a diagnostic.
pub fn from_figment(err: figment::Error, sources: &[TomlSource]) -> Vec<ConfigError> {
    err.into_iter()
        .map(|error| {
            let section: Vec<String> = error.path.iter().map(ToString::to_string).collect();
            match &error.kind {
                Kind::UnknownField(field, expected) => {
                    let (span, src) = locate(&error, &section, field, sources);
                    ConfigError::UnknownKey {
                        key: field.clone(),
                        section: match section.first() {
                            Some(name) => format!("[{name}]"),
                            None => "the top level".to_string(),
                        },
                        suggestion: suggest_key(field, &expected[..]),
                        known: expected.join(", "),
                        span,
                        src,
                    }
                }
                Kind::InvalidType(actual, expected) => {
                    // For a type error the path ends with the key itself.
                    let (table, key) = match section.split_last() {
                        Some((key, table)) => (table, key.as_str()),
                        None => (&section[..], ""),
                    };
                    let (span, src) = locate(&error, table, key, sources);
                    ConfigError::InvalidType {
                        key: section.join("."),
                        detail: format!("found {actual}"),
                        expected: expected.to_string(),
                        span,
                        src,
                    }
                }
                Kind::MissingField(field) => ConfigError::MissingKey {
                    key: field.to_string(),
                },
                _ => ConfigError::Other(error.to_string()),
            }
        })
        .collect()
}

/// Span of `key` inside the file the error came from, if that file is known.
fn locate(
    error: &figment::error::Error,
    section: &[String],
    key: &str,
    sources: &[TomlSource],
) -> (Option<SourceSpan>, Option<NamedSource<String>>) {
    let Some(figment::Source::File(path)) = error.metadata.as_ref().and_then(|m| m.source.as_ref())
    else {
        return (None, None);
    };
    let path = path.display().to_string();
    let Some((name, content)) = sources.iter().find(|(p, _)| *p == path) else {
        return (None, None);
    };
    match find_key_offset(content, section.first().map(String::as_str), key) {
        Some(offset) => (
            Some(SourceSpan::new(offset.into(), key.len())),
            Some(NamedSource::new(name, content.clone())),
        ),
        None => (None, None),
    }
}

/// Byte offset of `key` as written inside `[section]` (or before the first
/// header when `section` is `None`). The scan stops at the next header.
pub fn find_key_offset(content: &str, section: Option<&str>, key: &str) -> Option<usize> {
    let mut in_section = section.is_none();
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if trimmed.starts_with('[') {
            if in_section {
                return None;
            }
            let header = trimmed.trim_end().trim_start_matches('[').trim_end_matches(']');
            in_section = Some(header.trim()) == section;
        } else if in_section {
            let is_key = trimmed
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='));
            if is_key {
                return Some(offset + (line.len() - trimmed.len()));
            }
        }
        offset += line.len();
    }
    None
}

/// Closest known key to `unknown`, if any is similar enough.
pub fn suggest_key<S: AsRef<str>>(unknown: &str, known: &[S]) -> Option<String> {
    known
        .iter()
        .map(|key| (strsim::jaro_winkler(unknown, key.as_ref()), key.as_ref()))
        .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, key)| key.to_string())
}

/// Print every diagnostic to stderr, followed by a count.
pub fn render_errors(errors: &[ConfigError]) {
    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut rendered = String::new();
        match handler.render_report(&mut rendered, error as &dyn Diagnostic) {
            Ok(()) => eprint!("{rendered}"),
            Err(_) => eprintln!("error: {error}"),
        }
    }
    if errors.len() > 1 {
        eprintln!("dropchat: {} configuration errors", errors.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
[storage]
wal_mode = true

[paging]
max_pge_size = 3
default_page_size = 10
";

    #[test]
    fn suggests_close_key() {
        let known = ["database_path", "wal_mode", "busy_timeout_ms"];
        assert_eq!(
            suggest_key("databse_path", &known),
            Some("database_path".to_string())
        );
    }

    #[test]
    fn no_suggestion_for_distant_typo() {
        assert_eq!(suggest_key("zzzzzz", &["default_page_size", "max_page_size"]), None);
    }

    #[test]
    fn key_offset_inside_section() {
        let o = find_key_offset(SAMPLE, Some("paging"), "max_pge_size").unwrap();
        assert_eq!(&SAMPLE[o..o + 12], "max_pge_size");
    }

    #[test]
    fn key_offset_does_not_leak_into_later_sections() {
        assert_eq!(find_key_offset(SAMPLE, Some("storage"), "default_page_size"), None);
    }

    #[test]
    fn key_offset_missing_section() {
        assert_eq!(find_key_offset(SAMPLE, Some("log"), "level"), None);
    }

    #[test]
    fn top_level_key_before_first_header() {
        let content = "stray = 1\n[log]\nlevel = \"info\"\n";
        assert_eq!(find_key_offset(content, None, "stray"), Some(0));
        assert_eq!(find_key_offset(content, None, "level"), None);
    }

    #[test]
    fn unknown_key_help_lists_known_keys() {
        assert_eq!(
            unknown_key_help(Some("level"), "level"),
            "did you mean `level`? known keys: level"
        );
        assert_eq!(unknown_key_help(None, "a, b"), "known keys: a, b");
    }
}
