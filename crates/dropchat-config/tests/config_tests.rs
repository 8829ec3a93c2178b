// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the dropchat configuration system.

use dropchat_config::diagnostic::ConfigError;
use dropchat_config::{load_and_validate_str, load_config_from_str};

#[test]
fn valid_toml_deserializes() {
    let toml = r#"
[storage]
database_path = "/tmp/chat.db"
wal_mode = false
busy_timeout_ms = 250

[paging]
default_page_size = 30
max_page_size = 300

[log]
level = "debug"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.storage.database_path, "/tmp/chat.db");
    assert!(!config.storage.wal_mode);
    assert_eq!(config.storage.busy_timeout_ms, 250);
    assert_eq!(config.paging.default_page_size, 30);
    assert_eq!(config.paging.max_page_size, 300);
    assert_eq!(config.log.level, "debug");
}

#[test]
fn empty_toml_uses_defaults() {
    let config = load_and_validate_str("").expect("defaults should validate");
    assert!(config.storage.wal_mode);
    assert_eq!(config.paging.default_page_size, 20);
}

#[test]
fn unknown_key_is_reported_with_suggestion() {
    let toml = r#"
[storage]
databse_path = "/tmp/x.db"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => {
            assert_eq!(key, "databse_path");
            assert_eq!(suggestion.as_deref(), Some("database_path"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn unknown_section_is_rejected() {
    let errors = load_and_validate_str("[telegram]\nbot_token = \"x\"\n")
        .expect_err("unknown section should fail");
    assert!(matches!(errors[0], ConfigError::UnknownKey { .. }));
}

#[test]
fn wrong_type_is_reported() {
    let errors = load_and_validate_str("[paging]\nmax_page_size = \"many\"\n")
        .expect_err("string for integer should fail");
    assert!(matches!(errors[0], ConfigError::InvalidType { .. }));
}

#[test]
fn semantic_violations_are_collected() {
    let toml = r#"
[paging]
default_page_size = 0

[log]
level = "verbose"
"#;
    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    assert_eq!(errors.len(), 2);
    assert!(errors
        .iter()
        .all(|e| matches!(e, ConfigError::Validation { .. })));
}

#[test]
fn rendered_defaults_load_back() {
    let defaults = dropchat_config::DropChatConfig::default();
    let rendered = toml::to_string(&defaults).expect("defaults should serialize");
    assert!(rendered.contains("[paging]"));

    let config = load_and_validate_str(&rendered).expect("rendered defaults should validate");
    assert_eq!(config.storage, defaults.storage);
    assert_eq!(config.paging, defaults.paging);
    assert_eq!(config.log, defaults.log);
}
