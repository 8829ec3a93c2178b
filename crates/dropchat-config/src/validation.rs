// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::DropChatConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration, collecting every violation.
pub fn validate_config(config: &DropChatConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if config.paging.default_page_size == 0 {
        errors.push(ConfigError::Validation {
            message: "paging.default_page_size must be at least 1".to_string(),
        });
    }

    if config.paging.max_page_size == 0 {
        errors.push(ConfigError::Validation {
            message: "paging.max_page_size must be at least 1".to_string(),
        });
    }

    if config.paging.default_page_size > config.paging.max_page_size {
        errors.push(ConfigError::Validation {
            message: format!(
                "paging.default_page_size ({}) must not exceed paging.max_page_size ({})",
                config.paging.default_page_size, config.paging.max_page_size
            ),
        });
    }

    let level = config.log.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{}` is not one of {}",
                config.log.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
