// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is
//! reported at startup instead of silently ignored.

use serde::{Deserialize, Serialize};

/// Top-level dropchat configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DropChatConfig {
    /// Message store settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Defaults for paged conversation listings.
    #[serde(default)]
    pub paging: PagingConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Message store configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,

    /// How long a statement waits on a locked database before failing.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("dropchat").join("dropchat.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("dropchat.db"))
        .to_string_lossy()
        .into_owned()
}

fn default_wal_mode() -> bool {
    true
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

/// Paging defaults for conversation listings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PagingConfig {
    /// Page size used when the caller does not ask for one.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Upper bound applied to caller-requested page sizes.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl PagingConfig {
    /// Resolve a requested page size against the configured default and cap.
    pub fn resolve_page_size(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_page_size)
            .min(self.max_page_size)
    }
}

fn default_page_size() -> usize {
    20
}

fn default_max_page_size() -> usize {
    500
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = DropChatConfig::default();
        assert!(config.storage.database_path.ends_with("dropchat.db"));
        assert!(config.storage.wal_mode);
        assert_eq!(config.storage.busy_timeout_ms, 5000);
        assert_eq!(config.paging.default_page_size, 20);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn resolve_page_size_applies_default_and_cap() {
        let paging = PagingConfig {
            default_page_size: 20,
            max_page_size: 50,
        };
        assert_eq!(paging.resolve_page_size(None), 20);
        assert_eq!(paging.resolve_page_size(Some(30)), 30);
        assert_eq!(paging.resolve_page_size(Some(1000)), 50);
    }
}
