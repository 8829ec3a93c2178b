// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./dropchat.toml` > `~/.config/dropchat/dropchat.toml` >
//! `/etc/dropchat/dropchat.toml`, with `DROPCHAT_` environment overrides on top.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::DropChatConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/dropchat/dropchat.toml";

/// Configuration file in the working directory.
pub const LOCAL_CONFIG_PATH: &str = "dropchat.toml";

/// Path of the per-user configuration file, if the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("dropchat").join("dropchat.toml"))
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/dropchat/dropchat.toml`
/// 3. `~/.config/dropchat/dropchat.toml`
/// 4. `./dropchat.toml`
/// 5. `DROPCHAT_*` environment variables
pub fn load_config() -> Result<DropChatConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<DropChatConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DropChatConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<DropChatConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DropChatConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for hierarchy loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(DropChatConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_PATH))
        .merge(env_provider())
}

/// Environment provider mapping `DROPCHAT_<SECTION>_<KEY>` to `section.key`.
///
/// figment hands the key over without the prefix but still upper-case, so
/// `DROPCHAT_STORAGE_DATABASE_PATH` arrives as `STORAGE_DATABASE_PATH` and
/// maps to `storage.database_path`.
fn env_provider() -> Env {
    Env::prefixed("DROPCHAT_").map(|key| {
        let lower = key.as_str().to_ascii_lowercase();
        ENV_SECTIONS
            .iter()
            .find_map(|section| {
                lower
                    .strip_prefix(section)
                    .and_then(|rest| rest.strip_prefix('_'))
                    .map(|rest| format!("{section}.{rest}"))
            })
            .unwrap_or(lower)
            .into()
    })
}

const ENV_SECTIONS: &[&str] = &["storage", "paging", "log"];
