//! Configuration file loading with precedence handling.

use crate::config::PagerConfig;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/gridpager/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Records per page.
    #[serde(default)]
    pub page_size: Option<u32>,

    /// Defer the first fetch until a page is explicitly requested.
    #[serde(default)]
    pub lazy_load: Option<bool>,

    /// Message shown when a fetch finds no results.
    #[serde(default)]
    pub empty_message: Option<String>,

    /// Cap on consecutive empty-page retreats.
    #[serde(default)]
    pub max_retreats: Option<u32>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Records per page.
    pub page_size: u32,
    /// Defer the first fetch.
    pub lazy_load: bool,
    /// No-results message.
    pub empty_message: String,
    /// Retreat cap.
    pub max_retreats: u32,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let pager = PagerConfig::default();
        Self {
            page_size: 10,
            lazy_load: pager.lazy_load,
            empty_message: pager.empty_message,
            max_retreats: pager.max_retreats,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// The engine-facing slice of this configuration.
    pub fn pager(&self) -> PagerConfig {
        PagerConfig {
            lazy_load: self.lazy_load,
            max_retreats: self.max_retreats,
            empty_message: self.empty_message.clone(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/gridpager/gridpager.log` on Unix-like systems,
/// or the platform equivalent elsewhere. Falls back to the current directory
/// if no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("gridpager").join("gridpager.log")
    } else {
        PathBuf::from("gridpager.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if the file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/gridpager/config.toml` on Unix, the platform
/// equivalent elsewhere, or `None` if no config directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gridpager").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `GRIDPAGER_CONFIG` environment variable
/// 3. Default path `~/.config/gridpager/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    // 1. Explicit path (like CLI --config)
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    // 2. GRIDPAGER_CONFIG environment variable
    if let Ok(env_path) = std::env::var("GRIDPAGER_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    // 3. Default path
    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// the hardcoded default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        page_size: config.page_size.unwrap_or(defaults.page_size),
        lazy_load: config.lazy_load.unwrap_or(defaults.lazy_load),
        empty_message: config.empty_message.unwrap_or(defaults.empty_message),
        max_retreats: config.max_retreats.unwrap_or(defaults.max_retreats),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `GRIDPAGER_EMPTY_MESSAGE`: Override the no-results message
/// - `GRIDPAGER_PAGE_SIZE`: Override the page size (ignored unless it
///   parses as a positive integer)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(message) = std::env::var("GRIDPAGER_EMPTY_MESSAGE") {
        config.empty_message = message;
    }

    if let Ok(raw) = std::env::var("GRIDPAGER_PAGE_SIZE") {
        if let Ok(page_size) = raw.parse::<u32>() {
            if page_size > 0 {
                config.page_size = page_size;
            }
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    page_size_override: Option<u32>,
    lazy_load_override: Option<bool>,
    empty_message_override: Option<String>,
) -> ResolvedConfig {
    if let Some(page_size) = page_size_override {
        config.page_size = page_size;
    }

    if let Some(lazy_load) = lazy_load_override {
        config.lazy_load = lazy_load;
    }

    if let Some(message) = empty_message_override {
        config.empty_message = message;
    }

    config
}

// ===== Tests =====

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
