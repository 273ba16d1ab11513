//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read a config file that exists.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
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
/// All fields are optional; unset fields fall back to hardcoded
/// defaults. Corresponds to `~/.config/taiview/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Locale segment passed to the API (e.g. "zh-tw", "en").
    #[serde(default)]
    pub lang: Option<String>,

    /// Path for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Custom key bindings (reserved; defaults are always used today).
    #[serde(default)]
    pub keybindings: Option<toml::Value>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Locale segment passed to the API.
    pub lang: String,
    /// Path for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            lang: crate::api::DEFAULT_LANG.to_string(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve the default log file path.
///
/// `~/.local/state/taiview/taiview.log` on Unix-like systems, the
/// platform equivalent elsewhere, falling back to the current directory
/// when no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("taiview").join("taiview.log")
    } else {
        PathBuf::from("taiview.log")
    }
}

/// Resolve the default config file path
/// (`~/.config/taiview/config.toml`), or `None` when no config directory
/// can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("taiview").join("config.toml"))
}

/// Load a configuration file from a specific path.
///
/// A missing file is not an error; `Ok(None)` means "use defaults".
///
/// # Errors
///
/// Returns an error only if the file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

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

/// Locate and load the configuration file.
///
/// Lookup order (first hit wins):
/// 1. Explicit `config_path` argument (the CLI `--config` flag)
/// 2. `TAIVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/taiview/config.toml`
///
/// # Errors
///
/// Returns an error only if a located file cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("TAIVIEW_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge a loaded config file into the defaults.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        lang: config.lang.unwrap_or(defaults.lang),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides.
///
/// `TAIVIEW_LANG` overrides the locale.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(lang) = std::env::var("TAIVIEW_LANG") {
        config.lang = lang;
    }

    config
}

/// Apply CLI argument overrides. CLI args have the highest precedence;
/// only flags the user actually passed are applied.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    lang_override: Option<String>,
) -> ResolvedConfig {
    if let Some(lang) = lang_override {
        config.lang = lang;
    }

    config
}

// ===== Tests =====

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
