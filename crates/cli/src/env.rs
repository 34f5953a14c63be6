// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

use crate::config::ConfigError;

const APP_DIR: &str = "streak";

// --- Config directory ---

/// Resolve config directory: XDG_CONFIG_HOME/streak > platform config dir/streak
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or(ConfigError::NoConfigDir)
}

// --- Files ---

/// Preference file: STREAK_PREFS > <config dir>/widget_prefs.json
pub fn prefs_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = std::env::var_os("STREAK_PREFS").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    Ok(config_dir()?.join("widget_prefs.json"))
}

/// Config file: STREAK_CONFIG > <config dir>/config.toml
pub fn config_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = std::env::var_os("STREAK_CONFIG").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    Ok(config_dir()?.join("config.toml"))
}

// --- Logging ---

/// Log filter directive, e.g. `STREAK_LOG=debug`.
pub fn log_filter() -> Option<String> {
    std::env::var("STREAK_LOG").ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
