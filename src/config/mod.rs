// SPDX-License-Identifier: MPL-2.0
//! Overlay configuration, loaded from and saved to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use popup_notifications::config::{self, Config, Position};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.position = Position::Bottom;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::domain::diagnostics::HistoryCapacity;
use crate::error::Result;
use crate::notifications::PresetDefaults;
use defaults::{
    DEFAULT_ANIMATION_DURATION_MS, DEFAULT_AUTO_DISMISS_MS, DEFAULT_HISTORY_CAPACITY,
    DEFAULT_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PopupNotifications";

/// Screen edge the notifications stack against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Top,
    Bottom,
}

impl std::str::FromStr for Position {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(Position::Top),
            "bottom" => Ok(Position::Bottom),
            other => Err(crate::error::Error::Config(format!(
                "unknown position `{other}` (expected `top` or `bottom`)"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub position: Position,
    /// Auto-dismiss delay used by the presets, in milliseconds.
    pub auto_dismiss_ms: u64,
    /// Duration of named animations used by the presets, in milliseconds.
    pub animation_duration_ms: u64,
    pub tick_interval_ms: u64,
    pub history_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            position: Position::Top,
            auto_dismiss_ms: DEFAULT_AUTO_DISMISS_MS,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl Config {
    #[must_use]
    pub fn preset_defaults(&self) -> PresetDefaults {
        PresetDefaults {
            auto_dismiss: Duration::from_millis(self.auto_dismiss_ms),
            animation_duration: Duration::from_millis(self.animation_duration_ms),
        }
    }

    /// Tick interval, clamped so a bad config cannot spin or stall the overlay.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(
            self.tick_interval_ms
                .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS),
        )
    }

    #[must_use]
    pub fn history_capacity(&self) -> HistoryCapacity {
        HistoryCapacity::new(self.history_capacity)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads a config file. Unparseable content falls back to the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid config, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
