//! Settings persistence
//!
//! Loads and saves [`Settings`] as JSON. The default location is
//! `settings.json` in the user's configuration directory, falling back to the
//! working directory when no such directory exists.
//!
//! # Error Handling
//!
//! [`load_settings`] never fails: a missing or unparsable file is logged and
//! replaced by defaults. [`try_load_settings`] and [`save_settings`] report
//! errors to the caller.

use crate::error::{AppError, AppResult};
use amazons_engine::constants::DEFAULT_DEPTH_INTERVAL;
use amazons_engine::search::SearchConfig;
use amazons_engine::Move;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Who makes the moves for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Alpha-beta search
    Ai,
    /// Uniformly random legal move
    Random,
}

/// Driver settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Moves played per extra ply of search depth
    pub depth_interval: u32,
    /// Search exactly this deep instead of following the game phase
    pub fixed_depth: Option<u32>,
    /// Stop a session after this many plies even if nobody has won
    pub max_plies: Option<u32>,
    pub white: PlayerKind,
    pub black: PlayerKind,
    /// Seed for random players; Black uses `seed + 1`
    pub seed: u64,
    /// Moves in `d1-d7(g7)` notation played before the players take over
    pub opening: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            depth_interval: DEFAULT_DEPTH_INTERVAL,
            fixed_depth: None,
            max_plies: None,
            white: PlayerKind::Ai,
            black: PlayerKind::Ai,
            seed: 0,
            opening: Vec::new(),
        }
    }
}

impl Settings {
    /// Rejects values the engine cannot use.
    pub fn validate(&self) -> AppResult<()> {
        if self.depth_interval == 0 {
            return Err(AppError::InvalidSetting {
                message: "depth_interval must be greater than 0".to_string(),
            });
        }
        if self.fixed_depth == Some(0) {
            return Err(AppError::InvalidSetting {
                message: "fixed_depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            depth_interval: self.depth_interval,
            fixed_depth: self.fixed_depth,
        }
    }

    /// Parses the opening moves.
    pub fn opening_moves(&self) -> AppResult<Vec<Move>> {
        self.opening
            .iter()
            .map(|text| text.parse::<Move>().map_err(AppError::from))
            .collect()
    }
}

/// Default settings file location
///
/// E.g. `~/.config/amazons/settings.json` on Linux. Falls back to a local
/// `settings.json` if the system config dir cannot be found.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "amazons") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and validate settings from `path`.
pub fn try_load_settings(path: &Path) -> AppResult<Settings> {
    let contents = fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&contents)?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings from `path`, using defaults if the file is missing or bad.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return Settings::default();
    }
    match try_load_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            Settings::default()
        }
    }
}

/// Write `settings` to `path` as pretty JSON, creating parent directories.
pub fn save_settings(settings: &Settings, path: &Path) -> AppResult<()> {
    settings.validate()?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
