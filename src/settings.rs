//! Application settings and data directory resolution

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "FLASHDECK_DATA_DIR";

const SETTINGS_FILE: &str = "settings.json";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not determine a data directory")]
    DataDirNotFound,
}

type Result<T> = std::result::Result<T, SettingsError>;

/// User-facing settings, stored as settings.json in the data directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Front text for slots with no card
    #[serde(default = "default_placeholder_front")]
    pub placeholder_front: String,
    /// Back text for slots with no card
    #[serde(default = "default_placeholder_back")]
    pub placeholder_back: String,
    /// Show key hints under the carousel
    #[serde(default = "default_show_key_hints")]
    pub show_key_hints: bool,
}

fn default_placeholder_front() -> String {
    "No card".to_string()
}

fn default_placeholder_back() -> String {
    "Add at least five cards to start reviewing".to_string()
}

fn default_show_key_hints() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            placeholder_front: default_placeholder_front(),
            placeholder_back: default_placeholder_back(),
            show_key_hints: default_show_key_hints(),
        }
    }
}

impl Settings {
    /// Load settings, writing the defaults on first run
    pub fn load_or_init(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(SETTINGS_FILE);
        if !path.exists() {
            fs::create_dir_all(data_dir)?;
            let settings = Settings::default();
            settings.save(data_dir)?;
            log::info!("Created default settings at {:?}", path);
            return Ok(settings);
        }

        let content = fs::read_to_string(&path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let path = data_dir.join(SETTINGS_FILE);
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Default data directory (e.g., ~/.local/share/flashdeck)
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_local_dir()
        .map(|p| p.join("flashdeck"))
        .ok_or(SettingsError::DataDirNotFound)
}

/// Explicit path first, then the environment, then the platform default
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    match std::env::var_os(DATA_DIR_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => default_data_dir(),
    }
}
