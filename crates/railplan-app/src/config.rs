//! Settings parser for ~/.config/railplan/config.toml

use std::path::{Path, PathBuf};

use serde::Deserialize;

use railplan_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const RAILPLAN_DIR: &str = "railplan";

fn default_api_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// User-level settings. Every field has a default so a missing or partial
/// config file is never an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Base URL of the computation and drawing service.
    pub api_base_url: String,
    /// Directory exported drawings are written to.
    pub export_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            export_dir: default_export_dir(),
        }
    }
}

impl Settings {
    /// Load settings from the user config directory, falling back to
    /// defaults when no config file exists.
    pub fn load() -> Settings {
        match config_file_path() {
            Some(path) if path.exists() => match Self::load_from(&path) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("failed to parse {}: {e}, using defaults", path.display());
                    Settings::default()
                }
            },
            _ => Settings::default(),
        }
    }

    /// Load settings from an explicit path.
    pub fn load_from(path: &Path) -> Result<Settings> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::config(e.to_string()))
    }
}

/// Path of the user config file, `None` when the platform has no config dir.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(RAILPLAN_DIR).join(CONFIG_FILENAME))
}
