//! User color configuration, stored as JSON

use crate::error::{QError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UserConfig {
    pub colors: ColorConfig,
}

/// Hex color strings for each rendering role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    #[serde(rename = "box")]
    pub box_color: String,
    pub title: String,
    pub default: String,
    pub empty: String,
    pub types: TypeColors,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeColors {
    pub directory: String,
    pub file: String,
    pub image: String,
    pub video: String,
    /// Overrides keyed by type tag ("dir", "image", ...)
    pub custom: BTreeMap<String, String>,
}

impl Default for ColorConfig {
    fn default() -> Self {
        ColorConfig {
            box_color: "#00FFFF".to_string(),
            title: "#FFFFFF".to_string(),
            default: "#FFFFFF".to_string(),
            empty: "#FFFF00".to_string(),
            types: TypeColors::default(),
        }
    }
}

impl Default for TypeColors {
    fn default() -> Self {
        TypeColors {
            directory: "#0000FF".to_string(),
            file: "#FFFFFF".to_string(),
            image: "#00FF00".to_string(),
            video: "#FF00FF".to_string(),
            custom: BTreeMap::new(),
        }
    }
}

impl UserConfig {
    /// Get the config file path (~/.config/q/q.json on Linux)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("q").join("q.json"))
    }

    /// Load config from the per-user location, creating it with defaults if absent
    pub fn load() -> Result<Self> {
        let path = Self::config_path().ok_or_else(|| {
            QError::Config("Could not determine config directory".to_string())
        })?;
        Self::load_from(&path)
    }

    /// Load config from `path`.
    ///
    /// A missing or unparsable file is replaced with the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            log::info!("Created default config at {}", path.display());
            return Ok(config);
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            QError::Config(format!("Failed to read config file: {}", e))
        })?;

        match serde_json::from_str(&contents) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!(
                    "Failed to parse config file {}: {}; restoring defaults",
                    path.display(),
                    e
                );
                let config = Self::default();
                config.save_to(path)?;
                Ok(config)
            }
        }
    }

    /// Save config to the per-user location
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or_else(|| {
            QError::Config("Could not determine config directory".to_string())
        })?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                QError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            QError::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, contents).map_err(|e| {
            QError::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }
}
