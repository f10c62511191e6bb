//! # Configuration
//!
//! Handles the optional project configuration stored at `.sniffgo` in the
//! working directory. A missing file means defaults; no environment variables
//! are consulted.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, DEFAULT_NOTES_DIR};

/// Project configuration stored at `.sniffgo` in the working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory name for storing notes (default: "notes")
    #[serde(default = "default_notes_dir")]
    pub notes_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notes_dir: DEFAULT_NOTES_DIR.to_string(),
        }
    }
}

fn default_notes_dir() -> String {
    DEFAULT_NOTES_DIR.to_string()
}

impl Config {
    /// Loads the config from `.sniffgo` in the working directory.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Loads the config from `.sniffgo` in the given directory.
    ///
    /// A missing file yields the default configuration.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Saves the config to `.sniffgo` in the given directory.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let path = dir.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }

    /// Returns the notes directory path.
    pub fn notes_path(&self) -> PathBuf {
        PathBuf::from(&self.notes_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.notes_dir, "notes");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config::load_from(dir.path()).expect("load should succeed");
        assert_eq!(config.notes_dir, "notes");
    }

    #[test]
    fn test_load_custom_notes_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(CONFIG_FILE), "notes_dir = \"journal\"\n").expect("write");

        let config = Config::load_from(dir.path()).expect("load should succeed");
        assert_eq!(config.notes_dir, "journal");
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config {
            notes_dir: "scratch".to_string(),
        };

        config.save(dir.path()).expect("save should succeed");
        let loaded = Config::load_from(dir.path()).expect("load should succeed");
        assert_eq!(loaded.notes_dir, "scratch");
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(CONFIG_FILE), "notes_dir = [").expect("write");

        assert!(Config::load_from(dir.path()).is_err());
    }
}
