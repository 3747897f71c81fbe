use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("prepare_seconds must be at least 1, got {0}")]
    PrepareTooShort(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HangboardConfig {
    /// Where custom protocols, history and the log file live.
    /// Defaults to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Ring the terminal bell on cues.
    #[serde(default = "default_sound")]
    pub sound: bool,

    /// Length of the GET READY countdown.
    #[serde(default = "default_prepare_seconds")]
    pub prepare_seconds: u32,
}

fn default_sound() -> bool {
    true
}

fn default_prepare_seconds() -> u32 {
    hangboard::PREPARE_SECONDS
}

impl Default for HangboardConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            sound: default_sound(),
            prepare_seconds: default_prepare_seconds(),
        }
    }
}

impl HangboardConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("hangboard")
            .join("config.toml"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Invalid config at {}", path.display()))
    }

    fn parse(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prepare_seconds == 0 {
            return Err(ConfigError::PrepareTooShort(self.prepare_seconds));
        }
        Ok(())
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(dirs::data_dir()
                .context("Cannot determine data directory")?
                .join("hangboard")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = HangboardConfig::parse("").unwrap();
        assert_eq!(config, HangboardConfig::default());
        assert!(config.sound);
        assert_eq!(config.prepare_seconds, 5);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = HangboardConfig::parse("sound = false\ndata_dir = \"/tmp/hb\"").unwrap();
        assert!(!config.sound);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/hb")));
        assert_eq!(config.prepare_seconds, 5);
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/tmp/hb"));
    }

    #[test]
    fn zero_prepare_is_rejected() {
        assert!(HangboardConfig::parse("prepare_seconds = 0").is_err());
        assert_eq!(
            HangboardConfig {
                prepare_seconds: 0,
                ..HangboardConfig::default()
            }
            .validate(),
            Err(ConfigError::PrepareTooShort(0))
        );
    }

    #[test]
    fn default_round_trips_through_toml() {
        let raw = toml::to_string_pretty(&HangboardConfig::default()).unwrap();
        assert!(!raw.contains("data_dir"));
        assert_eq!(
            HangboardConfig::parse(&raw).unwrap(),
            HangboardConfig::default()
        );
    }
}
