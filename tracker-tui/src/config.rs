use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

const APP_DIR: &str = "time-tracker";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Base URL of the time tracking server, e.g. "http://127.0.0.1:5540"
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "http://127.0.0.1:5540".to_string()
}

fn default_timeout_secs() -> u64 {
    tracker_client::DEFAULT_TIMEOUT.as_secs()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TrackerConfig {
    fn app_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join(APP_DIR))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("tracker.log"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
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

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(TrackerConfig::parse("").unwrap(), TrackerConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = TrackerConfig::parse(r#"api_url = "https://tracker.example.org""#).unwrap();
        assert_eq!(config.api_url, "https://tracker.example.org");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn default_timeout_matches_client() {
        assert_eq!(TrackerConfig::default().timeout(), tracker_client::DEFAULT_TIMEOUT);
        assert_eq!(TrackerConfig::default().timeout_secs, 10);
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let raw = toml::to_string_pretty(&TrackerConfig::default()).unwrap();
        assert!(raw.contains("api_url = \"http://127.0.0.1:5540\""));
        assert_eq!(TrackerConfig::parse(&raw).unwrap(), TrackerConfig::default());
    }

    #[test]
    fn log_lives_next_to_config() {
        let (Ok(config), Ok(log)) = (TrackerConfig::config_path(), TrackerConfig::log_path())
        else {
            return;
        };
        assert_eq!(config.parent(), log.parent());
        assert!(log.ends_with("time-tracker/tracker.log"));
    }
}
