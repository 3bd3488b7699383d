use serde::Deserialize;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::registers;
use crate::status;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Invalid config format: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnvyConfig {
    /// `q` presses needed to leave a modified buffer
    pub quit_times: u32,
    pub message_timeout_secs: u64,
    pub register_capacity: usize,
    pub log_file: Option<PathBuf>,
    /// Fallback level when `RUST_LOG` is unset
    pub log_level: Option<String>,
}

impl Default for EnvyConfig {
    fn default() -> Self {
        Self {
            quit_times: 2,
            message_timeout_secs: status::DEFAULT_MESSAGE_TIMEOUT.as_secs(),
            register_capacity: registers::DEFAULT_CAPACITY,
            log_file: None,
            log_level: None,
        }
    }
}

impl EnvyConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load the first config file found, falling back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        match find_config_file() {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn message_timeout(&self) -> Duration {
        Duration::from_secs(self.message_timeout_secs)
    }

    /// Log file from the config, else `envy.log` in the platform cache dir
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("envy")
                .join("envy.log")
        })
    }

    /// Open the log file for appending, creating its directory if needed
    pub fn open_log_file(&self) -> std::io::Result<File> {
        let path = self.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(&path)
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(log::LevelFilter::Info)
    }
}

pub fn get_config_dir() -> PathBuf {
    let config_home = dirs::config_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".config")
    });
    config_home.join("envy")
}

pub fn find_config_file() -> Option<PathBuf> {
    let mut paths = vec![get_config_dir().join("config.toml")];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".envy").join("config.toml"));
    }
    paths.into_iter().find(|p| p.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = EnvyConfig::default();
        assert_eq!(config.quit_times, 2);
        assert_eq!(config.message_timeout(), Duration::from_secs(5));
        assert_eq!(config.register_capacity, 255);
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EnvyConfig::from_toml("quit_times = 4\nlog_level = \"debug\"\n").unwrap();
        assert_eq!(config.quit_times, 4);
        assert_eq!(config.register_capacity, 255);
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_toml() {
        let err = EnvyConfig::from_toml("quit_times = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "log_file = \"/tmp/envy-test.log\"").unwrap();
        let config = EnvyConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_path(), PathBuf::from("/tmp/envy-test.log"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = EnvyConfig::from_file(Path::new("/nonexistent/envy.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }

    #[test]
    fn test_open_log_file_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("nested").join("envy.log");
        let config = EnvyConfig {
            log_file: Some(path.clone()),
            ..EnvyConfig::default()
        };
        config.open_log_file().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_log_file_reports_directory_failure() {
        let blocker = NamedTempFile::new().unwrap();
        let config = EnvyConfig {
            log_file: Some(blocker.path().join("sub").join("envy.log")),
            ..EnvyConfig::default()
        };
        assert!(config.open_log_file().is_err());
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = EnvyConfig {
            log_level: Some("loud".to_string()),
            ..EnvyConfig::default()
        };
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
