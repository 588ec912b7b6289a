//! Application configuration management.
//!
//! Persists settings as TOML under the XDG config directory.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Window geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub x: i32,
    pub y: i32,
    pub maximized: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 760,
            x: 100,
            y: 100,
            maximized: false,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Custom log directory (XDG data dir when None).
    pub log_dir: Option<PathBuf>,
    /// Log level (trace/debug/info/warn/error).
    pub log_level: String,
    /// Enable daily-rotated file output in addition to stderr.
    pub enable_file_logging: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            log_level: "info".to_string(),
            enable_file_logging: false,
        }
    }
}

/// Analytics backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the admin analytics service.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Loads and saves the TOML config file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        Ok(Self { config_path })
    }

    /// Manager backed by an explicit file, used by tests.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    fn get_config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("dev", "insight", "insight-chat")
            .context("Failed to get project directories")?;

        let config_file = project_dirs.config_dir().join("config.toml");
        debug!("Config file path: {}", config_file.display());

        Ok(config_file)
    }

    pub fn load_config(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            info!(
                "Config file not found, using default settings: {}",
                self.config_path.display()
            );
            return Ok(AppConfig::default());
        }

        let config_content = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config: AppConfig = toml::from_str(&config_content).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        info!(
            "✅ Configuration loaded from: {}",
            self.config_path.display()
        );

        Ok(config)
    }

    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        let config_content =
            toml::to_string_pretty(config).context("Failed to serialize config")?;

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&self.config_path, config_content).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        info!("💾 Configuration saved to: {}", self.config_path.display());

        Ok(())
    }

    pub fn get_config_file_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn config_exists(&self) -> bool {
        self.config_path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.log.log_level, "info");
        assert!(!config.log.enable_file_logging);
        assert_eq!(config.window.width, 1000);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let manager = ConfigManager::with_path("/nonexistent/insight-chat/config.toml");
        let config = manager.load_config().unwrap();
        assert_eq!(config.api.base_url, AppConfig::default().api.base_url);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = std::env::temp_dir().join("insight-chat-test-config");
        std::fs::remove_dir_all(&dir).ok();
        let path = dir.join("config.toml");

        let manager = ConfigManager::with_path(&path);
        let mut config = AppConfig::default();
        config.api.base_url = "https://analytics.example.com".to_string();
        config.window.maximized = true;

        manager.save_config(&config).unwrap();
        let loaded = manager.load_config().unwrap();
        assert_eq!(loaded.api.base_url, "https://analytics.example.com");
        assert!(loaded.window.maximized);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_partial_toml_uses_section_defaults() {
        let dir = std::env::temp_dir().join("insight-chat-test-config-partial");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[api]\nbase_url = \"http://10.0.0.5:9000\"\n").unwrap();

        let manager = ConfigManager::with_path(&path);
        let config = manager.load_config().unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.5:9000");
        assert_eq!(config.log.log_level, "info");

        std::fs::remove_dir_all(&dir).ok();
    }
}
