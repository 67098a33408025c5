//! Configuration management for agentchat
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    BACKEND_URL_ENV, CONFIG_GENERATED, DEFAULT_BACKEND_URL, DEFAULT_ENDPOINT_PATH, DEFAULT_FILE_FIELD,
    DEFAULT_MESSAGE_FIELD, TASK_LOG_DEFAULT_WIDTH, TASK_LOG_MAX_WIDTH, TASK_LOG_MIN_WIDTH,
};
use crate::dispatch::DispatchConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Agent backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Backend origin, overridable with the `AGENTCHAT_BACKEND_URL` env var
    pub base_url: String,
    /// Path of the message endpoint (`/chat` or `/send_message` variants)
    pub endpoint_path: String,
    /// Name of the multipart text field
    pub message_field: String,
    /// Name shared by all multipart file fields
    pub file_field: String,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Show the memory snapshot panel when the backend sends one
    pub show_memory_panel: bool,
    /// Task log width in columns
    pub task_log_width: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable the operational log file
    pub enabled: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
            message_field: DEFAULT_MESSAGE_FIELD.to_string(),
            file_field: DEFAULT_FILE_FIELD.to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            show_memory_panel: true,
            task_log_width: TASK_LOG_DEFAULT_WIDTH,
        }
    }
}

impl BackendConfig {
    /// Resolve the effective base URL, preferring an override when present.
    #[must_use]
    pub fn resolve_base_url(&self, env_override: Option<String>) -> String {
        env_override
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| self.base_url.clone())
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("agentchat.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("agentchat").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !self.backend.base_url.starts_with("http://") && !self.backend.base_url.starts_with("https://") {
            anyhow::bail!(
                "base_url must start with http:// or https://, got '{}'",
                self.backend.base_url
            );
        }

        if !self.backend.endpoint_path.starts_with('/') {
            anyhow::bail!(
                "endpoint_path must start with '/', got '{}'",
                self.backend.endpoint_path
            );
        }

        if self.backend.message_field.trim().is_empty() {
            anyhow::bail!("message_field cannot be empty");
        }

        if self.backend.file_field.trim().is_empty() {
            anyhow::bail!("file_field cannot be empty");
        }

        if self.ui.task_log_width < TASK_LOG_MIN_WIDTH || self.ui.task_log_width > TASK_LOG_MAX_WIDTH {
            anyhow::bail!(
                "task_log_width must be between {} and {} columns, got {}",
                TASK_LOG_MIN_WIDTH,
                TASK_LOG_MAX_WIDTH,
                self.ui.task_log_width
            );
        }

        Ok(())
    }

    /// Build the dispatcher settings, applying the env var override.
    #[must_use]
    pub fn dispatch_config(&self) -> DispatchConfig {
        DispatchConfig {
            base_url: self.backend.resolve_base_url(std::env::var(BACKEND_URL_ENV).ok()),
            endpoint_path: self.backend.endpoint_path.clone(),
            message_field: self.backend.message_field.clone(),
            file_field: self.backend.file_field.clone(),
        }
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Agentchat Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("agentchat"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
