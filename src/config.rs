//! Configuration management
//!
//! Manages the knowledge file location, server settings, and the locale
//! table. Stored as TOML under the platform config directory; defaults are
//! written on first run.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::locale::LocaleTable;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Knowledge store settings
    #[serde(default)]
    pub store: StoreConfig,
    /// Web server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Supported languages; the first entry is the default
    #[serde(default)]
    pub locales: LocaleTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the conversations file
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

fn default_store_path() -> PathBuf {
    data_dir()
        .map(|dir| dir.join("conversations.txt"))
        .unwrap_or_else(|_| PathBuf::from("conversations.txt"))
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Origins allowed to call the API from a browser; empty allows any
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_allowed_origins() -> Vec<String> {
    // Browser dev frontend
    vec!["http://localhost:3000".to_string()]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            server: ServerConfig::default(),
            locales: LocaleTable::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let config_path = config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            let mut config: Config = toml::from_str(&contents)
                .context("Failed to parse config file")?;
            // An empty locale list would leave no default language
            if config.locales.packs.is_empty() {
                config.locales = LocaleTable::default();
            }
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = config_path()?;
        let parent = config_path.parent().context("Config path has no parent")?;

        std::fs::create_dir_all(parent).context("Failed to create config directory")?;

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&config_path, contents).context("Failed to write config file")?;

        Ok(())
    }
}

/// Get the configuration file path
pub fn config_path() -> Result<PathBuf> {
    let base = directories::ProjectDirs::from("com", "chat-agent", "chat-agent")
        .context("Failed to get project directories")?;
    Ok(base.config_dir().join("config.toml"))
}

/// Get the data directory path
pub fn data_dir() -> Result<PathBuf> {
    let base = directories::ProjectDirs::from("com", "chat-agent", "chat-agent")
        .context("Failed to get project directories")?;
    Ok(base.data_dir().to_path_buf())
}

/// Show current configuration
pub fn show_config(config: &Config) {
    println!("Knowledge store:");
    println!("  path:            {}", config.store.path.display());
    println!();
    println!("Server:");
    println!("  host:            {}", config.server.host);
    println!("  port:            {}", config.server.port);
    println!(
        "  allowed origins: {}",
        if config.server.allowed_origins.is_empty() {
            "any".to_string()
        } else {
            config.server.allowed_origins.join(", ")
        }
    );
    println!();
    println!("Locales:");
    for pack in &config.locales.packs {
        println!(
            "  {:<4} date: [{}]  time: [{}]",
            pack.code,
            pack.date_triggers.join(", "),
            pack.time_triggers.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip_through_toml() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();

        assert_eq!(parsed.server.port, 8000);
        assert_eq!(parsed.server.allowed_origins, vec!["http://localhost:3000"]);
        assert_eq!(parsed.locales.packs.len(), 2);
        assert_eq!(parsed.locales.default_pack().code, "en");
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.server.host, "127.0.0.1");
        assert!(!parsed.locales.packs.is_empty());
    }
}
