// ABOUTME: Configuration management for the promptforge application
// ABOUTME: Handles loading and merging configuration from files and environment

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::template::DelimiterStyle;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Catalog consulted when a render command names no catalog explicitly
    #[serde(default)]
    pub default_catalog: Option<PathBuf>,

    /// Delimiter syntax for free-form templates
    #[serde(default)]
    pub syntax: DelimiterStyle,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_catalog: None,
            syntax: DelimiterStyle::Bracket,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::find_config_file()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let mut config: Config = serde_yaml::from_str(&contents)?;

            config.merge_env()?;

            Ok(config)
        } else {
            let mut config = Config::default();
            config.merge_env()?;
            Ok(config)
        }
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Result<PathBuf> {
        let possible_paths = vec![
            PathBuf::from("promptforge.yaml"),
            PathBuf::from("promptforge.yml"),
            PathBuf::from(".promptforge.yaml"),
            PathBuf::from(".promptforge.yml"),
        ];

        // Check home directory
        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".promptforge").join("config.yaml");
            if home_config.exists() {
                return Ok(home_config);
            }
        }

        // Check current directory
        for path in possible_paths {
            if path.exists() {
                return Ok(path);
            }
        }

        // Return default path (may not exist)
        Ok(PathBuf::from("promptforge.yaml"))
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) -> Result<()> {
        if let Ok(catalog) = std::env::var("PROMPTFORGE_CATALOG") {
            self.default_catalog = Some(PathBuf::from(catalog));
        }

        if let Ok(syntax) = std::env::var("PROMPTFORGE_SYNTAX") {
            self.syntax = syntax
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
        }

        if let Ok(level) = std::env::var("PROMPTFORGE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("PROMPTFORGE_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }
}
