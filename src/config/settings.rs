use serde::{Deserialize, Serialize};
use std::fs;

use super::paths::Paths;
use crate::error::{AppdexError, Result};

/// Default location of the compressed application database
pub const DEFAULT_DATABASE_URL: &str = "https://appdex.example.org/db/appdex.tar.gz";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Database source configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the descriptor bundle is downloaded from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Override for the bundle download URL
    pub url: Option<String>,
}

/// Output formatting preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "pretty".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let paths = Paths::new()?;
        Self::load_from(&paths)
    }

    /// Load configuration from a specific paths instance
    pub fn load_from(paths: &Paths) -> Result<Self> {
        if !paths.config_exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&paths.config_file)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let paths = Paths::new()?;
        self.save_to(&paths)
    }

    /// Save configuration to a specific paths instance
    pub fn save_to(&self, paths: &Paths) -> Result<()> {
        paths.ensure_dirs()?;
        let contents = toml::to_string_pretty(self)?;
        fs::write(&paths.config_file, &contents)?;
        Ok(())
    }

    /// The effective bundle download URL
    pub fn database_url(&self) -> &str {
        self.database.url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    /// Set the database URL override, validating it first
    pub fn set_database_url(&mut self, value: &str) -> Result<()> {
        let parsed = url::Url::parse(value)
            .map_err(|_| AppdexError::InvalidArgument(format!("Invalid database URL: {value}")))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(AppdexError::InvalidArgument(format!(
                "Database URL must be http(s): {value}"
            )));
        }

        self.database.url = Some(value.to_string());
        Ok(())
    }
}
