use thiserror::Error;

/// Result type alias for Appdex operations
pub type Result<T> = std::result::Result<T, AppdexError>;

/// Errors that can occur during Appdex operations
#[derive(Error, Debug)]
pub enum AppdexError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The watched descriptor directory could not be populated
    #[error("No application descriptors available in {0} (database download or extraction failed)")]
    DatabaseUnavailable(String),

    /// The bundle archive is missing or could not be unpacked
    #[error("Failed to extract application database archive: {0}")]
    Extract(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote server rejected the bundle download
    #[error("Database download failed (HTTP {status}): {url}")]
    Download { status: u16, url: String },

    /// JSON serialization error
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("Failed to write config file: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Application not found in the database
    #[error("Application not found: {0}")]
    AppNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Environment variable error
    #[error("Environment error: {0}")]
    Env(#[from] std::env::VarError),
}

impl AppdexError {
    /// Create a download error from HTTP status and URL
    pub fn download(status: u16, url: impl Into<String>) -> Self {
        Self::Download {
            status,
            url: url.into(),
        }
    }

    /// Exit code for the CLI wrapper
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 2,
            Self::AppNotFound(_) => 3,
            _ => 1,
        }
    }
}
