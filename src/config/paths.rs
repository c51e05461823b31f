use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Name of the descriptor subdirectory under the storage root
const APPS_SUBDIR: &str = "apps";
/// Name of the downloaded database bundle, a sibling of the apps directory
const BUNDLE_NAME: &str = "appdex.tar.gz";
/// Name of the installed-application marker directory
const INSTALLED_SUBDIR: &str = "installed";

/// Manages paths for Appdex configuration and data
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root storage directory (~/.appdex)
    pub root: PathBuf,
    /// Configuration file path (~/.appdex/config.toml)
    pub config_file: PathBuf,
    /// Watched directory holding one descriptor file per application
    pub apps_dir: PathBuf,
    /// Compressed database bundle, sibling of the apps directory
    pub bundle_file: PathBuf,
    /// Directory of installed-application markers
    pub installed_dir: PathBuf,
}

impl Paths {
    /// Create a new Paths instance using the user's home directory
    pub fn new() -> Result<Self> {
        let home = std::env::var("HOME")?;
        Ok(Self::under(PathBuf::from(home).join(".appdex")))
    }

    /// Create a Paths instance rooted at an explicit directory
    pub fn under(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_file: root.join("config.toml"),
            apps_dir: root.join(APPS_SUBDIR),
            bundle_file: root.join(BUNDLE_NAME),
            installed_dir: root.join(INSTALLED_SUBDIR),
            root,
        }
    }

    /// Ensure the storage directories exist
    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::create_dir_all(&self.apps_dir)?;
        Ok(())
    }

    /// Check if the config file exists
    pub fn config_exists(&self) -> bool {
        self.config_file.exists()
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self::under(Path::new(".appdex")))
    }
}
