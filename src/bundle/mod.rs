//! Database bundle acquisition and extraction
//!
//! The descriptor directory is seeded from a compressed bundle downloaded
//! from the configured database URL. Fetching is fire-and-forget: a failed
//! download only leaves the directory possibly empty, and enumeration
//! decides whether that is fatal.

use std::fs;
use std::path::Path;
use std::time::Duration;

use flate2::read::GzDecoder;
use reqwest::blocking::Client;

use crate::error::{AppdexError, Result};

const USER_AGENT: &str = concat!("appdex/", env!("CARGO_PKG_VERSION"));
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Collaborator that populates the watched directory before enumeration.
///
/// Production code uses [`HttpBootstrap`]; tests substitute scripted
/// implementations.
pub trait Bootstrap {
    /// Make sure the bundle archive exists at `archive`, downloading it from
    /// `url` if absent. Failures are swallowed; the caller observes them
    /// indirectly when the directory stays empty.
    fn ensure_bundle_fetched(&self, url: &str, archive: &Path);

    /// Unpack the bundle archive into `dest`, overwriting existing files.
    fn extract_bundle(&self, archive: &Path, dest: &Path) -> Result<()>;
}

/// Downloads the gzip-compressed tar bundle over HTTP and unpacks it
pub struct HttpBootstrap {
    client: Client,
}

impl HttpBootstrap {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()?;

        Ok(Self { client })
    }

    fn download(&self, url: &str, archive: &Path) -> Result<()> {
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppdexError::download(status.as_u16(), url));
        }

        let bytes = response.bytes()?;
        if let Some(parent) = archive.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(archive, &bytes)?;
        Ok(())
    }
}

impl Bootstrap for HttpBootstrap {
    fn ensure_bundle_fetched(&self, url: &str, archive: &Path) {
        if archive.exists() {
            return;
        }
        let _ = self.download(url, archive);
    }

    fn extract_bundle(&self, archive: &Path, dest: &Path) -> Result<()> {
        let file = fs::File::open(archive)
            .map_err(|e| AppdexError::Extract(format!("{}: {e}", archive.display())))?;

        fs::create_dir_all(dest)?;

        let mut tarball = tar::Archive::new(GzDecoder::new(file));
        tarball
            .unpack(dest)
            .map_err(|e| AppdexError::Extract(format!("{}: {e}", archive.display())))?;

        Ok(())
    }
}
