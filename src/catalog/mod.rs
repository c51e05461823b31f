//! Reconciliation and enumeration of available applications
//!
//! A single enumeration pass walks the watched descriptor directory,
//! reconciles each file against the in-memory cache (reuse fresh entries,
//! rebuild stale ones, create missing ones), applies the category filter,
//! completes lazy fields on demand, and hands each surviving record to a
//! caller-supplied visitor.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::bundle::{Bootstrap, HttpBootstrap};
use crate::cache::{AppDetails, AppEntry, AppStore, CATEGORY_NONE};
use crate::config::{Config, Paths};
use crate::descriptor::{self, DESCRIPTOR_EXT};
use crate::error::{AppdexError, Result};

/// Which categories an enumeration pass should visit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every distributable application
    All,
    /// Only applications with exactly this category
    Only(u32),
}

impl CategoryFilter {
    fn matches(self, category: u32) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => category == wanted,
        }
    }
}

/// Visitor verdict after seeing one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Continue,
    /// Terminate the pass immediately; not an error
    Stop,
}

/// One descriptor file observed on disk during a pass
struct DiskDescriptor {
    file_name: String,
    path: PathBuf,
    mtime: SystemTime,
}

/// The application catalog: watched directory, bundle source, and the
/// process-lifetime record cache.
///
/// Not internally synchronized; callers serialize enumeration passes.
/// Entry references handed to visitors are valid only for the duration of
/// the individual visitor call.
pub struct AppCatalog {
    apps_dir: PathBuf,
    bundle_file: PathBuf,
    database_url: String,
    bootstrap: Box<dyn Bootstrap>,
    store: AppStore,
}

impl AppCatalog {
    /// Create a catalog over the configured storage paths, using the HTTP
    /// bundle bootstrap
    pub fn new(paths: &Paths, config: &Config) -> Result<Self> {
        Ok(Self::with_bootstrap(
            paths,
            config.database_url(),
            Box::new(HttpBootstrap::new()?),
        ))
    }

    /// Create a catalog with an explicit bootstrap collaborator
    pub fn with_bootstrap(paths: &Paths, database_url: &str, bootstrap: Box<dyn Bootstrap>) -> Self {
        Self {
            apps_dir: paths.apps_dir.clone(),
            bundle_file: paths.bundle_file.clone(),
            database_url: database_url.to_string(),
            bootstrap,
            store: AppStore::new(),
        }
    }

    /// Number of records currently cached
    pub fn cached_len(&self) -> usize {
        self.store.len()
    }

    /// Destroy every cached record. The next enumeration rebuilds from disk.
    pub fn clear_cache(&mut self) {
        self.store.clear();
    }

    /// Look up a cached record by descriptor file name (case-insensitive)
    pub fn cached(&self, file_name: &str) -> Option<&AppEntry> {
        self.store.lookup(file_name)
    }

    /// Enumerate every available application matching `filter`, invoking
    /// `visitor` once per well-formed matching record in directory listing
    /// order. A [`Visit::Stop`] verdict ends the pass early and still counts
    /// as success.
    ///
    /// If the watched directory holds no descriptors, the bundle bootstrap
    /// is asked to populate it and the listing is retried exactly once.
    pub fn enumerate<F>(&mut self, filter: CategoryFilter, mut visitor: F) -> Result<()>
    where
        F: FnMut(&AppEntry) -> Visit,
    {
        let mut files = list_descriptors(&self.apps_dir);
        if files.is_empty() {
            self.bootstrap
                .ensure_bundle_fetched(&self.database_url, &self.bundle_file);
            // Extraction failure matters only if the directory stays empty
            let _ = self
                .bootstrap
                .extract_bundle(&self.bundle_file, &self.apps_dir);

            files = list_descriptors(&self.apps_dir);
            if files.is_empty() {
                return Err(AppdexError::DatabaseUnavailable(
                    self.apps_dir.display().to_string(),
                ));
            }
        }

        for file in &files {
            let needs_rebuild = match self.store.lookup(&file.file_name) {
                Some(entry) => !entry.is_fresh(file.mtime),
                None => true,
            };

            let entry = if needs_rebuild {
                let category = descriptor::get_int(&file.path, "Category");
                self.store.upsert(&file.file_name, file.mtime, category)
            } else {
                match self.store.lookup_mut(&file.file_name) {
                    Some(entry) => entry,
                    // freshness check just found it; cannot happen
                    None => continue,
                }
            };

            // Not a distributable application; excluded regardless of filter
            if entry.category() == CATEGORY_NONE {
                continue;
            }

            if !filter.matches(entry.category()) {
                continue;
            }

            if !entry.details_loaded() {
                // Skip without marking loaded so a later pass can retry a
                // descriptor that is malformed rather than stale
                let Some(details) = load_details(&file.path) else {
                    continue;
                };
                entry.fill_details(details);
            }

            if visitor(entry) == Visit::Stop {
                return Ok(());
            }
        }

        Ok(())
    }

    /// Delete the on-disk database (bundle archive plus every descriptor),
    /// re-download it, and re-extract. The in-memory cache is cleared so the
    /// next enumeration rebuilds from the fresh files.
    pub fn update_database(&mut self) -> Result<()> {
        self.delete_database_files()?;

        self.bootstrap
            .ensure_bundle_fetched(&self.database_url, &self.bundle_file);
        self.bootstrap
            .extract_bundle(&self.bundle_file, &self.apps_dir)?;

        self.store.clear();
        Ok(())
    }

    /// Remove the bundle archive and every descriptor file. A partially
    /// present or absent database is not an error.
    pub fn delete_database_files(&self) -> Result<()> {
        if self.bundle_file.exists() {
            fs::remove_file(&self.bundle_file)?;
        }

        for file in list_descriptors(&self.apps_dir) {
            fs::remove_file(&file.path)?;
        }

        Ok(())
    }
}

/// List descriptor files in the watched directory, in listing order.
/// An unlistable or absent directory yields an empty list; the caller
/// decides whether to bootstrap.
fn list_descriptors(apps_dir: &Path) -> Vec<DiskDescriptor> {
    let Ok(read_dir) = fs::read_dir(apps_dir) else {
        return Vec::new();
    };

    let mut files = Vec::new();
    for dir_entry in read_dir.flatten() {
        let path = dir_entry.path();

        let is_descriptor = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(DESCRIPTOR_EXT));
        if !is_descriptor || !path.is_file() {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        // A file vanishing between listing and stat is treated as unlisted
        let Ok(mtime) = dir_entry.metadata().and_then(|m| m.modified()) else {
            continue;
        };

        files.push(DiskDescriptor {
            file_name: file_name.to_string(),
            path,
            mtime,
        });
    }

    files
}

/// Parse the lazy detail fields from a descriptor file. Returns `None` when
/// either mandatory field (`Name`, `URLDownload`) is unobtainable; optional
/// fields default to absent independently.
fn load_details(path: &Path) -> Option<AppDetails> {
    let name = descriptor::get_string(path, "Name")?;
    let url_download = descriptor::get_string(path, "URLDownload")?;

    Some(AppDetails {
        name,
        url_download,
        reg_name: descriptor::get_string(path, "RegName"),
        version: descriptor::get_string(path, "Version"),
        license: descriptor::get_string(path, "License"),
        description: descriptor::get_string(path, "Description"),
        size: descriptor::get_string(path, "Size"),
        url_site: descriptor::get_string(path, "URLSite"),
        cd_path: descriptor::get_string(path, "CDPath"),
        sha1: descriptor::get_string(path, "SHA1"),
    })
}
