//! Cached application record

use std::time::SystemTime;

use serde::Serialize;

/// Category value marking a descriptor that is not a distributable
/// application; such entries are excluded from every enumeration.
pub const CATEGORY_NONE: u32 = 0;

/// Human-readable category names, indexed by descriptor `Category` value
pub fn category_name(category: u32) -> &'static str {
    match category {
        1 => "Audio",
        2 => "Video",
        3 => "Graphics",
        4 => "Games",
        5 => "Internet",
        6 => "Office",
        7 => "Development",
        8 => "Education",
        9 => "Engineering",
        10 => "Finance",
        11 => "Science",
        12 => "Security",
        13 => "Tools",
        14 => "Drivers",
        15 => "Libraries",
        16 => "Other",
        _ => "Unknown",
    }
}

/// Lazily loaded descriptor fields.
///
/// `name` and `url_download` are mandatory: a record missing either cannot
/// be presented or downloaded and is skipped during enumeration. Everything
/// else is independently optional.
#[derive(Debug, Clone, Serialize)]
pub struct AppDetails {
    pub name: String,
    pub url_download: String,
    pub reg_name: Option<String>,
    pub version: Option<String>,
    pub license: Option<String>,
    pub description: Option<String>,
    pub size: Option<String>,
    pub url_site: Option<String>,
    pub cd_path: Option<String>,
    pub sha1: Option<String>,
}

/// One cached record per descriptor file, keyed by filename.
///
/// The category and modification stamp are filled when the entry is built;
/// the detail fields are filled at most once, the first time the entry
/// survives an enumeration filter.
#[derive(Debug, Clone, Serialize)]
pub struct AppEntry {
    file_name: String,
    #[serde(skip)]
    cache_stamp: SystemTime,
    category: u32,
    details: Option<AppDetails>,
}

impl AppEntry {
    pub(crate) fn new(file_name: &str, cache_stamp: SystemTime, category: u32) -> Self {
        Self {
            file_name: file_name.to_string(),
            cache_stamp,
            category,
            details: None,
        }
    }

    /// The on-disk descriptor file name this entry was built from
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Modification time observed when this entry was (re)built
    pub fn cache_stamp(&self) -> SystemTime {
        self.cache_stamp
    }

    pub fn category(&self) -> u32 {
        self.category
    }

    /// True when the on-disk modification time has not advanced past the
    /// stamp recorded at the last rebuild. A strictly newer time means the
    /// entry is stale and must be rebuilt before use.
    pub fn is_fresh(&self, disk_mtime: SystemTime) -> bool {
        disk_mtime <= self.cache_stamp
    }

    /// Whether the lazy detail fields have been populated
    pub fn details_loaded(&self) -> bool {
        self.details.is_some()
    }

    pub fn details(&self) -> Option<&AppDetails> {
        self.details.as_ref()
    }

    /// Populate the lazy fields. Write-once: a second call is a no-op and
    /// leaves the already-loaded fields untouched.
    pub fn fill_details(&mut self, details: AppDetails) {
        if self.details.is_none() {
            self.details = Some(details);
        }
    }
}
