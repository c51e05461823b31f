//! In-memory store of cached application records

use std::collections::HashMap;
use std::time::SystemTime;

use super::entry::AppEntry;

/// Owned collection of cache entries, keyed by case-insensitive descriptor
/// file name. At most one entry exists per distinct filename.
///
/// The store is process-lifetime state shared across enumeration passes so
/// that unchanged descriptor files are never re-parsed. It provides no
/// internal locking; callers serialize access.
#[derive(Debug, Default)]
pub struct AppStore {
    entries: HashMap<String, AppEntry>,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(file_name: &str) -> String {
        file_name.to_ascii_lowercase()
    }

    /// Case-insensitive lookup by descriptor file name
    pub fn lookup(&self, file_name: &str) -> Option<&AppEntry> {
        self.entries.get(&Self::key(file_name))
    }

    pub(crate) fn lookup_mut(&mut self, file_name: &str) -> Option<&mut AppEntry> {
        self.entries.get_mut(&Self::key(file_name))
    }

    /// Insert a freshly built entry, replacing any previous entry for the
    /// same filename wholesale. The replacement starts with its detail
    /// fields unloaded; partial overwrites of an existing entry never occur.
    pub fn upsert(
        &mut self,
        file_name: &str,
        cache_stamp: SystemTime,
        category: u32,
    ) -> &mut AppEntry {
        use std::collections::hash_map::Entry;

        let entry = AppEntry::new(file_name, cache_stamp, category);
        match self.entries.entry(Self::key(file_name)) {
            Entry::Occupied(mut slot) => {
                slot.insert(entry);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(entry),
        }
    }

    /// Destroy every cached entry. Safe to call on an empty store.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::entry::AppDetails;
    use std::time::Duration;

    fn stamp(secs: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
    }

    fn sample_details(name: &str) -> AppDetails {
        AppDetails {
            name: name.to_string(),
            url_download: format!("https://example.com/{name}.exe"),
            reg_name: None,
            version: None,
            license: None,
            description: None,
            size: None,
            url_site: None,
            cd_path: None,
            sha1: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Identity Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut store = AppStore::new();
        store.upsert("Firefox.txt", stamp(100), 5);

        assert!(store.lookup("firefox.txt").is_some());
        assert!(store.lookup("FIREFOX.TXT").is_some());
        assert!(store.lookup("chrome.txt").is_none());
    }

    #[test]
    fn test_upsert_keeps_one_entry_per_filename() {
        let mut store = AppStore::new();
        store.upsert("app.txt", stamp(100), 1);
        store.upsert("App.txt", stamp(200), 2);
        store.upsert("APP.TXT", stamp(300), 3);

        assert_eq!(store.len(), 1);
        assert_eq!(store.lookup("app.txt").unwrap().category(), 3);
    }

    #[test]
    fn test_upsert_replacement_resets_details() {
        let mut store = AppStore::new();
        store
            .upsert("app.txt", stamp(100), 1)
            .fill_details(sample_details("Sample"));
        assert!(store.lookup("app.txt").unwrap().details_loaded());

        store.upsert("app.txt", stamp(200), 1);
        let entry = store.lookup("app.txt").unwrap();
        assert!(!entry.details_loaded());
        assert_eq!(entry.cache_stamp(), stamp(200));
    }

    #[test]
    fn test_preserves_original_filename_case() {
        let mut store = AppStore::new();
        store.upsert("FireFox.txt", stamp(100), 5);

        assert_eq!(store.lookup("firefox.txt").unwrap().file_name(), "FireFox.txt");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Freshness Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_entry_fresh_when_mtime_not_newer() {
        let mut store = AppStore::new();
        store.upsert("app.txt", stamp(100), 1);
        let entry = store.lookup("app.txt").unwrap();

        assert!(entry.is_fresh(stamp(100)));
        assert!(entry.is_fresh(stamp(50)));
        assert!(!entry.is_fresh(stamp(101)));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Fill-Once Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_fill_details_is_write_once() {
        let mut store = AppStore::new();
        let entry = store.upsert("app.txt", stamp(100), 1);

        entry.fill_details(sample_details("First"));
        entry.fill_details(sample_details("Second"));

        assert_eq!(store.lookup("app.txt").unwrap().details().unwrap().name, "First");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Teardown Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_clear_removes_everything() {
        let mut store = AppStore::new();
        store.upsert("a.txt", stamp(1), 1);
        store.upsert("b.txt", stamp(2), 2);

        store.clear();

        assert!(store.is_empty());
        assert!(store.lookup("a.txt").is_none());
        assert!(store.lookup("b.txt").is_none());
    }

    #[test]
    fn test_clear_on_empty_store() {
        let mut store = AppStore::new();
        store.clear();
        assert!(store.is_empty());
    }
}
