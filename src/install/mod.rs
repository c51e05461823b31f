//! Installed-application detection
//!
//! Consulted by presentation only; the cache and enumeration core never
//! looks at install state. An application counts as installed when a marker
//! named after its registry name exists in the installed-application
//! directory.

use std::path::Path;

/// Check whether the application registered under `reg_name` is installed.
/// An empty or missing registry name is never installed.
pub fn is_installed(installed_dir: &Path, reg_name: &str) -> bool {
    !reg_name.is_empty() && installed_dir.join(reg_name).exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_installed_when_marker_exists() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("7-Zip"), "").unwrap();

        assert!(is_installed(dir.path(), "7-Zip"));
        assert!(!is_installed(dir.path(), "Firefox"));
    }

    #[test]
    fn test_empty_reg_name_is_never_installed() {
        let dir = TempDir::new().unwrap();
        assert!(!is_installed(dir.path(), ""));
    }

    #[test]
    fn test_missing_directory_is_never_installed() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("gone");
        assert!(!is_installed(&gone, "7-Zip"));
    }
}
