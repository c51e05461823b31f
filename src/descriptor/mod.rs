//! Flat-file application descriptor parsing
//!
//! Each available application is described by one `Key = Value` text file.
//! Lookups are stateless single-shot reads: absence of a key, an unreadable
//! file, or a vanished file are all normal outcomes and surface as `None`
//! (or zero for the integer variant), never as errors.

use std::fs;
use std::path::Path;

/// Descriptor file extension inside the watched directory
pub const DESCRIPTOR_EXT: &str = "txt";

/// Read a named string field from a descriptor file.
///
/// Key comparison is case-insensitive and the first occurrence wins.
/// Blank lines and `;`/`#` comment lines are skipped.
pub fn get_string(path: &Path, key: &str) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        if k.trim().eq_ignore_ascii_case(key) {
            let value = v.trim();
            if value.is_empty() {
                return None;
            }
            return Some(value.to_string());
        }
    }

    None
}

/// Read a named integer field, defaulting to zero when absent or non-numeric.
pub fn get_int(path: &Path, key: &str) -> u32 {
    get_string(path, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}
