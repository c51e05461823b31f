use colored::Colorize;

use crate::cache::{category_name, AppEntry};

/// A record with its install status resolved, ready for display
pub struct DisplayRecord<'a> {
    pub entry: &'a AppEntry,
    pub installed: bool,
}

/// Format a list of available applications for pretty output
pub fn format_apps(records: &[DisplayRecord<'_>]) -> String {
    if records.is_empty() {
        return "No applications found.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{}\n", "Available Applications".bold()));
    output.push_str(&"─".repeat(70));
    output.push('\n');

    for record in records {
        let Some(details) = record.entry.details() else {
            continue;
        };

        let status = if record.installed {
            "installed".green()
        } else {
            "not installed".dimmed()
        };

        output.push_str(&format!("{} [{}]\n", details.name.bold(), status));
        output.push_str(&format!(
            "  {} {}\n",
            "Category:".cyan(),
            category_name(record.entry.category())
        ));

        if let Some(ref version) = details.version {
            output.push_str(&format!("  {} {}\n", "Version:".cyan(), version));
        }
        if let Some(ref description) = details.description {
            output.push_str(&format!("  {} {}\n", "About:".cyan(), description.dimmed()));
        }
        output.push('\n');
    }

    output
}

/// Format a single application record for pretty output
pub fn format_app(record: &DisplayRecord<'_>) -> String {
    let Some(details) = record.entry.details() else {
        return "Record has no details loaded.".to_string();
    };

    let mut output = String::new();

    let status = if record.installed {
        "installed".green()
    } else {
        "not installed".dimmed()
    };

    output.push_str(&format!("{} [{}]\n", details.name.bold(), status));
    output.push_str(&"─".repeat(50));
    output.push('\n');

    output.push_str(&format!(
        "{} {}\n",
        "Category:".cyan(),
        category_name(record.entry.category())
    ));

    if let Some(ref version) = details.version {
        output.push_str(&format!("{} {}\n", "Version:".cyan(), version));
    }
    if let Some(ref license) = details.license {
        output.push_str(&format!("{} {}\n", "License:".cyan(), license));
    }
    if let Some(ref size) = details.size {
        output.push_str(&format!("{} {}\n", "Size:".cyan(), size));
    }
    if let Some(ref url_site) = details.url_site {
        output.push_str(&format!("{} {}\n", "Website:".cyan(), url_site));
    }
    if let Some(ref description) = details.description {
        output.push_str(&format!("{} {}\n", "Description:".cyan(), description));
    }
    if let Some(ref sha1) = details.sha1 {
        output.push_str(&format!("{} {}\n", "SHA1:".cyan(), sha1.dimmed()));
    }

    output.push_str(&format!(
        "\n{} {}\n",
        "Download:".cyan(),
        details.url_download
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::AppStore;
    use crate::cache::AppDetails;
    use std::time::SystemTime;

    fn record_with_details(store: &mut AppStore) -> &AppEntry {
        let entry = store.upsert("7zip.txt", SystemTime::UNIX_EPOCH, 13);
        entry.fill_details(AppDetails {
            name: "7-Zip".to_string(),
            url_download: "https://example.com/7z.exe".to_string(),
            reg_name: Some("7-Zip".to_string()),
            version: Some("19.00".to_string()),
            license: Some("LGPL".to_string()),
            description: Some("File archiver".to_string()),
            size: None,
            url_site: None,
            cd_path: None,
            sha1: None,
        });
        entry
    }

    #[test]
    fn test_format_apps_empty() {
        assert_eq!(format_apps(&[]), "No applications found.");
    }

    #[test]
    fn test_format_app_includes_fields() {
        let mut store = AppStore::new();
        let entry = record_with_details(&mut store);
        let text = format_app(&DisplayRecord {
            entry,
            installed: true,
        });

        assert!(text.contains("7-Zip"));
        assert!(text.contains("installed"));
        assert!(text.contains("19.00"));
        assert!(text.contains("Tools"));
        assert!(text.contains("https://example.com/7z.exe"));
        // Absent optional fields leave no label behind
        assert!(!text.contains("Size:"));
        assert!(!text.contains("Website:"));
    }
}
