//! Local database management commands

use colored::Colorize;

use crate::catalog::AppCatalog;
use crate::cli::args::{DbArgs, DbCommands, OutputFormat};
use crate::config::Paths;
use crate::descriptor::DESCRIPTOR_EXT;
use crate::error::Result;

/// Handle db commands
pub fn handle(
    catalog: &mut AppCatalog,
    paths: &Paths,
    args: &DbArgs,
    format: OutputFormat,
) -> Result<String> {
    match &args.command {
        DbCommands::Status => status(paths, format),
        DbCommands::Clear => clear(catalog, format),
    }
}

fn status(paths: &Paths, format: OutputFormat) -> Result<String> {
    let descriptor_count = count_descriptors(paths);
    let bundle_present = paths.bundle_file.exists();

    match format {
        OutputFormat::Pretty => {
            let mut output = String::new();
            output.push_str(&format!("{}\n", "Database Status".bold()));
            output.push_str(&format!("Location: {}\n\n", paths.apps_dir.display()));

            output.push_str(&format!("Descriptors: {descriptor_count}\n"));
            if bundle_present {
                output.push_str(&format!(
                    "Bundle: {}\n",
                    paths.bundle_file.display().to_string().dimmed()
                ));
            } else {
                output.push_str(&format!("Bundle: {}\n", "not downloaded".dimmed()));
            }

            Ok(output.trim_end().to_string())
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "apps_dir": paths.apps_dir.to_string_lossy(),
                "descriptors": descriptor_count,
                "bundle_present": bundle_present,
            });
            Ok(serde_json::to_string_pretty(&json)?)
        }
    }
}

fn clear(catalog: &mut AppCatalog, format: OutputFormat) -> Result<String> {
    catalog.delete_database_files()?;
    catalog.clear_cache();

    match format {
        OutputFormat::Pretty => Ok(format!("{} Database cleared", "✓".green())),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "status": "cleared"
            });
            Ok(serde_json::to_string_pretty(&json)?)
        }
    }
}

fn count_descriptors(paths: &Paths) -> usize {
    let Ok(read_dir) = std::fs::read_dir(&paths.apps_dir) else {
        return 0;
    };

    read_dir
        .flatten()
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(DESCRIPTOR_EXT))
        })
        .count()
}
