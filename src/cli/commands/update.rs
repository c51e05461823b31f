use colored::Colorize;

use crate::catalog::AppCatalog;
use crate::cli::args::OutputFormat;
use crate::error::Result;

/// Handle the update command
pub fn update(catalog: &mut AppCatalog, format: OutputFormat) -> Result<String> {
    catalog.update_database()?;

    match format {
        OutputFormat::Pretty => Ok(format!("{} Application database updated", "✓".green())),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "status": "updated"
            });
            Ok(serde_json::to_string_pretty(&json)?)
        }
    }
}
