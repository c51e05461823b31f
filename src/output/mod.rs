pub mod json;
pub mod pretty;

pub use pretty::DisplayRecord;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Format a list of application records based on output format
pub fn format_apps(records: &[DisplayRecord<'_>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_apps(records)),
        OutputFormat::Json => json::format_apps(records),
    }
}

/// Format a single application record based on output format
pub fn format_app(record: &DisplayRecord<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_app(record)),
        OutputFormat::Json => json::format_app(record),
    }
}
