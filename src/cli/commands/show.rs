use crate::catalog::{AppCatalog, CategoryFilter, Visit};
use crate::cli::args::{OutputFormat, ShowArgs};
use crate::config::Paths;
use crate::error::{AppdexError, Result};
use crate::output::{self, DisplayRecord};

use super::list::installed;

/// Handle the show command
pub fn show(
    catalog: &mut AppCatalog,
    paths: &Paths,
    args: &ShowArgs,
    format: OutputFormat,
) -> Result<String> {
    let mut found = None;
    catalog.enumerate(CategoryFilter::All, |entry| {
        let matches = entry
            .details()
            .is_some_and(|d| d.name.eq_ignore_ascii_case(&args.name));

        if matches {
            found = Some(entry.clone());
            Visit::Stop
        } else {
            Visit::Continue
        }
    })?;

    let entry = found.ok_or_else(|| AppdexError::AppNotFound(args.name.clone()))?;
    let record = DisplayRecord {
        installed: installed(paths, &entry),
        entry: &entry,
    };

    output::format_app(&record, format)
}
