use crate::cache::AppEntry;
use crate::catalog::{AppCatalog, CategoryFilter, Visit};
use crate::cli::args::{ListArgs, OutputFormat};
use crate::config::Paths;
use crate::error::Result;
use crate::install;
use crate::output::{self, DisplayRecord};

/// Handle the list command
pub fn list(
    catalog: &mut AppCatalog,
    paths: &Paths,
    args: &ListArgs,
    format: OutputFormat,
) -> Result<String> {
    let filter = match args.category {
        Some(category) => CategoryFilter::Only(category),
        None => CategoryFilter::All,
    };

    let mut entries: Vec<AppEntry> = Vec::new();
    catalog.enumerate(filter, |entry| {
        entries.push(entry.clone());
        Visit::Continue
    })?;

    let records: Vec<DisplayRecord<'_>> = entries
        .iter()
        .map(|entry| DisplayRecord {
            entry,
            installed: installed(paths, entry),
        })
        .collect();

    output::format_apps(&records, format)
}

pub(super) fn installed(paths: &Paths, entry: &AppEntry) -> bool {
    entry
        .details()
        .and_then(|d| d.reg_name.as_deref())
        .is_some_and(|reg_name| install::is_installed(&paths.installed_dir, reg_name))
}
