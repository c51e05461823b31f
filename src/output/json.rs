use serde::Serialize;

use crate::cache::category_name;
use crate::error::Result;
use crate::output::pretty::DisplayRecord;

/// Serializable view of one record with its install status
#[derive(Serialize)]
struct JsonRecord<'a> {
    file_name: &'a str,
    category: u32,
    category_name: &'static str,
    installed: bool,
    #[serde(flatten)]
    details: &'a crate::cache::AppDetails,
}

fn to_json_record<'a>(record: &'a DisplayRecord<'_>) -> Option<JsonRecord<'a>> {
    let details = record.entry.details()?;
    Some(JsonRecord {
        file_name: record.entry.file_name(),
        category: record.entry.category(),
        category_name: category_name(record.entry.category()),
        installed: record.installed,
        details,
    })
}

/// Format a list of records as JSON
pub fn format_apps(records: &[DisplayRecord<'_>]) -> Result<String> {
    let views: Vec<_> = records.iter().filter_map(to_json_record).collect();
    Ok(serde_json::to_string_pretty(&views)?)
}

/// Format a single record as JSON
pub fn format_app(record: &DisplayRecord<'_>) -> Result<String> {
    match to_json_record(record) {
        Some(view) => Ok(serde_json::to_string_pretty(&view)?),
        None => Ok("null".to_string()),
    }
}

/// Format any serializable value as JSON
pub fn format_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
