//! Record and dataset types plus the flattening rules used by the CSV export.

use std::collections::BTreeSet;

use serde_json::Value;

/// One row returned by the API. Field sets may differ between records of the
/// same dataset.
pub type Record = serde_json::Map<String, Value>;

/// All records fetched for one endpoint, in page order.
pub type Dataset = Vec<Record>;

/// Returns the sorted union of field names across every record.
///
/// Ordering is lexicographic on the raw field-name bytes, so column order does
/// not depend on which record arrived first.
pub fn collect_headers(records: &[Record]) -> Vec<String> {
    let keys: BTreeSet<&str> = records
        .iter()
        .flat_map(|record| record.keys().map(String::as_str))
        .collect();

    keys.into_iter().map(str::to_string).collect()
}

/// Renders a single value as CSV cell text.
///
/// Strings are written raw, `null` becomes an empty cell, and everything else
/// is written as its compact JSON text.
pub fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Projects a record onto `headers`, leaving missing fields empty.
pub fn record_row(record: &Record, headers: &[String]) -> Vec<String> {
    headers
        .iter()
        .map(|key| record.get(key).map(render_cell).unwrap_or_default())
        .collect()
}
