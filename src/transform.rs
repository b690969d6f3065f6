//! Flatten raw API records into a `CountryTable`.
//!
//! All access into the raw JSON is optional: a missing or `null` container, or a
//! value of the wrong type, is treated the same as an absent field and replaced by
//! the column default. A key that is present but explicitly `null` leaves its cell
//! unset, so the table writes `"Unknown"` there rather than the default. A
//! malformed record never produces an error.

use crate::models::{CountryRow, CountryTable, NO_FLAG, RawCountryRecord, UNKNOWN};
use log::debug;
use serde_json::{Number, Value};

/// Map every raw record to a `CountryRow` and assemble the normalized table.
///
/// The table has exactly one row per input record, in input order.
///
/// ### Example
/// ```
/// use restcountries_etl::transform::transform_data;
///
/// let records = vec![serde_json::json!({ "name": { "common": "Testland" } })];
/// let table = transform_data(&records);
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.get(0, "Country").unwrap().to_string(), "Testland");
/// assert_eq!(table.get(0, "Latitude").unwrap().to_string(), "Unknown");
/// ```
pub fn transform_data(records: &[RawCountryRecord]) -> CountryTable {
    debug!("transforming {} raw records", records.len());
    CountryTable::from_rows(records.iter().map(to_row))
}

/// Field mapping for a single record.
pub fn to_row(raw: &RawCountryRecord) -> CountryRow {
    let latlng = raw.get("latlng").and_then(Value::as_array);
    let coord = |i: usize| {
        latlng
            .and_then(|a| a.get(i))
            .and_then(number)
    };

    CountryRow {
        country: text_at(raw, "/name/common", UNKNOWN),
        official_name: text_at(raw, "/name/official", UNKNOWN),
        region: text_at(raw, "/region", UNKNOWN),
        subregion: text_at(raw, "/subregion", UNKNOWN),
        capital: joined(raw.get("capital")).unwrap_or_else(|| UNKNOWN.to_string()),
        population: number_at(raw, "/population"),
        latitude: coord(0),
        longitude: coord(1),
        area: number_at(raw, "/area"),
        timezones: joined(raw.get("timezones")).unwrap_or_else(|| UNKNOWN.to_string()),
        flag: match raw.pointer("/flags/png") {
            Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            _ => Some(NO_FLAG.to_string()),
        },
    }
}

fn text_at(raw: &Value, pointer: &str, default: &str) -> String {
    raw.pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

/// Number at `pointer`; `None` for an explicit `null`, `0` when absent or not a number.
fn number_at(raw: &Value, pointer: &str) -> Option<Number> {
    match raw.pointer(pointer) {
        Some(Value::Null) => None,
        Some(Value::Number(n)) => Some(n.clone()),
        _ => Some(Number::from(0)),
    }
}

fn number(v: &Value) -> Option<Number> {
    match v {
        Value::Number(n) => Some(n.clone()),
        _ => None,
    }
}

/// Join the string members of a JSON array with `", "`.
///
/// Returns `None` when the value is absent or not an array. An empty array
/// yields an empty string.
fn joined(v: Option<&Value>) -> Option<String> {
    let items = v?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
    )
}
