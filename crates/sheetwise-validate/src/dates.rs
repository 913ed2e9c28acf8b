//! Date normalization.
//!
//! Converts a raw cell into a calendar date or a failure message. Inputs are
//! tried in a fixed order: empty check, spreadsheet serial number, free-text
//! parsing against known formats, then a strict `YYYY-MM-DD` decomposition.
//! Failures are data, never panics; the messages travel verbatim into the
//! per-row error report.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

use sheetwise_model::CellValue;

/// Serial day for 1970-01-01 in the classic 1900 date system
/// (serial day 0 = 1899-12-30).
const UNIX_EPOCH_SERIAL: f64 = 25569.0;

pub const MISSING_DATE: &str = "Date is missing";

/// Free-text formats tried before the strict fallback, first hit wins.
const TEXT_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d-%b-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

/// Normalize a raw cell into a calendar date.
///
/// `None` stands for a column that is absent from the decoded row; it fails
/// the same way an empty cell does.
pub fn normalize(value: Option<&CellValue>) -> Result<NaiveDate, String> {
    let Some(value) = value else {
        return Err(MISSING_DATE.to_string());
    };
    if value.is_empty() {
        return Err(MISSING_DATE.to_string());
    }
    match value {
        CellValue::Number(serial) => {
            from_serial(*serial).ok_or_else(|| invalid_format(value))
        }
        CellValue::Text(text) => {
            let trimmed = text.trim();
            parse_text(trimmed)
                .or_else(|| parse_strict_ymd(trimmed))
                .ok_or_else(|| invalid_format(value))
        }
        CellValue::Bool(_) => Err(invalid_format(value)),
        CellValue::Empty => Err(MISSING_DATE.to_string()),
    }
}

/// Check the decoded date against an injected reference date: month and year
/// must match. The reference is an explicit parameter so the outcome is
/// deterministic under test.
pub fn check_within_month(date: NaiveDate, reference: NaiveDate) -> Result<(), String> {
    if date.month() == reference.month() && date.year() == reference.year() {
        Ok(())
    } else {
        Err("Date is not within the current month".to_string())
    }
}

/// Convert a spreadsheet serial number, truncating any time-of-day fraction.
/// UTC midnight semantics: no timezone adjustment is applied.
fn from_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    let days = (serial - UNIX_EPOCH_SERIAL).floor() as i64;
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
    if days >= 0 {
        epoch.checked_add_days(Days::new(days as u64))
    } else {
        epoch.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

fn parse_text(text: &str) -> Option<NaiveDate> {
    // Datetime text keeps only its date component.
    if let Ok(datetime) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime.date());
    }
    TEXT_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

/// Strict fallback: split on `-`, expect exactly year, month (1-indexed), day.
fn parse_strict_ymd(text: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = text.split('-').collect();
    if parts.len() != 3 {
        return None;
    }
    let year: i32 = parts[0].trim().parse().ok()?;
    let month: u32 = parts[1].trim().parse().ok()?;
    let day: u32 = parts[2].trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn invalid_format(value: &CellValue) -> String {
    format!("Invalid date format: {value}")
}
