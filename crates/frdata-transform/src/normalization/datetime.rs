//! Date parsing and age computation for death records.
//!
//! Source files mix ISO dates, compact INSEE dates (`YYYYMMDD`) and French
//! day-first dates. Anything that does not resolve to a complete calendar
//! date is treated as missing rather than as an error, so a single bad cell
//! never aborts a run.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%d/%m/%Y %H:%M:%S"];

/// Parses a complete date; partial or invalid dates return `None`.
///
/// INSEE encodes unknown month or day as `00`, which fails calendar
/// validation and therefore comes back as `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.len() == 8 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return parse_compact(trimmed);
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    None
}

fn parse_compact(value: &str) -> Option<NaiveDate> {
    let year = value[0..4].parse::<i32>().ok()?;
    let month = value[4..6].parse::<u32>().ok()?;
    let day = value[6..8].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Age in whole years: `floor(days between the dates / 365)`.
///
/// Uses floor division, so a death date earlier than the birth date yields a
/// negative age instead of being rounded toward zero.
pub fn age_in_years(birth: NaiveDate, death: NaiveDate) -> i64 {
    (death - birth).num_days().div_euclid(365)
}

/// Calendar year of a date.
pub fn year_of(date: NaiveDate) -> i64 {
    i64::from(date.year())
}

/// ISO 8601 rendering used for the derived date columns.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
