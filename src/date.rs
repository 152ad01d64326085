//! Release-date parsing.

use chrono::{Datelike, NaiveDate};

/// Parse an ISO calendar date ("YYYY-MM-DD") into (year, month, day).
///
/// Malformed input yields `(0, 0, 0)` rather than an error. The catalog
/// occasionally serves empty or partial release dates, and the workflow
/// treats a zero year as "unknown" and omits it from the document.
pub fn parse_release_date(date: &str) -> (i32, u32, u32) {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => (parsed.year(), parsed.month(), parsed.day()),
        Err(_) => (0, 0, 0),
    }
}
