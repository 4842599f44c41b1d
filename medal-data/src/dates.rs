//! Date parsing helpers shared by the medal crates.

use chrono::NaiveDate;

/// Date format used by the medal tables: "YYYY-MM-DD".
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in "YYYY-MM-DD" format.
///
/// Returns `None` for empty or unparseable input. Rows with a bad date are
/// kept but excluded from time-series aggregation, so this is deliberately
/// lenient rather than an error.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, ISO_FORMAT).ok()
}

/// Format a NaiveDate as "YYYY-MM-DD".
pub fn format_iso(date: &NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}
