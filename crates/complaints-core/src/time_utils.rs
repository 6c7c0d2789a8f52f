use chrono::{Datelike, NaiveDate};

use crate::error::{ComplaintError, Result};

/// The only accepted `Date received` layout.
pub const DATE_RECEIVED_FORMAT: &str = "%Y-%m-%d";

// ── Date received parsing ─────────────────────────────────────────────────────

/// Parse a `Date received` value in `YYYY-MM-DD` form.
///
/// The year must be written with exactly four digits so that the derived
/// group year is always fixed width. Calendar-invalid dates such as
/// `2019-13-40` or `2019-02-30` are rejected.
pub fn parse_date_received(s: &str) -> Result<NaiveDate> {
    let bytes = s.as_bytes();
    let four_digit_year =
        bytes.len() > 4 && bytes[..4].iter().all(u8::is_ascii_digit) && bytes[4] == b'-';
    if !four_digit_year {
        return Err(ComplaintError::InvalidDate(s.to_string()));
    }

    let date = NaiveDate::parse_from_str(s, DATE_RECEIVED_FORMAT)
        .map_err(|e| ComplaintError::InvalidDate(format!("{} ({})", s, e)))?;

    // Year 0000 is representable by chrono but is not a calendar year.
    if date.year() < 1 {
        return Err(ComplaintError::InvalidDate(s.to_string()));
    }
    Ok(date)
}

/// The four-digit year component used in a group key.
pub fn year_key(date: NaiveDate) -> String {
    format!("{:04}", date.year())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
