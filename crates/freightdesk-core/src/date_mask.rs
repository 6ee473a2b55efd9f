//! Date input mask.
//!
//! Converts free-text keystrokes into a normalized `DD/MM/YYYY` display string
//! and a parsed calendar date. Segments are clamped only once complete (two
//! digits for day/month, four for year) so the mask never fights the user
//! mid-entry, and backspacing through a slash cannot corrupt the buffer: the
//! whole string is rebuilt from its digits on every call.

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;

/// Display sentinel for anything that is not a complete, well-formed date.
pub const NOT_SET: &str = "Not set";

const MAX_DIGITS: usize = 8;
const YEAR_WINDOW: i32 = 2;

fn masked_date_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap())
}

/// Normalize a raw keystroke buffer into the masked `DD/MM/YYYY` form.
///
/// Non-digit, non-slash characters are stripped; only the digits drive the
/// output. Day clamps to [1,31] and month to [1,12] once two digits of the
/// segment are present; year clamps to [current year, current year + 2] once
/// four digits are present. A completed segment gains its trailing slash.
pub fn format_date_input(raw: &str) -> String {
    format_date_input_at(raw, Utc::now().year())
}

/// Same as [`format_date_input`], with the current year injected (tests).
pub fn format_date_input_at(raw: &str, current_year: i32) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DIGITS)
        .collect();

    let mut out = String::with_capacity(10);

    let day = &digits[..digits.len().min(2)];
    if day.len() < 2 {
        out.push_str(day);
        return out;
    }
    let day_num: u32 = day.parse().unwrap_or(1);
    out.push_str(&format!("{:02}/", day_num.clamp(1, 31)));

    let month = &digits[2..digits.len().min(4)];
    if month.len() < 2 {
        out.push_str(month);
        return out;
    }
    let month_num: u32 = month.parse().unwrap_or(1);
    out.push_str(&format!("{:02}/", month_num.clamp(1, 12)));

    let year = &digits[4..];
    if year.len() < 4 {
        out.push_str(year);
        return out;
    }
    let year_num: i32 = year.parse().unwrap_or(current_year);
    out.push_str(&format!(
        "{:04}",
        year_num.clamp(current_year, current_year + YEAR_WINDOW)
    ));
    out
}

/// Parse a masked string into a calendar date. `None` unless the string
/// matches `DD/MM/YYYY` exactly and forms a real date.
pub fn parse_masked_date(value: &str) -> Option<NaiveDate> {
    if !masked_date_pattern().is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%d/%m/%Y").ok()
}

/// Display form of a masked buffer: the buffer itself when complete and
/// valid, the [`NOT_SET`] sentinel otherwise.
pub fn display_masked_date(value: &str) -> String {
    if parse_masked_date(value).is_some() {
        value.to_string()
    } else {
        NOT_SET.to_string()
    }
}
