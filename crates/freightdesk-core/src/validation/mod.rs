//! Form validation.
//!
//! Pure, side-effect-free validators producing a `field key -> message` map;
//! an empty map means the draft can be submitted. The same functions back
//! both per-keystroke checks (revalidate, read one key) and the blocking
//! submit-time gate.

mod booking;
mod clearance;

pub use booking::validate_booking;
pub use clearance::{required_documents, validate_clearance};

use std::collections::BTreeMap;

/// Per-field error map. `BTreeMap` keeps rendering order stable.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Clearing agent license numbers are exactly 11 digits.
pub const AGENT_NUM_LEN: usize = 11;

/// Minimum length for free-text location fields.
pub const LOCATION_MIN_LEN: usize = 5;

pub const MIN_CONTAINERS: i64 = 1;
pub const MAX_CONTAINERS: i64 = 100;

/// Human labels for error messages, keyed by field key. Unknown keys fall
/// back to the key itself.
pub fn field_label(key: &str) -> &str {
    match key {
        "vehicle_type" => "Vehicle type",
        "custom_vehicle_type" => "Custom vehicle type",
        "cargo_type" => "Cargo type",
        "pickup_location" => "Pickup location",
        "drop_location" => "Drop location",
        "cargo_weight" => "Cargo weight",
        "cargo_size" => "Cargo size",
        "budget" => "Budget",
        "num_containers" => "Number of containers",
        "clearing_agent_num" => "Clearing agent number",
        "booking_date" => "Booking date",
        "delivery_date" => "Delivery date",
        "city" => "City",
        "transport_mode" => "Transport mode",
        "container_type" => "Container type",
        "port" => "Port",
        "pol" => "Port of loading",
        "pod" => "Port of discharge",
        "product" => "Product",
        "incoterms" => "Incoterms",
        "cbm" => "CBM",
        "packages" => "Number of packages",
        "container_size" => "Container size",
        "number_of_containers" => "Number of containers",
        _ => key,
    }
}

/// Strip non-digit characters and truncate to [`AGENT_NUM_LEN`] digits.
/// Applied on input, so over-long entries are cut rather than rejected.
pub fn sanitize_agent_number(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(AGENT_NUM_LEN)
        .collect()
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub(crate) fn require(errors: &mut FieldErrors, key: &'static str, value: &str) -> bool {
    if is_blank(value) {
        errors.insert(key, format!("{} is required", field_label(key)));
        false
    } else {
        true
    }
}

/// Validate the optional clearing agent number shared by booking and
/// clearance forms: when present and non-empty, the sanitized value must be
/// exactly [`AGENT_NUM_LEN`] digits.
pub(crate) fn check_agent_number(errors: &mut FieldErrors, value: Option<&str>) {
    let Some(raw) = value else { return };
    if is_blank(raw) {
        return;
    }
    if sanitize_agent_number(raw).len() != AGENT_NUM_LEN {
        errors.insert(
            "clearing_agent_num",
            format!(
                "{} must be exactly {} digits",
                field_label("clearing_agent_num"),
                AGENT_NUM_LEN
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_agent_number_strips_non_digits() {
        assert_eq!(sanitize_agent_number("12a3-45"), "12345");
        assert_eq!(sanitize_agent_number(""), "");
        assert_eq!(sanitize_agent_number("abc"), "");
    }

    #[test]
    fn test_sanitize_agent_number_truncates() {
        assert_eq!(sanitize_agent_number("123456789012345"), "12345678901");
        assert_eq!(sanitize_agent_number("1-2-3-4-5-6-7-8-9-0-1-2").len(), 11);
    }

    #[test]
    fn test_sanitize_agent_number_only_digits() {
        for input in ["12a3-45", "  42 ", "+92 300 1234567", "no digits at all"] {
            let out = sanitize_agent_number(input);
            assert!(out.chars().all(|c| c.is_ascii_digit()), "{:?}", out);
            assert!(out.len() <= AGENT_NUM_LEN);
        }
    }

    #[test]
    fn test_field_label_fallback() {
        assert_eq!(field_label("budget"), "Budget");
        assert_eq!(field_label("mystery_field"), "mystery_field");
    }

    #[test]
    fn test_check_agent_number() {
        let mut errors = FieldErrors::new();
        check_agent_number(&mut errors, None);
        check_agent_number(&mut errors, Some(""));
        check_agent_number(&mut errors, Some("123-4567-8901"));
        assert!(errors.is_empty());

        check_agent_number(&mut errors, Some("12345"));
        assert!(errors.contains_key("clearing_agent_num"));
    }
}
