//! Booking draft validation.

use crate::catalog::{find_vehicle, CUSTOM_VEHICLE_ID};
use crate::date_mask::parse_masked_date;
use crate::models::BookingDraft;

use super::{
    check_agent_number, field_label, is_blank, require, FieldErrors, LOCATION_MIN_LEN,
    MAX_CONTAINERS, MIN_CONTAINERS,
};

fn check_location(errors: &mut FieldErrors, key: &'static str, value: &str) {
    if !require(errors, key, value) {
        return;
    }
    if value.trim().len() < LOCATION_MIN_LEN {
        errors.insert(
            key,
            format!(
                "{} must be at least {} characters",
                field_label(key),
                LOCATION_MIN_LEN
            ),
        );
    }
}

fn check_number(errors: &mut FieldErrors, key: &'static str, value: &str) -> Option<f64> {
    if !require(errors, key, value) {
        return None;
    }
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => {
            errors.insert(
                key,
                format!("{} must be a valid number", field_label(key)),
            );
            None
        }
    }
}

fn check_date(errors: &mut FieldErrors, key: &'static str, value: &str) -> Option<chrono::NaiveDate> {
    if !require(errors, key, value) {
        return None;
    }
    match parse_masked_date(value) {
        Some(date) => Some(date),
        None => {
            errors.insert(
                key,
                format!("{} must be a valid date (DD/MM/YYYY)", field_label(key)),
            );
            None
        }
    }
}

/// Validate a booking draft. Returns an empty map when the draft can be
/// submitted.
pub fn validate_booking(draft: &BookingDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if require(&mut errors, "vehicle_type", &draft.vehicle_type) {
        if draft.vehicle_type == CUSTOM_VEHICLE_ID {
            let custom = draft.custom_vehicle_type.as_deref().unwrap_or("");
            require(&mut errors, "custom_vehicle_type", custom);
        } else if find_vehicle(&draft.vehicle_type).is_none() {
            errors.insert(
                "vehicle_type",
                format!("Unknown vehicle type: {}", draft.vehicle_type),
            );
        }
    }

    require(&mut errors, "cargo_type", &draft.cargo_type);
    require(&mut errors, "cargo_size", &draft.cargo_size);

    check_location(&mut errors, "pickup_location", &draft.pickup_location);
    check_location(&mut errors, "drop_location", &draft.drop_location);
    // Distinctness always reports on the drop side, whatever else is wrong.
    if !is_blank(&draft.pickup_location) && draft.pickup_location == draft.drop_location {
        errors.insert(
            "drop_location",
            "Drop location must differ from pickup location".to_string(),
        );
    }

    check_number(&mut errors, "cargo_weight", &draft.cargo_weight);
    check_number(&mut errors, "budget", &draft.budget);

    if require(&mut errors, "num_containers", &draft.num_containers) {
        match draft.num_containers.trim().parse::<i64>() {
            Ok(n) if (MIN_CONTAINERS..=MAX_CONTAINERS).contains(&n) => {}
            Ok(_) => {
                errors.insert(
                    "num_containers",
                    format!(
                        "{} must be between {} and {}",
                        field_label("num_containers"),
                        MIN_CONTAINERS,
                        MAX_CONTAINERS
                    ),
                );
            }
            Err(_) => {
                errors.insert(
                    "num_containers",
                    format!("{} must be a valid number", field_label("num_containers")),
                );
            }
        }
    }

    check_agent_number(&mut errors, draft.clearing_agent_num.as_deref());

    let booking = check_date(&mut errors, "booking_date", &draft.booking_date);
    let delivery = check_date(&mut errors, "delivery_date", &draft.delivery_date);
    if let (Some(booking), Some(delivery)) = (booking, delivery) {
        if delivery < booking {
            errors.insert(
                "delivery_date",
                "Delivery date cannot be before booking date".to_string(),
            );
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> BookingDraft {
        BookingDraft {
            vehicle_type: "mazda_16ft".to_string(),
            custom_vehicle_type: None,
            cargo_type: "general".to_string(),
            pickup_location: "Karachi Port".to_string(),
            drop_location: "Lahore Dry Port".to_string(),
            cargo_weight: "1200".to_string(),
            cargo_size: "16ft".to_string(),
            description: None,
            budget: "50000".to_string(),
            num_containers: "2".to_string(),
            insurance: false,
            sales_tax: false,
            clearing_agent_num: None,
            booking_date: "01/09/2026".to_string(),
            delivery_date: "04/09/2026".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(validate_booking(&valid_draft()).is_empty());
    }

    #[test]
    fn test_every_required_field_reports() {
        let draft = BookingDraft::default();
        let errors = validate_booking(&draft);
        for key in [
            "vehicle_type",
            "cargo_type",
            "cargo_size",
            "pickup_location",
            "drop_location",
            "cargo_weight",
            "budget",
            "num_containers",
            "booking_date",
            "delivery_date",
        ] {
            assert!(errors.contains_key(key), "missing error for {}", key);
        }
    }

    #[test]
    fn test_missing_single_field_reports_that_key() {
        let mut draft = valid_draft();
        draft.budget = String::new();
        let errors = validate_booking(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("budget").unwrap(), "Budget is required");
    }

    #[test]
    fn test_location_min_length() {
        let mut draft = valid_draft();
        draft.pickup_location = "KHI".to_string();
        let errors = validate_booking(&draft);
        assert!(errors
            .get("pickup_location")
            .unwrap()
            .contains("at least 5 characters"));
    }

    #[test]
    fn test_same_pickup_and_drop_always_flags_drop() {
        let mut draft = valid_draft();
        draft.drop_location = draft.pickup_location.clone();
        let errors = validate_booking(&draft);
        assert!(errors.contains_key("drop_location"));

        // Even when other fields are broken too.
        draft.budget = "not a number".to_string();
        let errors = validate_booking(&draft);
        assert!(errors.contains_key("drop_location"));
        assert!(errors.contains_key("budget"));
    }

    #[test]
    fn test_numeric_fields_must_parse() {
        let mut draft = valid_draft();
        draft.cargo_weight = "heavy".to_string();
        draft.budget = "NaN".to_string();
        let errors = validate_booking(&draft);
        assert!(errors
            .get("cargo_weight")
            .unwrap()
            .contains("valid number"));
        assert!(errors.get("budget").unwrap().contains("valid number"));
    }

    #[test]
    fn test_num_containers_bounds() {
        let mut draft = valid_draft();
        for bad in ["0", "101", "-3"] {
            draft.num_containers = bad.to_string();
            let errors = validate_booking(&draft);
            assert!(
                errors
                    .get("num_containers")
                    .unwrap()
                    .contains("between 1 and 100"),
                "expected bound error for {}",
                bad
            );
        }
        draft.num_containers = "100".to_string();
        assert!(validate_booking(&draft).is_empty());
    }

    #[test]
    fn test_agent_number_optional_but_strict() {
        let mut draft = valid_draft();
        draft.clearing_agent_num = Some("123-4567-8901".to_string());
        assert!(validate_booking(&draft).is_empty());

        draft.clearing_agent_num = Some("1234".to_string());
        let errors = validate_booking(&draft);
        assert!(errors
            .get("clearing_agent_num")
            .unwrap()
            .contains("exactly 11 digits"));
    }

    #[test]
    fn test_delivery_before_booking() {
        let mut draft = valid_draft();
        draft.delivery_date = "31/08/2026".to_string();
        let errors = validate_booking(&draft);
        assert_eq!(
            errors.get("delivery_date").unwrap(),
            "Delivery date cannot be before booking date"
        );

        // Same day is allowed.
        draft.delivery_date = draft.booking_date.clone();
        assert!(validate_booking(&draft).is_empty());
    }

    #[test]
    fn test_custom_vehicle_requires_name() {
        let mut draft = valid_draft();
        draft.vehicle_type = CUSTOM_VEHICLE_ID.to_string();
        let errors = validate_booking(&draft);
        assert!(errors.contains_key("custom_vehicle_type"));

        draft.custom_vehicle_type = Some("Refrigerated van".to_string());
        assert!(validate_booking(&draft).is_empty());
    }

    #[test]
    fn test_error_clears_once_field_fixed() {
        // Per-input checks revalidate and read one key; the error goes away
        // as soon as the field becomes valid.
        let mut draft = valid_draft();
        draft.budget = String::new();
        assert!(validate_booking(&draft).contains_key("budget"));
        draft.budget = "45000".to_string();
        assert!(!validate_booking(&draft).contains_key("budget"));
    }
}
