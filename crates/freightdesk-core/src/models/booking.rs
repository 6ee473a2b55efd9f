//! Booking draft: in-memory, unsaved form state for a truck booking.
//!
//! Fields are kept as entered (strings for numeric inputs, masked `DD/MM/YYYY`
//! strings for dates); the validators gate them and the payload assembler
//! parses them into backend types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingDraft {
    /// Catalog vehicle id, or [`crate::catalog::CUSTOM_VEHICLE_ID`].
    pub vehicle_type: String,
    /// Free-text vehicle name, used only with the custom sentinel.
    pub custom_vehicle_type: Option<String>,
    pub cargo_type: String,
    pub pickup_location: String,
    pub drop_location: String,
    /// Weight in kilograms, as entered.
    pub cargo_weight: String,
    pub cargo_size: String,
    pub description: Option<String>,
    /// Proposed budget, as entered.
    pub budget: String,
    pub num_containers: String,
    pub insurance: bool,
    pub sales_tax: bool,
    /// Clearing agent license number; sanitized to at most 11 digits on input.
    pub clearing_agent_num: Option<String>,
    /// Masked `DD/MM/YYYY` strings.
    pub booking_date: String,
    pub delivery_date: String,
}

impl BookingDraft {
    /// Resolved vehicle name: catalog entry name, or the custom free text.
    pub fn vehicle_name(&self) -> Option<&str> {
        if self.vehicle_type == crate::catalog::CUSTOM_VEHICLE_ID {
            self.custom_vehicle_type.as_deref()
        } else {
            crate::catalog::find_vehicle(&self.vehicle_type).map(|v| v.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_name_from_catalog() {
        let draft = BookingDraft {
            vehicle_type: "shehzore".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.vehicle_name(), Some("Shehzore"));
    }

    #[test]
    fn test_vehicle_name_custom() {
        let draft = BookingDraft {
            vehicle_type: "other".to_string(),
            custom_vehicle_type: Some("Refrigerated van".to_string()),
            ..Default::default()
        };
        assert_eq!(draft.vehicle_name(), Some("Refrigerated van"));
    }

    #[test]
    fn test_vehicle_name_unknown() {
        let draft = BookingDraft {
            vehicle_type: "hovercraft".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.vehicle_name(), None);
    }
}
