//! Payload assembly: validated drafts + uploaded document ids -> the
//! backend-shaped request bodies.
//!
//! The clearance assembler is a total function: numeric sub-fields parse with
//! an explicit fallback to `None` instead of erroring, because the validators
//! are the gate and the assembler only shapes what they let through.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::date_mask::parse_masked_date;
use crate::error::AppError;
use crate::models::{
    BookingDraft, ClearanceDraft, ContainerType, ShipmentPayload, UploadedDocument,
};
use crate::validation::sanitize_agent_number;

/// Lahore clearances move by air regardless of the selected mode.
pub const AIR_ONLY_CITY: &str = "LHR";
pub const AIR_ONLY_MODE: &str = "air_only";

/// Backend shape for `POST /clearance-requests`. Absent optionals serialize
/// as absent keys, so an FCL payload carries no `cbm`/`packages` and vice
/// versa.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearanceRequestPayload {
    pub request_type: String,
    pub city: String,
    pub transport_mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoterms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cbm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packages: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_containers: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clearing_agent_num: Option<String>,
    pub document_ids: Vec<Uuid>,
}

fn parse_float(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn parse_int(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn resolved_transport_mode(city: &str, mode: &str) -> String {
    if city == AIR_ONLY_CITY {
        AIR_ONLY_MODE.to_string()
    } else {
        mode.to_string()
    }
}

fn agent_number(value: Option<&str>) -> Option<String> {
    value
        .map(sanitize_agent_number)
        .filter(|digits| !digits.is_empty())
}

/// Map a validated clearance draft plus its uploaded documents into the
/// backend request shape. Never fails; unparsable numbers become `None`.
pub fn assemble_clearance_payload(
    draft: &ClearanceDraft,
    documents: &[UploadedDocument],
) -> ClearanceRequestPayload {
    let document_ids: Vec<Uuid> = documents.iter().map(|d| d.id).collect();

    let mut payload = ClearanceRequestPayload {
        request_type: draft.request_type().to_string(),
        city: String::new(),
        transport_mode: String::new(),
        container_type: None,
        port: None,
        pol: None,
        pod: None,
        product: None,
        incoterms: None,
        cbm: None,
        packages: None,
        container_size: None,
        number_of_containers: None,
        clearing_agent_num: None,
        document_ids,
    };

    match draft {
        ClearanceDraft::Import(d) => {
            payload.city = d.city.clone();
            payload.transport_mode = resolved_transport_mode(&d.city, &d.transport_mode);
            payload.container_type = d.container_type.map(|c| c.as_str().to_string());
            payload.port = non_blank(&d.port);
            payload.clearing_agent_num = agent_number(d.clearing_agent_num.as_deref());
        }
        ClearanceDraft::Export(d) => {
            payload.city = d.city.clone();
            payload.transport_mode = resolved_transport_mode(&d.city, &d.transport_mode);
            payload.container_type = d.container_type.map(|c| c.as_str().to_string());
            payload.pol = non_blank(&d.pol);
            payload.pod = non_blank(&d.pod);
            payload.product = non_blank(&d.product);
            payload.incoterms = non_blank(&d.incoterms);
            payload.clearing_agent_num = agent_number(d.clearing_agent_num.as_deref());
        }
        ClearanceDraft::FreightForwarding(d) => {
            payload.city = d.city.clone();
            payload.transport_mode = resolved_transport_mode(&d.city, &d.transport_mode);
            payload.container_type = d.container_type.map(|c| c.as_str().to_string());
            payload.pol = non_blank(&d.pol);
            payload.pod = non_blank(&d.pod);
            payload.product = non_blank(&d.product);
            payload.incoterms = non_blank(&d.incoterms);
            payload.clearing_agent_num = agent_number(d.clearing_agent_num.as_deref());
            match d.container_type {
                Some(ContainerType::Lcl) => {
                    payload.cbm = parse_float(&d.cbm);
                    payload.packages = parse_int(&d.packages);
                }
                Some(ContainerType::Fcl) => {
                    payload.container_size = non_blank(&d.container_size);
                    payload.number_of_containers = parse_int(&d.number_of_containers);
                }
                None => {}
            }
        }
    }

    payload
}

/// Map a validated booking draft into the backend shipment shape. Unlike the
/// clearance assembler this can fail, but only on drafts that skipped
/// [`crate::validation::validate_booking`].
pub fn assemble_shipment_payload(draft: &BookingDraft) -> Result<ShipmentPayload, AppError> {
    let vehicle_type = draft
        .vehicle_name()
        .ok_or_else(|| AppError::InvalidInput(format!("Unknown vehicle type: {}", draft.vehicle_type)))?
        .to_string();

    let cargo_weight = parse_float(&draft.cargo_weight)
        .ok_or_else(|| AppError::InvalidInput("Cargo weight must be a valid number".to_string()))?;
    let budget = parse_float(&draft.budget)
        .ok_or_else(|| AppError::InvalidInput("Budget must be a valid number".to_string()))?;
    let num_containers = parse_int(&draft.num_containers)
        .ok_or_else(|| AppError::InvalidInput("Number of containers must be a valid number".to_string()))?;

    let booking_date = parse_masked_date(&draft.booking_date)
        .ok_or_else(|| AppError::InvalidInput("Booking date must be a valid date".to_string()))?;
    let delivery_date = parse_masked_date(&draft.delivery_date)
        .ok_or_else(|| AppError::InvalidInput("Delivery date must be a valid date".to_string()))?;

    Ok(ShipmentPayload {
        vehicle_type,
        cargo_type: draft.cargo_type.clone(),
        pickup_location: draft.pickup_location.clone(),
        drop_location: draft.drop_location.clone(),
        cargo_weight,
        cargo_size: draft.cargo_size.clone(),
        description: draft.description.clone().and_then(|d| non_blank(&d)),
        budget,
        num_containers,
        insurance: draft.insurance,
        sales_tax: draft.sales_tax,
        clearing_agent_num: agent_number(draft.clearing_agent_num.as_deref()),
        booking_date,
        delivery_date,
    })
}
