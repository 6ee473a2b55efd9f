//! Shipment payload and response models (backend JSON shapes, camelCase).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Backend shape for `POST /shipments` and `PUT /shipments/:id`. Updates
/// always send the full object; the backend diffs server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentPayload {
    pub vehicle_type: String,
    pub cargo_type: String,
    pub pickup_location: String,
    pub drop_location: String,
    pub cargo_weight: f64,
    pub cargo_size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub budget: f64,
    pub num_containers: i64,
    pub insurance: bool,
    pub sales_tax: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clearing_agent_num: Option<String>,
    pub booking_date: NaiveDate,
    pub delivery_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentResponse {
    pub id: Uuid,
    pub status: String,
    pub vehicle_type: String,
    pub cargo_type: String,
    pub pickup_location: String,
    pub drop_location: String,
    pub cargo_weight: f64,
    pub cargo_size: String,
    #[serde(default)]
    pub description: Option<String>,
    pub budget: f64,
    pub num_containers: i64,
    pub insurance: bool,
    pub sales_tax: bool,
    #[serde(default)]
    pub clearing_agent_num: Option<String>,
    pub booking_date: NaiveDate,
    pub delivery_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Latest reported position from `GET /location/shipments/:id/current`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPoint {
    pub lat: f64,
    pub lng: f64,
    pub recorded_at: DateTime<Utc>,
}
