//! Freightdesk Core Library
//!
//! This crate provides the domain models, error types, configuration, and the
//! pure form-to-payload pipeline (validation, date masking, payload assembly)
//! shared by the Freightdesk API client and CLI.

pub mod catalog;
pub mod config;
pub mod date_mask;
pub mod error;
pub mod models;
pub mod payload;
pub mod validation;

// Re-export commonly used types
pub use catalog::{find_vehicle, VehicleType, CUSTOM_VEHICLE_ID, VEHICLE_TYPES};
pub use config::ClientConfig;
pub use date_mask::{format_date_input, parse_masked_date, NOT_SET};
pub use error::AppError;
pub use payload::{assemble_clearance_payload, assemble_shipment_payload};
pub use validation::{sanitize_agent_number, validate_booking, validate_clearance};
