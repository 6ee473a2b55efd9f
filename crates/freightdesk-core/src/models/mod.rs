//! Domain models shared across Freightdesk components.

pub mod booking;
pub mod clearance;
pub mod document;
pub mod shipment;
pub mod user;

pub use booking::BookingDraft;
pub use clearance::{
    ClearanceDraft, ClearanceRequestResponse, ContainerType, ExportDraft, FreightDraft, ImportDraft,
};
pub use document::{DocumentKind, FileRef, UploadedDocument};
pub use shipment::{LocationPoint, ShipmentPayload, ShipmentResponse};
pub use user::{StoredCredentials, TokenPair, UserResponse};
