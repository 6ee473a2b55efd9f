//! Clearance request drafts.
//!
//! One tagged union per trade type (import, export, freight forwarding)
//! instead of a stringly-keyed field map, so the required-field rules and the
//! payload assembler get compile-time exhaustiveness.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::document::{DocumentKind, FileRef};

/// Container fill classification; changes which freight fields are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerType {
    #[serde(rename = "LCL")]
    Lcl,
    #[serde(rename = "FCL")]
    Fcl,
}

impl ContainerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerType::Lcl => "LCL",
            ContainerType::Fcl => "FCL",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportDraft {
    pub city: String,
    pub transport_mode: String,
    pub container_type: Option<ContainerType>,
    pub port: String,
    pub clearing_agent_num: Option<String>,
    pub documents: Vec<(DocumentKind, FileRef)>,
}

impl Default for ImportDraft {
    fn default() -> Self {
        ImportDraft {
            city: String::new(),
            transport_mode: String::new(),
            container_type: None,
            port: String::new(),
            clearing_agent_num: None,
            documents: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportDraft {
    pub city: String,
    pub transport_mode: String,
    pub container_type: Option<ContainerType>,
    pub clearing_agent_num: Option<String>,
    /// Port of loading / port of discharge.
    pub pol: String,
    pub pod: String,
    pub product: String,
    pub incoterms: String,
    pub documents: Vec<(DocumentKind, FileRef)>,
}

impl Default for ExportDraft {
    fn default() -> Self {
        ExportDraft {
            city: String::new(),
            transport_mode: String::new(),
            container_type: None,
            clearing_agent_num: None,
            pol: String::new(),
            pod: String::new(),
            product: String::new(),
            incoterms: String::new(),
            documents: Vec::new(),
        }
    }
}

/// Freight-forwarding draft. LCL shipments carry `cbm` + `packages`; FCL
/// shipments carry `container_size` + `number_of_containers`. All numeric
/// fields stay as entered until payload assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FreightDraft {
    pub city: String,
    pub transport_mode: String,
    pub container_type: Option<ContainerType>,
    pub clearing_agent_num: Option<String>,
    pub pol: String,
    pub pod: String,
    pub product: String,
    pub incoterms: String,
    pub cbm: String,
    pub packages: String,
    pub container_size: String,
    pub number_of_containers: String,
    pub documents: Vec<(DocumentKind, FileRef)>,
}

impl Default for FreightDraft {
    fn default() -> Self {
        FreightDraft {
            city: String::new(),
            transport_mode: String::new(),
            container_type: None,
            clearing_agent_num: None,
            pol: String::new(),
            pod: String::new(),
            product: String::new(),
            incoterms: String::new(),
            cbm: String::new(),
            packages: String::new(),
            container_size: String::new(),
            number_of_containers: String::new(),
            documents: Vec::new(),
        }
    }
}

/// A customs/documentation submission draft, one variant per trade type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "request_type", rename_all = "snake_case")]
pub enum ClearanceDraft {
    Import(ImportDraft),
    Export(ExportDraft),
    FreightForwarding(FreightDraft),
}

impl ClearanceDraft {
    pub fn request_type(&self) -> &'static str {
        match self {
            ClearanceDraft::Import(_) => "import",
            ClearanceDraft::Export(_) => "export",
            ClearanceDraft::FreightForwarding(_) => "freight_forwarding",
        }
    }

    pub fn documents(&self) -> &[(DocumentKind, FileRef)] {
        match self {
            ClearanceDraft::Import(d) => &d.documents,
            ClearanceDraft::Export(d) => &d.documents,
            ClearanceDraft::FreightForwarding(d) => &d.documents,
        }
    }
}

/// A clearance request as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearanceRequestResponse {
    pub id: Uuid,
    pub request_type: String,
    pub status: String,
    pub city: String,
    pub transport_mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_type: Option<String>,
    #[serde(default)]
    pub document_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_type_discriminator() {
        assert_eq!(
            ClearanceDraft::Import(ImportDraft::default()).request_type(),
            "import"
        );
        assert_eq!(
            ClearanceDraft::FreightForwarding(FreightDraft::default()).request_type(),
            "freight_forwarding"
        );
    }

    #[test]
    fn test_draft_json_tag() {
        let draft = ClearanceDraft::Export(ExportDraft {
            city: "KHI".to_string(),
            ..Default::default()
        });
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["request_type"], "export");
        assert_eq!(json["city"], "KHI");
    }

    #[test]
    fn test_container_type_serde_names() {
        assert_eq!(
            serde_json::to_string(&ContainerType::Lcl).unwrap(),
            "\"LCL\""
        );
        let parsed: ContainerType = serde_json::from_str("\"FCL\"").unwrap();
        assert_eq!(parsed, ContainerType::Fcl);
    }
}
