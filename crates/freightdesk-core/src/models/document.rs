//! Supporting-document model for clearance requests.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Supporting-document slot on a clearance request. Each kind maps to the
/// backend's `documentType` discriminator via [`DocumentKind::document_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    CommercialInvoice,
    PackingList,
    BillOfLading,
    AirwayBill,
    CertificateOfOrigin,
    GatePass,
    Other,
}

impl DocumentKind {
    /// Backend `documentType` value sent with the multipart upload.
    pub fn document_type(&self) -> &'static str {
        match self {
            DocumentKind::CommercialInvoice => "commercial_invoice",
            DocumentKind::PackingList => "packing_list",
            DocumentKind::BillOfLading => "bill_of_lading",
            DocumentKind::AirwayBill => "airway_bill",
            DocumentKind::CertificateOfOrigin => "certificate_of_origin",
            DocumentKind::GatePass => "gate_pass",
            DocumentKind::Other => "other",
        }
    }

    /// Human label, used when wrapping upload failures for the user.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::CommercialInvoice => "Commercial Invoice",
            DocumentKind::PackingList => "Packing List",
            DocumentKind::BillOfLading => "Bill of Lading",
            DocumentKind::AirwayBill => "Airway Bill",
            DocumentKind::CertificateOfOrigin => "Certificate of Origin",
            DocumentKind::GatePass => "Gate Pass",
            DocumentKind::Other => "Supporting Document",
        }
    }
}

/// Opaque handle to a user-selected file, replaced by a server-issued
/// document id after upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileRef {
    /// A path on the local filesystem (CLI flow).
    Path(PathBuf),
    /// In-memory bytes with a filename (tests, piped input).
    Bytes { filename: String, data: Vec<u8> },
}

impl FileRef {
    /// Filename to report on upload.
    pub fn filename(&self) -> String {
        match self {
            FileRef::Path(path) => path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("document")
                .to_string(),
            FileRef::Bytes { filename, .. } => filename.clone(),
        }
    }

    /// An empty selection carries nothing to upload and is skipped.
    pub fn is_empty(&self) -> bool {
        match self {
            FileRef::Path(path) => path.as_os_str().is_empty(),
            FileRef::Bytes { data, .. } => data.is_empty(),
        }
    }
}

/// Result of one document upload, as returned by `POST /documents/upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedDocument {
    pub id: Uuid,
    pub document_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_type_mapping() {
        assert_eq!(
            DocumentKind::CommercialInvoice.document_type(),
            "commercial_invoice"
        );
        assert_eq!(DocumentKind::BillOfLading.label(), "Bill of Lading");
    }

    #[test]
    fn test_file_ref_filename() {
        let file = FileRef::Path(PathBuf::from("/tmp/invoice.pdf"));
        assert_eq!(file.filename(), "invoice.pdf");

        let bytes = FileRef::Bytes {
            filename: "packing.pdf".to_string(),
            data: vec![1, 2, 3],
        };
        assert_eq!(bytes.filename(), "packing.pdf");
    }

    #[test]
    fn test_file_ref_empty() {
        assert!(FileRef::Bytes {
            filename: "x".to_string(),
            data: vec![],
        }
        .is_empty());
        assert!(FileRef::Path(PathBuf::new()).is_empty());
        assert!(!FileRef::Path(PathBuf::from("a.pdf")).is_empty());
    }
}
