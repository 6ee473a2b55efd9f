//! Document upload pipeline.
//!
//! Uploads are issued strictly one at a time, in slice order, each awaited
//! before the next begins (the backend upload endpoint is non-batch). The
//! first failure aborts the rest of the pipeline; already-uploaded documents
//! are not rolled back, the caller simply never submits their ids.

use anyhow::{Context, Result};
use async_trait::async_trait;

use freightdesk_core::models::{DocumentKind, FileRef, UploadedDocument};

use crate::ApiClient;

/// Seam between the pipeline and the transport, so the sequencing and
/// abort-on-first-failure behavior can be tested without a server.
#[async_trait]
pub trait DocumentUploader: Send + Sync {
    async fn upload(&self, kind: DocumentKind, file: &FileRef) -> Result<UploadedDocument>;
}

/// Upload every non-empty file selection, collecting server-issued document
/// ids in upload order. A failed upload aborts immediately, wrapped with the
/// offending document's label.
pub async fn upload_documents<U: DocumentUploader + ?Sized>(
    uploader: &U,
    documents: &[(DocumentKind, FileRef)],
) -> Result<Vec<UploadedDocument>> {
    let mut uploaded = Vec::new();
    for (kind, file) in documents {
        if file.is_empty() {
            tracing::debug!(kind = kind.document_type(), "skipping empty selection");
            continue;
        }
        let doc = uploader
            .upload(*kind, file)
            .await
            .with_context(|| format!("Failed to upload {}", kind.label()))?;
        tracing::debug!(kind = kind.document_type(), id = %doc.id, "uploaded document");
        uploaded.push(doc);
    }
    Ok(uploaded)
}

#[async_trait]
impl DocumentUploader for ApiClient {
    async fn upload(&self, kind: DocumentKind, file: &FileRef) -> Result<UploadedDocument> {
        let filename = file.filename();
        let data = match file {
            FileRef::Path(path) => std::fs::read(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?,
            FileRef::Bytes { data, .. } => data.clone(),
        };

        self.post_multipart("/documents/upload", || {
            Ok(reqwest::multipart::Form::new()
                .part(
                    "file",
                    reqwest::multipart::Part::bytes(data.clone()).file_name(filename.clone()),
                )
                .text("documentType", kind.document_type()))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use uuid::Uuid;

    /// Records upload attempts; fails on a configured attempt number.
    struct MockUploader {
        fail_on_attempt: Option<usize>,
        attempts: Mutex<Vec<DocumentKind>>,
    }

    impl MockUploader {
        fn new(fail_on_attempt: Option<usize>) -> Self {
            MockUploader {
                fail_on_attempt,
                attempts: Mutex::new(Vec::new()),
            }
        }

        fn attempts(&self) -> Vec<DocumentKind> {
            self.attempts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DocumentUploader for MockUploader {
        async fn upload(&self, kind: DocumentKind, _file: &FileRef) -> Result<UploadedDocument> {
            let attempt = {
                let mut attempts = self.attempts.lock().unwrap();
                attempts.push(kind);
                attempts.len()
            };
            if self.fail_on_attempt == Some(attempt) {
                anyhow::bail!("storage rejected the file");
            }
            Ok(UploadedDocument {
                id: Uuid::new_v4(),
                document_type: kind.document_type().to_string(),
            })
        }
    }

    fn file(name: &str) -> FileRef {
        FileRef::Bytes {
            filename: name.to_string(),
            data: vec![0u8; 8],
        }
    }

    fn three_documents() -> Vec<(DocumentKind, FileRef)> {
        vec![
            (DocumentKind::CommercialInvoice, file("invoice.pdf")),
            (DocumentKind::PackingList, file("packing.pdf")),
            (DocumentKind::BillOfLading, file("bl.pdf")),
        ]
    }

    #[tokio::test]
    async fn test_all_uploads_succeed_in_order() {
        let uploader = MockUploader::new(None);
        let uploaded = upload_documents(&uploader, &three_documents())
            .await
            .unwrap();
        assert_eq!(uploaded.len(), 3);
        assert_eq!(uploaded[0].document_type, "commercial_invoice");
        assert_eq!(uploaded[2].document_type, "bill_of_lading");
        assert_eq!(
            uploader.attempts(),
            vec![
                DocumentKind::CommercialInvoice,
                DocumentKind::PackingList,
                DocumentKind::BillOfLading,
            ]
        );
    }

    #[tokio::test]
    async fn test_second_failure_aborts_before_third() {
        let uploader = MockUploader::new(Some(2));
        let err = upload_documents(&uploader, &three_documents())
            .await
            .unwrap_err();
        // One success, one failure, third never attempted.
        assert_eq!(uploader.attempts().len(), 2);
        assert!(err.to_string().contains("Packing List"), "{:#}", err);
    }

    #[tokio::test]
    async fn test_empty_selections_skipped() {
        let uploader = MockUploader::new(None);
        let documents = vec![
            (DocumentKind::CommercialInvoice, file("invoice.pdf")),
            (
                DocumentKind::PackingList,
                FileRef::Bytes {
                    filename: "empty.pdf".to_string(),
                    data: vec![],
                },
            ),
            (DocumentKind::BillOfLading, file("bl.pdf")),
        ];
        let uploaded = upload_documents(&uploader, &documents).await.unwrap();
        assert_eq!(uploaded.len(), 2);
        assert_eq!(
            uploader.attempts(),
            vec![DocumentKind::CommercialInvoice, DocumentKind::BillOfLading]
        );
    }

    #[tokio::test]
    async fn test_no_documents_is_ok() {
        let uploader = MockUploader::new(None);
        let uploaded = upload_documents(&uploader, &[]).await.unwrap();
        assert!(uploaded.is_empty());
        assert!(uploader.attempts().is_empty());
    }
}
