//! Clearance draft validation.
//!
//! Required sets are fixed lists for import/export; freight forwarding
//! switches on container type (LCL asks for cbm + packages, FCL for container
//! size + count). Required document slots must hold a non-empty file.

use crate::models::{ClearanceDraft, ContainerType, DocumentKind, ExportDraft, FreightDraft, ImportDraft};

use super::{check_agent_number, field_label, require, FieldErrors};

const IMPORT_DOCS: &[DocumentKind] = &[
    DocumentKind::CommercialInvoice,
    DocumentKind::PackingList,
    DocumentKind::BillOfLading,
];

const EXPORT_DOCS: &[DocumentKind] = &[DocumentKind::CommercialInvoice, DocumentKind::PackingList];

const FREIGHT_DOCS: &[DocumentKind] = &[DocumentKind::CommercialInvoice, DocumentKind::PackingList];

/// Document slots that must be filled before a draft of this shape can be
/// submitted.
pub fn required_documents(draft: &ClearanceDraft) -> &'static [DocumentKind] {
    match draft {
        ClearanceDraft::Import(_) => IMPORT_DOCS,
        ClearanceDraft::Export(_) => EXPORT_DOCS,
        ClearanceDraft::FreightForwarding(_) => FREIGHT_DOCS,
    }
}

fn check_container_type(errors: &mut FieldErrors, value: Option<ContainerType>) {
    if value.is_none() {
        errors.insert(
            "container_type",
            format!("{} is required", field_label("container_type")),
        );
    }
}

fn check_numeric(errors: &mut FieldErrors, key: &'static str, value: &str) {
    if !require(errors, key, value) {
        return;
    }
    if !matches!(value.trim().parse::<f64>(), Ok(n) if n.is_finite()) {
        errors.insert(
            key,
            format!("{} must be a valid number", field_label(key)),
        );
    }
}

fn check_documents(errors: &mut FieldErrors, draft: &ClearanceDraft) {
    for kind in required_documents(draft) {
        let filled = draft
            .documents()
            .iter()
            .any(|(k, file)| k == kind && !file.is_empty());
        if !filled {
            errors.insert(
                kind.document_type(),
                format!("{} is required", kind.label()),
            );
        }
    }
}

fn validate_import(errors: &mut FieldErrors, draft: &ImportDraft) {
    require(errors, "city", &draft.city);
    require(errors, "transport_mode", &draft.transport_mode);
    check_container_type(errors, draft.container_type);
    require(errors, "port", &draft.port);
    check_agent_number(errors, draft.clearing_agent_num.as_deref());
}

fn validate_export(errors: &mut FieldErrors, draft: &ExportDraft) {
    require(errors, "city", &draft.city);
    require(errors, "transport_mode", &draft.transport_mode);
    check_container_type(errors, draft.container_type);
    require(errors, "pol", &draft.pol);
    require(errors, "pod", &draft.pod);
    require(errors, "product", &draft.product);
    require(errors, "incoterms", &draft.incoterms);
    check_agent_number(errors, draft.clearing_agent_num.as_deref());
}

fn validate_freight(errors: &mut FieldErrors, draft: &FreightDraft) {
    require(errors, "city", &draft.city);
    require(errors, "transport_mode", &draft.transport_mode);
    check_container_type(errors, draft.container_type);
    require(errors, "pol", &draft.pol);
    require(errors, "pod", &draft.pod);
    require(errors, "product", &draft.product);
    require(errors, "incoterms", &draft.incoterms);
    check_agent_number(errors, draft.clearing_agent_num.as_deref());

    match draft.container_type {
        Some(ContainerType::Lcl) => {
            check_numeric(errors, "cbm", &draft.cbm);
            check_numeric(errors, "packages", &draft.packages);
        }
        Some(ContainerType::Fcl) => {
            require(errors, "container_size", &draft.container_size);
            check_numeric(errors, "number_of_containers", &draft.number_of_containers);
        }
        None => {}
    }
}

/// Validate a clearance draft of any trade type. Empty map = submittable.
pub fn validate_clearance(draft: &ClearanceDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    match draft {
        ClearanceDraft::Import(d) => validate_import(&mut errors, d),
        ClearanceDraft::Export(d) => validate_export(&mut errors, d),
        ClearanceDraft::FreightForwarding(d) => validate_freight(&mut errors, d),
    }
    check_documents(&mut errors, draft);
    errors
}
