//! Domain methods for the Freightdesk API client.
//!
//! Response types live in `freightdesk_core::models`; request wrapper types
//! (signup, profile update) are defined here. The high-level `submit_*`
//! methods run the full form-to-payload pipeline: validate, upload, assemble,
//! POST.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use freightdesk_core::models::{
    BookingDraft, ClearanceDraft, ClearanceRequestResponse, LocationPoint, ShipmentPayload,
    ShipmentResponse, TokenPair, UserResponse,
};
use freightdesk_core::payload::ClearanceRequestPayload;
use freightdesk_core::{
    assemble_clearance_payload, assemble_shipment_payload, validate_booking, validate_clearance,
    AppError,
};

use crate::{upload_documents, ApiClient};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
}

/// Login/signup response: the signed-in user plus a token pair.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Plain acknowledgement from auth endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiClient {
    // Auth

    /// Create an account and store the issued session.
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthSession> {
        let session: AuthSession = self.post_json("/auth/signup", request).await?;
        self.save_session(
            TokenPair {
                access_token: session.access_token.clone(),
                refresh_token: session.refresh_token.clone(),
            },
            Some(session.user.clone()),
        )?;
        Ok(session)
    }

    /// Log in and store the issued session.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
        let body = serde_json::json!({ "email": email, "password": password });
        let session: AuthSession = self.post_json("/auth/login", &body).await?;
        self.save_session(
            TokenPair {
                access_token: session.access_token.clone(),
                refresh_token: session.refresh_token.clone(),
            },
            Some(session.user.clone()),
        )?;
        Ok(session)
    }

    /// Drop the stored session. Client-side only; tokens simply expire.
    pub fn logout(&self) -> Result<()> {
        self.token_store().clear()
    }

    /// Fetch the signed-in user and refresh the cached copy.
    pub async fn me(&self) -> Result<UserResponse> {
        let user: UserResponse = self.get("/auth/me", &[]).await?;
        if let Some(mut creds) = self.token_store().load()? {
            creds.user = Some(user.clone());
            self.token_store().save(&creds)?;
        }
        Ok(user)
    }

    pub async fn verify_email(&self, token: &str) -> Result<MessageResponse> {
        self.get("/auth/verify-email", &[("token", token.to_string())])
            .await
    }

    pub async fn resend_verification(&self) -> Result<MessageResponse> {
        self.post_json("/auth/resend-verification", &serde_json::json!({}))
            .await
    }

    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse> {
        self.post_json("/auth/forgot-password", &serde_json::json!({ "email": email }))
            .await
    }

    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<MessageResponse> {
        let body = serde_json::json!({ "token": token, "newPassword": new_password });
        self.post_json("/auth/reset-password", &body).await
    }

    // Users

    /// Update the signed-in user's profile and refresh the cached copy.
    pub async fn update_me(&self, request: &UpdateProfileRequest) -> Result<UserResponse> {
        let user: UserResponse = self.patch_json("/users/me", Some(request)).await?;
        if let Some(mut creds) = self.token_store().load()? {
            creds.user = Some(user.clone());
            self.token_store().save(&creds)?;
        }
        Ok(user)
    }

    /// Delete the account and drop the stored session.
    pub async fn delete_me(&self) -> Result<()> {
        self.delete("/users/me").await?;
        self.token_store().clear()
    }

    // Shipments

    pub async fn create_shipment(&self, payload: &ShipmentPayload) -> Result<ShipmentResponse> {
        self.post_json("/shipments", payload).await
    }

    pub async fn list_my_shipments(&self, status: Option<&str>) -> Result<Vec<ShipmentResponse>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }
        self.get("/shipments/mine", &query).await
    }

    pub async fn get_shipment(&self, id: Uuid) -> Result<ShipmentResponse> {
        self.get(&format!("/shipments/{}", id), &[]).await
    }

    /// Full-object update; the backend diffs server-side.
    pub async fn update_shipment(
        &self,
        id: Uuid,
        payload: &ShipmentPayload,
    ) -> Result<ShipmentResponse> {
        self.put_json(&format!("/shipments/{}", id), payload).await
    }

    pub async fn cancel_shipment(&self, id: Uuid) -> Result<ShipmentResponse> {
        self.patch_json::<ShipmentResponse, serde_json::Value>(
            &format!("/shipments/{}/cancel", id),
            None,
        )
        .await
    }

    /// Propose an alternate budget for a pending booking.
    pub async fn request_discount(
        &self,
        id: Uuid,
        proposed_budget: f64,
    ) -> Result<ShipmentResponse> {
        let body = serde_json::json!({ "proposedBudget": proposed_budget });
        self.post_json(&format!("/shipments/{}/discount-request", id), &body)
            .await
    }

    pub async fn confirm_shipment(&self, id: Uuid) -> Result<ShipmentResponse> {
        self.patch_json::<ShipmentResponse, serde_json::Value>(
            &format!("/shipments/{}/confirm", id),
            None,
        )
        .await
    }

    /// Latest reported position for an in-transit shipment.
    pub async fn current_location(&self, shipment_id: Uuid) -> Result<LocationPoint> {
        self.get(&format!("/location/shipments/{}/current", shipment_id), &[])
            .await
    }

    // Clearance requests

    pub async fn list_clearance_requests(&self) -> Result<Vec<ClearanceRequestResponse>> {
        self.get("/clearance-requests", &[]).await
    }

    pub async fn get_clearance_request(&self, id: Uuid) -> Result<ClearanceRequestResponse> {
        self.get(&format!("/clearance-requests/{}", id), &[]).await
    }

    pub async fn create_clearance_request(
        &self,
        payload: &ClearanceRequestPayload,
    ) -> Result<ClearanceRequestResponse> {
        self.post_json("/clearance-requests", payload).await
    }

    pub async fn update_clearance_request(
        &self,
        id: Uuid,
        payload: &ClearanceRequestPayload,
    ) -> Result<ClearanceRequestResponse> {
        self.patch_json(&format!("/clearance-requests/{}", id), Some(payload))
            .await
    }

    // Form-to-payload pipelines

    /// Validate a booking draft and create (or, with `existing`, fully
    /// replace) the shipment. Validation failure aborts before any network
    /// call, carrying the field -> message map.
    pub async fn submit_booking(
        &self,
        draft: &BookingDraft,
        existing: Option<Uuid>,
    ) -> Result<ShipmentResponse> {
        let errors = validate_booking(draft);
        if !errors.is_empty() {
            return Err(AppError::validation(errors).into());
        }
        let payload = assemble_shipment_payload(draft)?;
        match existing {
            Some(id) => self.update_shipment(id, &payload).await,
            None => self.create_shipment(&payload).await,
        }
    }

    /// Validate a clearance draft, upload its documents one at a time, and
    /// submit the assembled request. The first upload failure aborts the
    /// whole submission.
    pub async fn submit_clearance(
        &self,
        draft: &ClearanceDraft,
    ) -> Result<ClearanceRequestResponse> {
        let errors = validate_clearance(draft);
        if !errors.is_empty() {
            return Err(AppError::validation(errors).into());
        }
        let uploaded = upload_documents(self, draft.documents()).await?;
        let payload = assemble_clearance_payload(draft, &uploaded);
        self.create_clearance_request(&payload).await
    }
}
