//! HTTP client for token refresh and license verification

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::{error_text, ApiClient};
use crate::error::{RefreshFailure, VerifyError};
use crate::state::{EntitlementState, Plan};

pub const REFRESH_PATH: &str = "/api/entitlement/refresh";
pub const VERIFY_PATH: &str = "/api/license/verify";

const VERIFY_FALLBACK: &str = "Verification failed";

/// The remote authorization service, as seen by the controller.
#[async_trait]
pub trait AuthorizationService: Send + Sync {
    /// Renews `token`. Every failure comes back as `RefreshFailure`.
    async fn refresh(&self, token: &str) -> Result<EntitlementState, RefreshFailure>;

    /// Redeems a license key for a new entitlement.
    async fn verify(&self, license_key: &str) -> Result<EntitlementState, VerifyError>;
}

#[derive(Debug, Serialize)]
pub struct RefreshRequest<'a> {
    pub entitlement_token: &'a str,
}

#[derive(Debug, Serialize)]
pub struct VerifyRequest<'a> {
    pub license_key: &'a str,
}

/// Body returned by both refresh and verify.
#[derive(Debug, Deserialize)]
pub struct EntitlementResponse {
    pub entitlement_token: String,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub expires_at: Option<i64>,
}

impl From<EntitlementResponse> for EntitlementState {
    fn from(resp: EntitlementResponse) -> Self {
        EntitlementState {
            token: resp.entitlement_token,
            plan: resp.plan.as_deref().map(Plan::parse).unwrap_or_default(),
            expires_at: resp.expires_at.unwrap_or(0),
        }
    }
}

/// `AuthorizationService` over the backend's HTTP API.
#[derive(Debug, Clone)]
pub struct EntitlementClient {
    api: ApiClient,
}

impl EntitlementClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthorizationService for EntitlementClient {
    async fn refresh(&self, token: &str) -> Result<EntitlementState, RefreshFailure> {
        tracing::debug!(url = %self.api.endpoint(REFRESH_PATH), "refreshing entitlement");
        let resp = self
            .api
            .http()
            .post(self.api.endpoint(REFRESH_PATH))
            .json(&RefreshRequest {
                entitlement_token: token,
            })
            .send()
            .await
            .map_err(|e| RefreshFailure::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(RefreshFailure::Status(resp.status().as_u16()));
        }

        let data: EntitlementResponse = resp
            .json()
            .await
            .map_err(|e| RefreshFailure::Malformed(e.to_string()))?;
        Ok(data.into())
    }

    async fn verify(&self, license_key: &str) -> Result<EntitlementState, VerifyError> {
        tracing::debug!(url = %self.api.endpoint(VERIFY_PATH), "verifying license key");
        let resp = self
            .api
            .http()
            .post(self.api.endpoint(VERIFY_PATH))
            .json(&VerifyRequest { license_key })
            .send()
            .await
            .map_err(crate::error::RequestError::from)?;

        if !resp.status().is_success() {
            let status = resp.status();
            let message = error_text(resp, VERIFY_FALLBACK).await;
            tracing::info!(%status, "license verification rejected");
            return Err(VerifyError::Rejected(message));
        }

        let data: EntitlementResponse = resp
            .json()
            .await
            .map_err(|e| VerifyError::Malformed(e.to_string()))?;
        Ok(data.into())
    }
}
