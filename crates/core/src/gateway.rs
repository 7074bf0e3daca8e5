//! Authorized conversion requests with paywall detection

use serde::{Deserialize, Serialize};

use crate::api::{error_text, ApiClient};
use crate::error::{ConvertError, RequestError};

pub const CONVERT_PATH: &str = "/api/convert";

const CONVERT_FALLBACK: &str = "Conversion failed";

#[derive(Debug, Serialize)]
pub struct ConvertRequest<'a> {
    pub value: f64,
    pub from_unit: &'a str,
    pub to_unit: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ConvertResponse {
    pub result: f64,
}

/// Sends conversions to the backend on behalf of the current entitlement.
#[derive(Debug, Clone)]
pub struct ConversionGateway {
    api: ApiClient,
}

impl ConversionGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Converts `value` from `from_unit` to `to_unit`.
    ///
    /// A bearer credential is attached only when `token` is non-empty.
    /// HTTP 402 is always `ConvertError::Paywall`, whatever the body says.
    pub async fn convert(
        &self,
        value: f64,
        from_unit: &str,
        to_unit: &str,
        token: &str,
    ) -> Result<f64, ConvertError> {
        let mut req = self
            .api
            .http()
            .post(self.api.endpoint(CONVERT_PATH))
            .json(&ConvertRequest {
                value,
                from_unit,
                to_unit,
            });
        if !token.is_empty() {
            req = req.bearer_auth(token);
        }

        tracing::debug!(from_unit, to_unit, authorized = !token.is_empty(), "sending conversion");
        let resp = req.send().await.map_err(RequestError::from)?;

        let status = resp.status();
        if status == reqwest::StatusCode::PAYMENT_REQUIRED {
            tracing::info!(from_unit, to_unit, "conversion rejected by paywall");
            return Err(ConvertError::Paywall);
        }
        if !status.is_success() {
            let message = error_text(resp, CONVERT_FALLBACK).await;
            return Err(RequestError::new(message).into());
        }

        let data: ConvertResponse = resp
            .json()
            .await
            .map_err(|e| RequestError::new(format!("{CONVERT_FALLBACK}: {e}")))?;
        Ok(data.result)
    }
}
