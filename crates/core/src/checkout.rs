//! Checkout session creation and hand-off to an external browser

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::api::ApiClient;
use crate::error::RequestError;

pub const CHECKOUT_PATH: &str = "/api/checkout/create";

const CHECKOUT_FALLBACK: &str = "Checkout creation failed";

/// Monthly Pro price in USD
pub const PRO_MONTHLY_USD: u32 = 3;
/// Yearly Pro price in USD
pub const PRO_YEARLY_USD: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutInterval {
    #[default]
    Monthly,
    Yearly,
}

impl CheckoutInterval {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckoutInterval::Monthly => "monthly",
            CheckoutInterval::Yearly => "yearly",
        }
    }

    pub fn price_label(self) -> String {
        match self {
            CheckoutInterval::Monthly => format!("Monthly - ${PRO_MONTHLY_USD}"),
            CheckoutInterval::Yearly => format!("Yearly - ${PRO_YEARLY_USD}"),
        }
    }
}

impl fmt::Display for CheckoutInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckoutInterval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(CheckoutInterval::Monthly),
            "yearly" => Ok(CheckoutInterval::Yearly),
            other => Err(format!(
                "unknown interval '{other}' (expected monthly or yearly)"
            )),
        }
    }
}

/// Something that can show a URL to the user, usually a browser.
pub trait UrlOpener {
    fn open(&self, url: &str) -> std::io::Result<()>;
}

#[derive(Debug, Deserialize)]
pub struct CheckoutResponse {
    pub checkout_url: String,
}

#[derive(Debug, Deserialize)]
struct CheckoutErrorBody {
    detail: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CheckoutInitiator {
    api: ApiClient,
}

impl CheckoutInitiator {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Requests a payment-session URL. The URL is returned unmodified.
    pub async fn create_checkout(&self, interval: CheckoutInterval) -> Result<String, RequestError> {
        tracing::debug!(%interval, "creating checkout session");
        let resp = self
            .api
            .http()
            .get(self.api.endpoint(CHECKOUT_PATH))
            .query(&[("plan", interval.as_str())])
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(RequestError::new(checkout_error_message(&body)));
        }

        let data: CheckoutResponse = serde_json::from_str(&body)
            .map_err(|e| RequestError::new(format!("{CHECKOUT_FALLBACK}: {e}")))?;
        Ok(data.checkout_url)
    }

    /// Creates a checkout session and hands its URL to `opener`.
    ///
    /// Completion is not tracked. If the opener fails the URL is still
    /// returned so the caller can show it.
    pub async fn initiate(
        &self,
        interval: CheckoutInterval,
        opener: &dyn UrlOpener,
    ) -> Result<String, RequestError> {
        let url = self.create_checkout(interval).await?;
        if let Err(e) = opener.open(&url) {
            tracing::warn!(error = %e, "could not open checkout page");
        }
        Ok(url)
    }
}

/// `detail` from a JSON error body, else the raw text, else a fallback.
fn checkout_error_message(body: &str) -> String {
    if let Ok(CheckoutErrorBody {
        detail: Some(detail),
    }) = serde_json::from_str::<CheckoutErrorBody>(body)
    {
        if !detail.trim().is_empty() {
            return detail;
        }
        return CHECKOUT_FALLBACK.to_string();
    }
    let text = body.trim();
    if text.is_empty() || text.starts_with('{') {
        CHECKOUT_FALLBACK.to_string()
    } else {
        text.to_string()
    }
}
