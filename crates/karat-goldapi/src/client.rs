//! HTTP client for the GoldAPI spot-price endpoint.
//!
//! Wraps `reqwest` with access-token header handling and the troy-ounce to
//! gram conversion. The fallback entry point absorbs every failure into a
//! fixed per-gram constant so that a flaky upstream never breaks catalogue
//! requests.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GoldApiError;

const DEFAULT_BASE_URL: &str = "https://www.goldapi.io/api/";

/// Grams per troy ounce; GoldAPI quotes XAU/USD per troy ounce.
pub const TROY_OUNCE_GRAMS: f64 = 31.1035;

/// Per-gram USD quote used whenever the upstream cannot be reached.
pub const FALLBACK_PRICE_PER_GRAM: f64 = 75.0;

/// Client for the GoldAPI `XAU/USD` spot-price endpoint.
///
/// Manages the HTTP client, access token, and base URL. Use
/// [`GoldApiClient::new`] for production or [`GoldApiClient::with_base_url`]
/// to point at a mock server in tests.
pub struct GoldApiClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl GoldApiClient {
    /// Creates a new client pointed at the production GoldAPI endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GoldApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, GoldApiError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GoldApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GoldApiError::MalformedPayload`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GoldApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("karat/0.1 (catalogue-pricing)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join() appends the symbol path instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| {
            GoldApiError::MalformedPayload(format!("invalid base URL '{base_url}': {e}"))
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches the current XAU/USD spot price, converted to USD per gram.
    ///
    /// Calls `GET {base}/XAU/USD` with the `x-access-token` header and
    /// divides the per-troy-ounce figure by [`TROY_OUNCE_GRAMS`].
    ///
    /// # Errors
    ///
    /// - [`GoldApiError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GoldApiError::Deserialize`] if the body is not valid JSON.
    /// - [`GoldApiError::MalformedPayload`] if the payload carries no
    ///   positive numeric `price` field.
    pub async fn fetch_price_per_gram(&self) -> Result<f64, GoldApiError> {
        let url = self
            .base_url
            .join("XAU/USD")
            .map_err(|e| GoldApiError::MalformedPayload(format!("invalid quote URL: {e}")))?;

        let response = self
            .client
            .get(url.clone())
            .header("x-access-token", &self.api_key)
            .header("Content-Type", "application/json")
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let json: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| GoldApiError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        let price_per_ounce = json
            .get("price")
            .and_then(serde_json::Value::as_f64)
            .ok_or_else(|| {
                GoldApiError::MalformedPayload("response has no numeric 'price' field".to_string())
            })?;

        if price_per_ounce <= 0.0 {
            return Err(GoldApiError::MalformedPayload(format!(
                "non-positive spot price: {price_per_ounce}"
            )));
        }

        Ok(price_per_ounce / TROY_OUNCE_GRAMS)
    }

    /// Fetches the per-gram quote, absorbing every failure into
    /// [`FALLBACK_PRICE_PER_GRAM`].
    ///
    /// This is the entry point the retrieval pipeline uses: quote failures
    /// are logged and never surfaced to callers. There is no retry and no
    /// caching — each retrieval call pays one upstream round-trip.
    pub async fn price_per_gram_or_fallback(&self) -> f64 {
        match self.fetch_price_per_gram().await {
            Ok(price_per_gram) => {
                tracing::info!(price_per_gram, "fetched live gold price");
                price_per_gram
            }
            Err(e) => {
                tracing::warn!(error = %e, fallback = FALLBACK_PRICE_PER_GRAM, "gold price fetch failed, using fallback");
                FALLBACK_PRICE_PER_GRAM
            }
        }
    }
}
