//! Typed HTTP client for the karat retrieval API.
//!
//! Wraps `reqwest` with the two read operations the frontend consumes:
//! filtered product lists and single-product lookups. The base URL is
//! injected at construction, so tests can point at a mock server.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use karat_core::EnrichedProduct;

use crate::error::ClientError;

/// Optional query parameters for `GET /products`.
///
/// `limit`/`offset` are forwarded as-is; the server accepts them without
/// applying pagination.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProductsQuery {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_popularity: Option<f64>,
    pub max_popularity: Option<f64>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ProductsQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let mut push = |key, value: Option<String>| {
            if let Some(v) = value {
                pairs.push((key, v));
            }
        };
        push("minPrice", self.min_price.map(|v| v.to_string()));
        push("maxPrice", self.max_price.map(|v| v.to_string()));
        push("minPopularity", self.min_popularity.map(|v| v.to_string()));
        push("maxPopularity", self.max_popularity.map(|v| v.to_string()));
        push("limit", self.limit.map(|v| v.to_string()));
        push("offset", self.offset.map(|v| v.to_string()));
        pairs
    }

    /// Canonical key for the query cache: the serialized parameter list.
    #[must_use]
    pub(crate) fn cache_key(&self) -> String {
        self.query_pairs()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Client for the karat retrieval API.
pub struct ShopApiClient {
    client: Client,
    base_url: Url,
}

impl ShopApiClient {
    /// Creates a new client for the API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("karat-client/0.1")
            .build()?;

        // Normalise: one trailing slash so join() appends path segments.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("'{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    /// `GET /products` with the query's present parameters appended.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::Status`] on a non-2xx response.
    /// - [`ClientError::Deserialize`] if the body is not a product array.
    pub async fn list_products(
        &self,
        query: &ProductsQuery,
    ) -> Result<Vec<EnrichedProduct>, ClientError> {
        let mut url = self.products_url(None)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query.query_pairs() {
                pairs.append_pair(k, &v);
            }
        }

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    /// `GET /products/{id}`. A 404 maps to `Ok(None)` — an id outside the
    /// catalogue is an expected answer, not an error.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::Status`] on a non-2xx, non-404 response.
    /// - [`ClientError::Deserialize`] if the body is not a product.
    pub async fn get_product(&self, id: u32) -> Result<Option<EnrichedProduct>, ClientError> {
        let url = self.products_url(Some(id))?;

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| ClientError::Deserialize {
                context: url.to_string(),
                source: e,
            })
    }

    fn products_url(&self, id: Option<u32>) -> Result<Url, ClientError> {
        let path = match id {
            Some(id) => format!("products/{id}"),
            None => "products".to_string(),
        };
        self.base_url
            .join(&path)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("cannot join '{path}': {e}")))
    }
}
