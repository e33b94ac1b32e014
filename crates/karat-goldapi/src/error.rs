use thiserror::Error;

/// Errors returned by the `GoldAPI` spot-price client.
#[derive(Debug, Error)]
pub enum GoldApiError {
    /// Network or TLS failure from the underlying HTTP client, or a non-2xx
    /// HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response parsed as JSON but did not carry a usable price.
    #[error("malformed GoldAPI payload: {0}")]
    MalformedPayload(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
