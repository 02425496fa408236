use thiserror::Error;

/// Errors returned by the FTC complaints client.
#[derive(Debug, Error)]
pub enum FtcError {
    /// Network or TLS failure, timeout, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// A single complaint record could not be turned into a report.
    #[error("normalization error for record {record_id}: {reason}")]
    Normalization { record_id: String, reason: String },
}
