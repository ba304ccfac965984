//! Benchmark error types.
//!
//! Configuration problems are detected up front and reported as
//! [`BenchError::MissingConfig`] before any request leaves the process.
//! Network and upstream failures propagate from the call that failed.

use thiserror::Error;

/// Errors produced while preparing or running a benchmark.
#[derive(Error, Debug)]
pub enum BenchError {
    /// One or more required environment values are unset or blank.
    #[error(
        "Missing one or more Azure env vars: AZURE_OPENAI_API_KEY, AZURE_OPENAI_ENDPOINT, \
         AZURE_OPENAI_API_VERSION, AZURE_OPENAI_DEPLOYMENT (missing: {})",
        .missing.join(", ")
    )]
    MissingConfig {
        /// Names of the variables that were not provided.
        missing: Vec<String>,
    },

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Network communication error.
    #[error("Network error: {0}")]
    Network(String),

    /// Upstream API returned a non-success status.
    #[error("Upstream error (status {status}): {body}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Response body as returned by the service.
        body: String,
    },

    /// Upstream response could not be interpreted.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Data could not be encoded as TOON.
    #[error("TOON error: {0}")]
    Toon(#[from] toon_format::ToonError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for benchmark operations
pub type Result<T> = std::result::Result<T, BenchError>;

impl From<reqwest::Error> for BenchError {
    fn from(err: reqwest::Error) -> Self {
        BenchError::Network(err.to_string())
    }
}

impl From<toml::de::Error> for BenchError {
    fn from(err: toml::de::Error) -> Self {
        BenchError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_lists_variables() {
        let err = BenchError::MissingConfig {
            missing: vec![
                "AZURE_OPENAI_ENDPOINT".to_string(),
                "AZURE_OPENAI_DEPLOYMENT".to_string(),
            ],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Missing one or more Azure env vars"));
        assert!(msg.ends_with("(missing: AZURE_OPENAI_ENDPOINT, AZURE_OPENAI_DEPLOYMENT)"));
    }

    #[test]
    fn test_upstream_display() {
        let err = BenchError::Upstream {
            status: 401,
            body: "unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "Upstream error (status 401): unauthorized");
    }

    #[test]
    fn test_toml_error_maps_to_config() {
        let err: BenchError = toml::from_str::<toml::Value>("= broken").unwrap_err().into();
        assert!(matches!(err, BenchError::Config(_)));
    }
}
