//! FuelCheck client error types.

use std::fmt;

/// The upstream endpoint a request was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ReferenceData,
    PricesByLocation,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::ReferenceData => f.write_str("reference data"),
            Endpoint::PricesByLocation => f.write_str("fuel stations"),
        }
    }
}

/// Errors from the FuelCheck API connector.
#[derive(Debug, thiserror::Error)]
pub enum FuelApiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("failed to fetch {endpoint}: {status}")]
    Api {
        endpoint: Endpoint,
        status: u16,
        message: String,
    },

    /// JSON deserialization failed
    #[error("JSON parse error for {endpoint}: {message}")]
    Json {
        endpoint: Endpoint,
        message: String,
        body: Option<String>,
    },

    /// Client could not be built from its configuration
    #[error("not configured: {0}")]
    NotConfigured(String),
}

impl FuelApiError {
    /// HTTP status carried by the error, if the upstream answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FuelApiError::Api { status, .. } => Some(*status),
            FuelApiError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
