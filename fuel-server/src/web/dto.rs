//! Response bodies for the HTTP endpoints.

use serde::Serialize;

use crate::domain::NormalizedStation;

/// Body of `POST /stations`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationsResponse {
    /// Milliseconds since the Unix epoch when the response was built.
    pub last_update: i64,
    pub stations: Vec<NormalizedStation>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
