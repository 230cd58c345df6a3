//! FuelCheck HTTP client.
//!
//! Provides async methods for querying the NSW FuelCheck API: the reference
//! data list and station prices within a bounding box.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::BoundingBox;

use super::connector::{ApiConnector, brands_param};
use super::error::{Endpoint, FuelApiError};
use super::types::{RawStation, ReferenceData};

/// Default base URL for the FuelCheck API.
const DEFAULT_BASE_URL: &str = "https://www.fuelcheck.nsw.gov.au/fuel/api/v1/fuel";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the FuelCheck client.
#[derive(Debug, Clone)]
pub struct FuelCheckConfig {
    /// Base URL for the API (defaults to production FuelCheck)
    pub base_url: String,
    /// Optional API key sent as the `apikey` header
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FuelCheckConfig {
    /// Create a config pointing at the public FuelCheck API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set an API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for FuelCheckConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// FuelCheck API client.
#[derive(Debug, Clone)]
pub struct FuelCheckClient {
    http: reqwest::Client,
    base_url: String,
}

impl FuelCheckClient {
    /// Create a new client with the given configuration.
    pub fn new(config: FuelCheckConfig) -> Result<Self, FuelApiError> {
        let mut headers = HeaderMap::new();

        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|_| FuelApiError::NotConfigured("invalid API key format".to_string()))?;
            headers.insert(HeaderName::from_static("apikey"), value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the fuel type and brand reference lists.
    pub async fn get_reference_data(&self) -> Result<ReferenceData, FuelApiError> {
        let url = format!("{}/refData", self.base_url);
        let response = self.http.get(&url).send().await?;
        read_json(response, Endpoint::ReferenceData).await
    }

    /// Get station prices for a fuel type within a bounding box.
    pub async fn get_prices_by_location(
        &self,
        fuel_type: &str,
        brands: &[String],
        bbox: &BoundingBox,
    ) -> Result<Vec<RawStation>, FuelApiError> {
        let url = format!("{}/prices/bylocation", self.base_url);
        let brands = brands_param(brands);

        debug!(fuel_type, brands = %brands, ?bbox, "Fetching prices by location");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("fuelType", fuel_type.to_string()),
                ("brands", brands),
                ("bottomLeftLatitude", bbox.south.to_string()),
                ("bottomLeftLongitude", bbox.west.to_string()),
                ("topRightLatitude", bbox.north.to_string()),
                ("topRightLongitude", bbox.east.to_string()),
            ])
            .send()
            .await?;

        read_json(response, Endpoint::PricesByLocation).await
    }
}

impl ApiConnector for FuelCheckClient {
    async fn fetch_reference_data(&self) -> Result<ReferenceData, FuelApiError> {
        self.get_reference_data().await
    }

    async fn fetch_stations_by_location(
        &self,
        fuel_type: &str,
        brands: &[String],
        bbox: &BoundingBox,
    ) -> Result<Vec<RawStation>, FuelApiError> {
        self.get_prices_by_location(fuel_type, brands, bbox).await
    }
}

/// Check the status and decode the body of a FuelCheck response.
async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    endpoint: Endpoint,
) -> Result<T, FuelApiError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(FuelApiError::Api {
            endpoint,
            status: status.as_u16(),
            message: body,
        });
    }

    let body = response.text().await?;

    serde_json::from_str(&body).map_err(|e| FuelApiError::Json {
        endpoint,
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })
}
