//! Mock FuelCheck connector for testing without API access.
//!
//! Serves reference data and station records from memory or from JSON
//! fixture files, and records the station queries it receives.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::domain::BoundingBox;

use super::connector::ApiConnector;
use super::error::{Endpoint, FuelApiError};
use super::types::{RawStation, ReferenceData};

/// Reference data fixture file name.
const REFDATA_FILE: &str = "refData.json";

/// Station price fixture file name.
const PRICES_FILE: &str = "prices.json";

/// A station query as received by the mock.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedQuery {
    pub fuel_type: String,
    pub brands: Vec<String>,
    pub bbox: BoundingBox,
}

/// Mock connector that serves fixed data.
#[derive(Clone, Default)]
pub struct MockFuelApi {
    reference: ReferenceData,
    /// Served for any fuel type without its own entry.
    stations: Vec<RawStation>,
    by_fuel_type: HashMap<String, Vec<RawStation>>,
    reference_failure: Option<u16>,
    stations_failure: Option<u16>,
    queries: Arc<Mutex<Vec<RecordedQuery>>>,
}

impl MockFuelApi {
    /// Create a mock serving the given reference data and stations.
    pub fn new(reference: ReferenceData, stations: Vec<RawStation>) -> Self {
        Self {
            reference,
            stations,
            ..Self::default()
        }
    }

    /// Load fixtures from a directory containing `refData.json` and
    /// `prices.json`.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, FuelApiError> {
        let data_dir = data_dir.as_ref();
        let reference = load_fixture(&data_dir.join(REFDATA_FILE), Endpoint::ReferenceData)?;
        let stations = load_fixture(&data_dir.join(PRICES_FILE), Endpoint::PricesByLocation)?;
        Ok(Self::new(reference, stations))
    }

    /// Serve a dedicated station list for one fuel type.
    pub fn with_fuel_type_stations(
        mut self,
        fuel_type: impl Into<String>,
        stations: Vec<RawStation>,
    ) -> Self {
        self.by_fuel_type.insert(fuel_type.into(), stations);
        self
    }

    /// Make reference data requests fail with the given status.
    pub fn fail_reference_data(mut self, status: u16) -> Self {
        self.reference_failure = Some(status);
        self
    }

    /// Make station requests fail with the given status.
    pub fn fail_stations(mut self, status: u16) -> Self {
        self.stations_failure = Some(status);
        self
    }

    /// Station queries received so far, in order.
    pub fn queries(&self) -> Vec<RecordedQuery> {
        self.queries
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }

    /// Number of station records served for any fuel type.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }
}

impl ApiConnector for MockFuelApi {
    async fn fetch_reference_data(&self) -> Result<ReferenceData, FuelApiError> {
        if let Some(status) = self.reference_failure {
            return Err(FuelApiError::Api {
                endpoint: Endpoint::ReferenceData,
                status,
                message: "mock failure".to_string(),
            });
        }
        Ok(self.reference.clone())
    }

    async fn fetch_stations_by_location(
        &self,
        fuel_type: &str,
        brands: &[String],
        bbox: &BoundingBox,
    ) -> Result<Vec<RawStation>, FuelApiError> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(RecordedQuery {
                fuel_type: fuel_type.to_string(),
                brands: brands.to_vec(),
                bbox: *bbox,
            });
        }

        if let Some(status) = self.stations_failure {
            return Err(FuelApiError::Api {
                endpoint: Endpoint::PricesByLocation,
                status,
                message: "mock failure".to_string(),
            });
        }

        Ok(self
            .by_fuel_type
            .get(fuel_type)
            .unwrap_or(&self.stations)
            .clone())
    }
}

fn load_fixture<T: serde::de::DeserializeOwned>(
    path: &Path,
    endpoint: Endpoint,
) -> Result<T, FuelApiError> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        FuelApiError::NotConfigured(format!("failed to read {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&json).map_err(|e| FuelApiError::Json {
        endpoint,
        message: format!("{}: {}", path.display(), e),
        body: None,
    })
}
