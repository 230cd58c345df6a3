//! Public entry points of the query pipeline.

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use crate::domain::NormalizedStation;
use crate::fuelcheck::ApiConnector;

use super::config::QueryConfig;
use super::repository::{RepositoryError, StationRepository};
use super::validate::{ValidationResult, validate_config};

/// Error returned by [`QueryService::get_stations`].
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The configuration failed validation. Carries every violation.
    #[error("Configuration validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Fetching stations failed after validation passed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Validates configurations and answers station queries.
pub struct QueryService<C> {
    repository: StationRepository<C>,
}

impl<C: ApiConnector> QueryService<C> {
    pub fn new(connector: C) -> Self {
        Self {
            repository: StationRepository::new(connector),
        }
    }

    /// Validate a configuration against fresh reference data.
    ///
    /// A failed reference data fetch is reported as an invalid result.
    pub async fn validate_config(&self, config: &QueryConfig) -> ValidationResult {
        match self.repository.get_reference_data().await {
            Ok(reference) => validate_config(config, &reference),
            Err(e) => ValidationResult::invalid(api_validation_failed(&e)),
        }
    }

    /// Validate, then fetch stations as of the local wall clock.
    pub async fn get_stations(
        &self,
        config: &QueryConfig,
    ) -> Result<Vec<NormalizedStation>, QueryError> {
        self.get_stations_at(config, Local::now().naive_local()).await
    }

    /// Validate, then fetch stations as of `now`.
    ///
    /// Reference data is fetched once and shared by validation and mapping.
    pub async fn get_stations_at(
        &self,
        config: &QueryConfig,
        now: NaiveDateTime,
    ) -> Result<Vec<NormalizedStation>, QueryError> {
        let reference = self
            .repository
            .get_reference_data()
            .await
            .map_err(|e| QueryError::Validation(vec![api_validation_failed(&e)]))?;

        let validation = validate_config(config, &reference);
        if !validation.is_valid {
            debug!(errors = ?validation.errors, "rejecting invalid configuration");
            return Err(QueryError::Validation(validation.errors));
        }

        let stations = self
            .repository
            .get_stations_with_reference(config, &reference, now)
            .await?;
        Ok(stations)
    }
}

fn api_validation_failed(e: &RepositoryError) -> String {
    format!("API validation failed: {e}")
}
