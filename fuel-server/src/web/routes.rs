//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Local;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::fuelcheck::ApiConnector;
use crate::query::{QueryConfig, ValidationResult};

use super::dto::{ErrorResponse, StationsResponse};
use super::state::AppState;

/// Create the application router.
pub fn create_router<C>(state: AppState<C>) -> Router
where
    C: ApiConnector + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/stations", post(stations::<C>))
        .route("/config/validate", post(validate::<C>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Stations for a query configuration.
///
/// Never fails: a malformed body, an invalid configuration or an upstream
/// failure all produce an empty station list.
async fn stations<C>(
    State(state): State<AppState<C>>,
    payload: Result<Json<QueryConfig>, JsonRejection>,
) -> Json<StationsResponse>
where
    C: ApiConnector + Send + Sync + 'static,
{
    let stations = match payload {
        Ok(Json(config)) => match state.service.get_stations(&config).await {
            Ok(stations) => {
                info!(count = stations.len(), "served stations");
                stations
            }
            Err(e) => {
                warn!(error = %e, "station query failed");
                Vec::new()
            }
        },
        Err(rejection) => {
            warn!(error = %rejection, "unreadable station query");
            Vec::new()
        }
    };

    Json(StationsResponse {
        last_update: Local::now().timestamp_millis(),
        stations,
    })
}

/// Validate a configuration against current reference data.
async fn validate<C>(
    State(state): State<AppState<C>>,
    payload: Result<Json<QueryConfig>, JsonRejection>,
) -> Result<Json<ValidationResult>, AppError>
where
    C: ApiConnector + Send + Sync + 'static,
{
    let Json(config) = payload?;
    Ok(Json(state.service.validate_config(&config).await))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
