//! HTTP transport for the station query pipeline.
//!
//! JSON endpoints wrapping [`QueryService`](crate::query::QueryService).

mod dto;
mod routes;
mod state;

pub use dto::{ErrorResponse, StationsResponse};
pub use routes::{AppError, create_router};
pub use state::AppState;
