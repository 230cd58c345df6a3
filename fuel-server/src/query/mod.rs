//! Station query pipeline.
//!
//! [`QueryService`] validates a [`QueryConfig`] against FuelCheck reference
//! data, then [`StationRepository`] fetches, maps, filters, sorts and limits
//! the matching stations.

mod config;
mod mapper;
mod repository;
mod service;
mod validate;

pub use config::{FuelTypeSelection, QueryConfig, SortBy};
pub use mapper::map_station;
pub use repository::{RepositoryError, StationRepository, apply_filters};
pub use service::{QueryError, QueryService};
pub use validate::{ValidationResult, validate_config};
