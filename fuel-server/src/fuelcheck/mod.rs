//! NSW FuelCheck API connector.
//!
//! This module provides the HTTP client for the public FuelCheck API and a
//! fixture-backed mock, both behind the [`ApiConnector`] trait.
//!
//! Key characteristics of FuelCheck:
//! - Reference data lists inactive brands and fuel types alongside active
//!   ones; only active entries are meaningful
//! - Station names, brands and addresses are free text
//! - Prices are in cents per litre

mod client;
mod connector;
mod error;
mod mock;
mod types;

pub use client::{FuelCheckClient, FuelCheckConfig};
pub use connector::{ApiConnector, SELECT_ALL, brands_param};
pub use error::{Endpoint, FuelApiError};
pub use mock::{MockFuelApi, RecordedQuery};
pub use types::{BrandItem, BrandList, FuelTypeItem, FuelTypeList, RawStation, ReferenceData, TradingHour};
