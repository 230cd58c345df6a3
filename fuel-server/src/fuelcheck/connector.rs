//! The seam between the query pipeline and the upstream feed.

use std::future::Future;

use crate::domain::BoundingBox;

use super::error::FuelApiError;
use super::types::{RawStation, ReferenceData};

/// Brand filter value meaning "no brand restriction".
pub const SELECT_ALL: &str = "SelectAll";

/// Source of reference data and station prices.
///
/// This abstraction allows the query pipeline to run against the live API
/// or against fixture data.
pub trait ApiConnector {
    /// Fetch the fuel type and brand reference lists.
    fn fetch_reference_data(
        &self,
    ) -> impl Future<Output = Result<ReferenceData, FuelApiError>> + Send;

    /// Fetch station prices for one fuel type inside a bounding box.
    ///
    /// `brands` is forwarded as-is; pass `[SELECT_ALL]` for every brand.
    fn fetch_stations_by_location(
        &self,
        fuel_type: &str,
        brands: &[String],
        bbox: &BoundingBox,
    ) -> impl Future<Output = Result<Vec<RawStation>, FuelApiError>> + Send;
}

/// Encode a brand list for the `brands` query parameter.
pub fn brands_param(brands: &[String]) -> String {
    brands.join("|")
}
