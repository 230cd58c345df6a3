//! Display-ready station record.

use serde::Serialize;

/// A station price normalized for display.
///
/// Built once per upstream record per request and never mutated; the
/// pipeline only filters and reorders these.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedStation {
    /// Upstream station name, untouched.
    pub name: String,
    pub brand: String,

    /// Short place label derived from the name and address
    /// (e.g. "West Botany North").
    pub location: String,

    pub address: String,

    /// Price formatted in the configured unit.
    pub price: String,

    /// Price in cents per litre, used for sorting.
    pub raw_price: f64,

    /// Kilometres from the query centre.
    pub distance: f64,

    pub fuel_type: String,
    pub is_open_now: bool,
    pub is_closing_soon: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    /// Cost of a full tank, when a tank size is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tank_price: Option<String>,
}
