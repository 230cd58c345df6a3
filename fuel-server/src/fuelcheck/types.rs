//! FuelCheck API response DTOs.
//!
//! These types map directly to the FuelCheck JSON responses. The station
//! feed uses PascalCase keys while the reference data feed uses lowercase
//! keys, so each struct carries its own renames.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

/// Response from `GET /refData`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReferenceData {
    /// Every brand the feed knows about, active or not.
    #[serde(default)]
    pub brands: BrandList,

    /// Every fuel type the feed knows about, active or not.
    #[serde(default)]
    pub fueltypes: FuelTypeList,
}

impl ReferenceData {
    /// Codes of the fuel types that are currently active.
    pub fn active_fuel_types(&self) -> HashSet<&str> {
        self.fueltypes
            .items
            .iter()
            .filter(|ft| ft.isactive)
            .map(|ft| ft.code.as_str())
            .collect()
    }

    /// Descriptions of the brands that are currently active.
    pub fn active_brands(&self) -> HashSet<&str> {
        self.brands
            .items
            .iter()
            .filter(|b| b.isactive)
            .map(|b| b.description.as_str())
            .collect()
    }
}

/// Wrapper object around the brand entries.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BrandList {
    #[serde(default)]
    pub items: Vec<BrandItem>,
}

/// A brand entry from the reference data.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BrandItem {
    /// Brand name as it appears on station records (e.g. "BP").
    pub description: String,

    /// Inactive brands are still listed but must never match.
    #[serde(default)]
    pub isactive: bool,

    /// Logo image URL.
    #[serde(default)]
    pub logoimageurl: String,
}

/// Wrapper object around the fuel type entries.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FuelTypeList {
    #[serde(default)]
    pub items: Vec<FuelTypeItem>,
}

/// A fuel type entry from the reference data.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FuelTypeItem {
    /// Fuel type code (e.g. "P95", "E10", "DL").
    pub code: String,

    #[serde(default)]
    pub isactive: bool,
}

/// A station price record from `GET /prices/bylocation`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawStation {
    /// Free-text station name, usually prefixed with the brand.
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Brand", default, deserialize_with = "null_as_default")]
    pub brand: String,

    /// Free-text postal address with inconsistent casing and abbreviations.
    #[serde(rename = "Address", default, deserialize_with = "null_as_default")]
    pub address: String,

    /// Price in cents per litre.
    #[serde(rename = "Price")]
    pub price: f64,

    /// Distance from the query centre in kilometres.
    #[serde(rename = "Distance", default, deserialize_with = "null_as_default")]
    pub distance: f64,

    #[serde(rename = "FuelType", default, deserialize_with = "null_as_default")]
    pub fuel_type: String,

    /// Day marker identifying which trading-hours entry applies today
    /// (e.g. "SATURDAY").
    #[serde(rename = "Day", default, deserialize_with = "null_as_default")]
    pub day: String,

    /// One entry per weekday. Often empty.
    #[serde(rename = "tradinghours", default, deserialize_with = "null_as_default")]
    pub trading_hours: Vec<TradingHour>,
}

impl RawStation {
    /// The trading-hours entry matching the record's day marker.
    pub fn todays_hours(&self) -> Option<&TradingHour> {
        self.trading_hours.iter().find(|h| h.day == self.day)
    }
}

/// Trading hours for one weekday.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TradingHour {
    #[serde(rename = "Day", default, deserialize_with = "null_as_default")]
    pub day: String,

    #[serde(rename = "IsOpenNow", default, deserialize_with = "null_as_default")]
    pub is_open_now: bool,

    #[serde(rename = "IsOpen24Hours", default, deserialize_with = "null_as_default")]
    pub is_open_24_hours: bool,

    /// Closing time as a 12-hour clock string, e.g. "10:00 PM".
    #[serde(rename = "EndTime", default, deserialize_with = "null_as_default")]
    pub end_time: String,
}

/// Read an explicit JSON `null` as the field's default.
///
/// The station feed sends `null` for some optional fields instead of
/// leaving them out.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
