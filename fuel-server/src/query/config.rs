//! Station query configuration.
//!
//! Deserializes from the camelCase JSON the display module sends. Keys the
//! query pipeline does not use (layout and display toggles) are ignored.

use serde::{Deserialize, Serialize};

use crate::domain::{BoundingBox, LocationMode, LocationModeError, PriceUnit};
use crate::fuelcheck::SELECT_ALL;

/// One fuel type code or several.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FuelTypeSelection {
    Single(String),
    Multiple(Vec<String>),
}

impl FuelTypeSelection {
    /// Selected codes in selection order.
    pub fn codes(&self) -> &[String] {
        match self {
            FuelTypeSelection::Single(code) => std::slice::from_ref(code),
            FuelTypeSelection::Multiple(codes) => codes,
        }
    }
}

impl Default for FuelTypeSelection {
    fn default() -> Self {
        FuelTypeSelection::Multiple(Vec::new())
    }
}

impl From<&str> for FuelTypeSelection {
    fn from(code: &str) -> Self {
        FuelTypeSelection::Single(code.to_string())
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Price,
    Distance,
}

/// Parameters for one station query.
///
/// Location is given either as `lat`/`long` (plus `radius`) or as the four
/// bounding-box corners; see [`QueryConfig::location_mode`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryConfig {
    #[serde(default)]
    pub fuel_type: FuelTypeSelection,

    /// Brand descriptions to keep. Empty, or containing `SelectAll`, means
    /// every brand.
    #[serde(default)]
    pub brands: Vec<String>,

    /// Search radius in km around `lat`/`long`.
    #[serde(default = "default_radius")]
    pub radius: f64,

    #[serde(default)]
    pub sort_by: SortBy,

    /// Maximum number of stations returned. `None` returns all.
    #[serde(default = "default_limit")]
    pub limit: Option<usize>,

    /// Maximum distance in km. `None` keeps every distance.
    #[serde(default = "default_distance")]
    pub distance: Option<f64>,

    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub long: Option<f64>,

    #[serde(default)]
    pub bottom_left_latitude: Option<f64>,
    #[serde(default)]
    pub bottom_left_longitude: Option<f64>,
    #[serde(default)]
    pub top_right_latitude: Option<f64>,
    #[serde(default)]
    pub top_right_longitude: Option<f64>,

    #[serde(default = "default_show_closed")]
    pub show_closed_stations: bool,

    /// Tank size in litres. When set each station carries a full-tank price.
    #[serde(default)]
    pub show_tank_price: Option<f64>,

    #[serde(default)]
    pub price_unit: PriceUnit,
}

fn default_radius() -> f64 {
    3.0
}

fn default_limit() -> Option<usize> {
    Some(3)
}

fn default_distance() -> Option<f64> {
    Some(10.0)
}

fn default_show_closed() -> bool {
    true
}

impl QueryConfig {
    /// Query around a centre point with default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use fuel_server::query::{QueryConfig, SortBy};
    ///
    /// let config = QueryConfig::centered("E10", -33.8688, 151.2093)
    ///     .with_radius(5.0)
    ///     .with_sort_by(SortBy::Distance);
    ///
    /// assert!(config.location_mode().is_ok());
    /// assert_eq!(config.limit, Some(3));
    /// ```
    pub fn centered(fuel_type: impl Into<FuelTypeSelection>, lat: f64, long: f64) -> Self {
        Self {
            lat: Some(lat),
            long: Some(long),
            ..Self::unlocated(fuel_type.into())
        }
    }

    /// Query inside an explicit rectangle with default settings.
    pub fn within(fuel_type: impl Into<FuelTypeSelection>, bbox: BoundingBox) -> Self {
        Self {
            bottom_left_latitude: Some(bbox.south),
            bottom_left_longitude: Some(bbox.west),
            top_right_latitude: Some(bbox.north),
            top_right_longitude: Some(bbox.east),
            ..Self::unlocated(fuel_type.into())
        }
    }

    fn unlocated(fuel_type: FuelTypeSelection) -> Self {
        Self {
            fuel_type,
            brands: Vec::new(),
            radius: default_radius(),
            sort_by: SortBy::default(),
            limit: default_limit(),
            distance: default_distance(),
            lat: None,
            long: None,
            bottom_left_latitude: None,
            bottom_left_longitude: None,
            top_right_latitude: None,
            top_right_longitude: None,
            show_closed_stations: default_show_closed(),
            show_tank_price: None,
            price_unit: PriceUnit::default(),
        }
    }

    pub fn with_brands<I, S>(mut self, brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.brands = brands.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_radius(mut self, radius_km: f64) -> Self {
        self.radius = radius_km;
        self
    }

    pub fn with_sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_distance(mut self, max_km: Option<f64>) -> Self {
        self.distance = max_km;
        self
    }

    pub fn with_closed_stations(mut self, show: bool) -> Self {
        self.show_closed_stations = show;
        self
    }

    pub fn with_tank_price(mut self, litres: Option<f64>) -> Self {
        self.show_tank_price = litres;
        self
    }

    pub fn with_price_unit(mut self, unit: PriceUnit) -> Self {
        self.price_unit = unit;
        self
    }

    /// Resolve where the query searches.
    ///
    /// A centre point needs both `lat` and `long`; a rectangle needs all four
    /// corners. Partially specified modes count as absent.
    pub fn location_mode(&self) -> Result<LocationMode, LocationModeError> {
        let center = match (self.lat, self.long) {
            (Some(lat), Some(long)) => Some(LocationMode::Center {
                lat,
                long,
                radius_km: self.radius,
            }),
            _ => None,
        };

        let rectangle = match (
            self.bottom_left_latitude,
            self.bottom_left_longitude,
            self.top_right_latitude,
            self.top_right_longitude,
        ) {
            (Some(south), Some(west), Some(north), Some(east)) => Some(LocationMode::Rectangle(
                BoundingBox::new(south, west, north, east),
            )),
            _ => None,
        };

        match (center, rectangle) {
            (Some(mode), None) | (None, Some(mode)) => Ok(mode),
            (Some(_), Some(_)) => Err(LocationModeError::Conflicting),
            (None, None) => Err(LocationModeError::Missing),
        }
    }

    /// The rectangle sent upstream.
    pub fn bounding_box(&self) -> Result<BoundingBox, LocationModeError> {
        Ok(self.location_mode()?.bounding_box())
    }

    /// Whether results are restricted to the listed brands.
    pub fn filters_brands(&self) -> bool {
        !self.brands.is_empty() && !self.brands.iter().any(|b| b == SELECT_ALL)
    }

    /// Brands forwarded upstream: the configured list, or `SelectAll`
    /// when none are configured.
    pub fn upstream_brands(&self) -> Vec<String> {
        if self.brands.is_empty() {
            vec![SELECT_ALL.to_string()]
        } else {
            self.brands.clone()
        }
    }
}
