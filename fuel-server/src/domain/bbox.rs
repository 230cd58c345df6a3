//! Search area for the station query.
//!
//! A query is scoped either by a centre point plus radius or by an explicit
//! rectangle. Both resolve to a [`BoundingBox`].

use std::f64::consts::PI;

/// Kilometres per degree of latitude on a spherical earth.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Axis-aligned latitude/longitude rectangle.
///
/// No clamping to valid coordinate ranges is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// Rectangle reaching `radius_km` from a centre point in each
    /// cardinal direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use fuel_server::domain::BoundingBox;
    ///
    /// let bbox = BoundingBox::around(-33.8688, 151.2093, 3.0);
    /// assert!(bbox.south < -33.8688 && bbox.north > -33.8688);
    /// assert!(bbox.west < 151.2093 && bbox.east > 151.2093);
    /// ```
    pub fn around(lat: f64, long: f64, radius_km: f64) -> Self {
        let d_lat = radius_km / KM_PER_DEGREE;
        let d_lon = radius_km / (KM_PER_DEGREE * (lat * PI / 180.0).cos());

        Self {
            south: lat - d_lat,
            west: long - d_lon,
            north: lat + d_lat,
            east: long + d_lon,
        }
    }
}

/// How a query locates its search area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationMode {
    Center { lat: f64, long: f64, radius_km: f64 },
    Rectangle(BoundingBox),
}

impl LocationMode {
    pub fn bounding_box(&self) -> BoundingBox {
        match *self {
            LocationMode::Center {
                lat,
                long,
                radius_km,
            } => BoundingBox::around(lat, long, radius_km),
            LocationMode::Rectangle(bbox) => bbox,
        }
    }
}

/// Error when a query does not resolve to exactly one location mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LocationModeError {
    #[error("Must provide either lat/long or complete bounding box coordinates")]
    Missing,

    #[error("Cannot provide both lat/long and bounding box coordinates")]
    Conflicting,
}
