//! Geographic coordinate type and distance functions.
//!
//! `GeoCoord` uses `f64` latitude/longitude in decimal degrees.  It is the
//! vertex identity of the street graph, so it implements `Eq` and `Hash` on
//! the bit patterns of its components (with `-0.0` folded into `0.0`).
//!
//! Two distance functions live here:
//!
//! - [`GeoCoord::distance_miles`]: haversine great-circle distance, the unit
//!   for every edge cost and every reported total.
//! - [`GeoCoord::euclidean_deg`]: straight-line distance on raw degrees.  One
//!   degree is tens of miles on the ground, so this never exceeds the
//!   great-circle distance in miles for map-scale inputs and serves as the A*
//!   lower bound.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{CoreError, CoreResult};

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Kilometres per statute mile.
const KM_PER_MILE: f64 = 1.609_344;

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoCoord {
    pub lat: f64,
    pub lon: f64,
}

impl GeoCoord {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Parse a coordinate from its textual latitude and longitude, as they
    /// appear in map and delivery files.
    pub fn parse(lat: &str, lon: &str) -> CoreResult<Self> {
        let parse_one = |s: &str| {
            s.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| CoreError::InvalidCoordinate(format!("{s:?} is not a number")))
        };
        let lat = parse_one(lat)?;
        let lon = parse_one(lon)?;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoreError::InvalidCoordinate(format!("latitude {lat} out of range")));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoreError::InvalidCoordinate(format!("longitude {lon} out of range")));
        }
        Ok(Self { lat, lon })
    }

    /// Haversine great-circle distance in kilometres.
    pub fn distance_km(self, other: GeoCoord) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let u = ((other.lat - self.lat).to_radians() * 0.5).sin();
        let v = ((other.lon - self.lon).to_radians() * 0.5).sin();

        2.0 * EARTH_RADIUS_KM * (u * u + lat1.cos() * lat2.cos() * v * v).sqrt().asin()
    }

    /// Haversine great-circle distance in statute miles.
    #[inline]
    pub fn distance_miles(self, other: GeoCoord) -> f64 {
        self.distance_km(other) / KM_PER_MILE
    }

    /// Straight-line distance on raw latitude/longitude degrees.
    #[inline]
    pub fn euclidean_deg(self, other: GeoCoord) -> f64 {
        (other.lat - self.lat).hypot(other.lon - self.lon)
    }

    /// Bit pattern used for equality and hashing.  `-0.0` and `0.0` map to the
    /// same key.
    #[inline]
    fn key_bits(self) -> (u64, u64) {
        ((self.lat + 0.0).to_bits(), (self.lon + 0.0).to_bits())
    }
}

impl PartialEq for GeoCoord {
    fn eq(&self, other: &Self) -> bool {
        self.key_bits() == other.key_bits()
    }
}

impl Eq for GeoCoord {}

impl Hash for GeoCoord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key_bits().hash(state);
    }
}

impl fmt::Display for GeoCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.7}, {:.7})", self.lat, self.lon)
    }
}
