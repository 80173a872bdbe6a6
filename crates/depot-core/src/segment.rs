//! Directed street segments and the angle helpers used for turn detection.
//!
//! Angles follow the mathematical convention: 0° points east and angles grow
//! counter-clockwise, so 90° is north and 270° is south.  A relative angle in
//! `(0°, 180°)` between two consecutive segments is therefore a left turn.

use std::fmt;

use crate::GeoCoord;

/// A directed edge of the street graph.
///
/// Every physical street block is stored twice, once per travel direction;
/// the two records share a name and have swapped endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreetSegment {
    pub start: GeoCoord,
    pub end:   GeoCoord,
    pub name:  String,
}

impl StreetSegment {
    pub fn new(start: GeoCoord, end: GeoCoord, name: impl Into<String>) -> Self {
        Self { start, end, name: name.into() }
    }

    /// The same block travelled in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self { start: self.end, end: self.start, name: self.name.clone() }
    }

    /// Great-circle length in miles.
    #[inline]
    pub fn length_miles(&self) -> f64 {
        self.start.distance_miles(self.end)
    }

    /// Direction of travel in degrees, in `[0, 360)`.
    pub fn bearing_deg(&self) -> f64 {
        let rad = (self.end.lat - self.start.lat).atan2(self.end.lon - self.start.lon);
        normalize_deg(rad.to_degrees())
    }
}

impl fmt::Display for StreetSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.name, self.start, self.end)
    }
}

/// Counter-clockwise angle from `first` to `second`, in `[0, 360)`.
///
/// `0` means `second` continues in the same direction as `first`.
pub fn angle_between(first: &StreetSegment, second: &StreetSegment) -> f64 {
    normalize_deg(second.bearing_deg() - first.bearing_deg())
}

#[inline]
fn normalize_deg(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if d >= 360.0 { 0.0 } else { d }
}
