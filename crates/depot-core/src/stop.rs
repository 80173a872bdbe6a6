//! Delivery stop value type.

use std::fmt;

use crate::GeoCoord;

/// One item to drop off at one coordinate.  Several stops may share a
/// location; each produces its own delivery instruction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryStop {
    pub location: GeoCoord,
    pub item:     String,
}

impl DeliveryStop {
    pub fn new(location: GeoCoord, item: impl Into<String>) -> Self {
        Self { location, item: item.into() }
    }
}

impl fmt::Display for DeliveryStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.item, self.location)
    }
}
