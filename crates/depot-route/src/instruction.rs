//! Turn-by-turn instruction types.

use std::fmt;

/// Eight-way compass direction of travel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Compass {
    East,
    Northeast,
    North,
    Northwest,
    West,
    Southwest,
    South,
    Southeast,
}

impl Compass {
    /// Bucket a bearing (degrees counter-clockwise from east) into 45° sectors
    /// centred on each direction.  Any finite input is accepted; 360° is east.
    pub fn from_bearing(deg: f64) -> Self {
        let deg = deg.rem_euclid(360.0);
        match deg {
            d if d < 22.5 => Compass::East,
            d if d < 67.5 => Compass::Northeast,
            d if d < 112.5 => Compass::North,
            d if d < 157.5 => Compass::Northwest,
            d if d < 202.5 => Compass::West,
            d if d < 247.5 => Compass::Southwest,
            d if d < 292.5 => Compass::South,
            d if d < 337.5 => Compass::Southeast,
            _ => Compass::East,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Compass::East => "east",
            Compass::Northeast => "northeast",
            Compass::North => "north",
            Compass::Northwest => "northwest",
            Compass::West => "west",
            Compass::Southwest => "southwest",
            Compass::South => "south",
            Compass::Southeast => "southeast",
        }
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TurnDirection {
    Left,
    Right,
}

impl TurnDirection {
    /// Classify the counter-clockwise angle between two consecutive segments.
    ///
    /// Angles within `tolerance_deg` of 0°/360° are straight (`None`); the
    /// rest of `[0, 180)` is left and `[180, 360)` is right.
    pub fn from_angle(angle_deg: f64, tolerance_deg: f64) -> Option<Self> {
        let a = angle_deg.rem_euclid(360.0);
        if a < tolerance_deg || a > 360.0 - tolerance_deg {
            None
        } else if a < 180.0 {
            Some(TurnDirection::Left)
        } else {
            Some(TurnDirection::Right)
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TurnDirection::Left => "left",
            TurnDirection::Right => "right",
        }
    }
}

impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of a delivery route, in execution order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Instruction {
    /// Travel `miles` along `street`, heading `direction`.
    Proceed { direction: Compass, street: String, miles: f64 },
    /// Turn onto `street`.
    Turn { direction: TurnDirection, street: String },
    /// Hand over `item` at the current location.
    Deliver { item: String },
}

impl Instruction {
    pub fn is_proceed(&self) -> bool {
        matches!(self, Instruction::Proceed { .. })
    }

    pub fn is_turn(&self) -> bool {
        matches!(self, Instruction::Turn { .. })
    }

    pub fn is_deliver(&self) -> bool {
        matches!(self, Instruction::Deliver { .. })
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Proceed { direction, street, miles } => {
                write!(f, "Proceed {miles:.2} miles {direction} on {street}")
            }
            Instruction::Turn { direction, street } => write!(f, "Turn {direction} on {street}"),
            Instruction::Deliver { item } => write!(f, "Deliver {item}"),
        }
    }
}
