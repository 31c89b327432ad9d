//! Route travel direction.
//!
//! A route is tagged with one of two opposing cardinal directions.  The
//! polyline itself may be drawn in either order; the direction decides which
//! end is the route start.

use std::fmt;
use std::str::FromStr;

use geo::Coord;

use crate::CoreError;

/// Requested direction of travel along a route.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Travel from the northern end to the southern end (`"NS"`).
    NorthToSouth,
    /// Travel from the southern end to the northern end (`"SN"`).
    SouthToNorth,
}

impl Direction {
    /// Orientation implied by the drawing order of a polyline.
    ///
    /// North-to-south when `first` lies strictly north of `last`; every other
    /// case, including equal northings, counts as south-to-north.
    #[inline]
    pub fn as_drawn(first: Coord<f64>, last: Coord<f64>) -> Direction {
        if first.y > last.y {
            Direction::NorthToSouth
        } else {
            Direction::SouthToNorth
        }
    }

    pub fn reversed(self) -> Direction {
        match self {
            Direction::NorthToSouth => Direction::SouthToNorth,
            Direction::SouthToNorth => Direction::NorthToSouth,
        }
    }

    /// Short label used in input files.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::NorthToSouth => "NS",
            Direction::SouthToNorth => "SN",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    /// Accepts `NS`/`SN` and `north-to-south`/`south-to-north`, ignoring case
    /// and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ns" | "north-to-south" => Ok(Direction::NorthToSouth),
            "sn" | "south-to-north" => Ok(Direction::SouthToNorth),
            _ => Err(CoreError::InvalidDirection(s.to_owned())),
        }
    }
}
