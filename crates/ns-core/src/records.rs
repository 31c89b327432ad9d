//! Typed input records.
//!
//! Records are built once at the ingestion boundary and are read-only for the
//! rest of the pipeline.  They carry no column-name knowledge.

use geo::{Coord, LineString};

use crate::{Direction, NodeId, RouteId, AVAILABLE_FLAG};

/// A network node: external id plus projected position.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeRecord {
    pub id:       NodeId,
    pub position: Coord<f64>,
}

impl NodeRecord {
    #[inline]
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        Self { id: NodeId(id), position: Coord { x, y } }
    }
}

/// A directed network segment `start → end`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeRecord {
    pub start:     NodeId,
    pub end:       NodeId,
    /// Raw availability value; `None` when the source cell was missing.
    pub available: Option<i64>,
}

impl EdgeRecord {
    /// An edge with no availability information.
    #[inline]
    pub fn new(start: u64, end: u64) -> Self {
        Self { start: NodeId(start), end: NodeId(end), available: None }
    }

    pub fn with_availability(mut self, flag: Option<i64>) -> Self {
        self.available = flag;
        self
    }

    /// `true` only when the flag is present and equal to [`AVAILABLE_FLAG`].
    #[inline]
    pub fn is_available(&self) -> bool {
        self.available == Some(AVAILABLE_FLAG)
    }
}

/// A route to be matched: id, reference polyline, and travel direction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRecord {
    pub id:        RouteId,
    pub geometry:  LineString<f64>,
    pub direction: Direction,
}

impl RouteRecord {
    pub fn new(id: impl Into<RouteId>, geometry: LineString<f64>, direction: Direction) -> Self {
        Self { id: id.into(), geometry, direction }
    }
}
