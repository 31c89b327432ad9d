//! Directional endpoint resolution.
//!
//! A route's first and last vertices are put in travel order according to
//! the requested [`Direction`], then each is snapped to its nearest node.

use ns_core::geometry::first_last;
use ns_core::{Coord, CoreError, CoreResult, Direction, LineString, NodeIx};

use crate::{NodeTable, SpatialResult};

/// Resolved source and sink of one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub source: NodeIx,
    pub sink:   NodeIx,
}

/// Route start and end points in travel order.
///
/// The vertices are swapped when `direction` disagrees with the orientation
/// in which the line was drawn (see [`Direction::as_drawn`]).
pub fn directional_points(
    geometry:  &LineString<f64>,
    direction: Direction,
) -> CoreResult<(Coord<f64>, Coord<f64>)> {
    let (first, last) = first_last(geometry)?;
    if Direction::as_drawn(first, last) == direction {
        Ok((first, last))
    } else {
        Ok((last, first))
    }
}

/// Snap the directional start and end of `geometry` to their nearest nodes.
pub fn resolve_endpoints(
    geometry:  &LineString<f64>,
    direction: Direction,
    nodes:     &NodeTable,
) -> SpatialResult<Endpoints> {
    let (start, end) = directional_points(geometry, direction)?;
    let source = nodes.nearest(start).ok_or(CoreError::EmptyNodeSet)?;
    let sink = nodes.nearest(end).ok_or(CoreError::EmptyNodeSet)?;
    Ok(Endpoints { source, sink })
}
