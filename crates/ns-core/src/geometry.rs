//! Planar geometry helpers over `geo` types.
//!
//! All coordinates are treated as projected, planar `(x, y)` pairs: `x` is
//! easting, `y` is northing.  Distances are plain Euclidean distances in the
//! units of the input data (metres for a UTM projection).  No geodesic
//! correction is applied; input should already be projected.

use geo::{Coord, Distance, Euclidean, LineString, Point};

use crate::{CoreError, CoreResult};

/// Minimum vertex count of a usable polyline.
pub const MIN_VERTICES: usize = 2;

/// Fail with [`CoreError::DegenerateGeometry`] unless `line` has at least
/// [`MIN_VERTICES`] vertices.
pub fn ensure_polyline(line: &LineString<f64>) -> CoreResult<()> {
    let vertices = line.0.len();
    if vertices < MIN_VERTICES {
        return Err(CoreError::DegenerateGeometry { vertices });
    }
    Ok(())
}

/// First and last vertex of `line`, in drawing order.
pub fn first_last(line: &LineString<f64>) -> CoreResult<(Coord<f64>, Coord<f64>)> {
    ensure_polyline(line)?;
    match (line.0.first(), line.0.last()) {
        (Some(&first), Some(&last)) => Ok((first, last)),
        _ => Err(CoreError::DegenerateGeometry { vertices: line.0.len() }),
    }
}

/// Shortest Euclidean distance from `point` to any segment of `line`.
///
/// Zero exactly when the point lies on the polyline.  The caller is
/// responsible for validating `line` with [`ensure_polyline`].
#[inline]
pub fn deviation(point: Coord<f64>, line: &LineString<f64>) -> f64 {
    Euclidean.distance(&Point::from(point), line)
}

/// Squared Euclidean distance between two coordinates.
#[inline]
pub fn distance_2(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}
