//! Per-node deviation from a reference polyline.

use ns_core::geometry::{deviation, ensure_polyline};
use ns_core::{CoreError, LineString, NodeIx};

use crate::{NodeTable, SpatialResult};

/// Distance from every node to one route's reference line.
///
/// Indexed by `NodeIx`.  Route-specific: build a fresh one per route.
#[derive(Debug, Clone, PartialEq)]
pub struct Deviations(Vec<f64>);

impl Deviations {
    #[inline]
    pub fn get(&self, ix: NodeIx) -> f64 {
        self.0[ix.index()]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Compute the deviation of every node in `nodes` from `reference`.
///
/// Pure: neither input is modified.
pub fn annotate(reference: &LineString<f64>, nodes: &NodeTable) -> SpatialResult<Deviations> {
    ensure_polyline(reference)?;
    if nodes.is_empty() {
        return Err(CoreError::EmptyNodeSet.into());
    }

    let distances = nodes
        .node_pos
        .iter()
        .map(|&pos| deviation(pos, reference))
        .collect();
    Ok(Deviations(distances))
}
