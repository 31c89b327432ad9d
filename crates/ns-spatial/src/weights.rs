//! Edge filtering and deviation-based edge weights.
//!
//! `weight = (deviation(start) + deviation(end)) / 2`

use ns_core::{CoreError, EdgeFilter, EdgeRecord, NodeIx};

use crate::{Deviations, NodeTable, SpatialResult};

/// A retained edge resolved to node positions, with its traversal cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedEdge {
    pub start:  NodeIx,
    pub end:    NodeIx,
    pub weight: f64,
}

/// Filter `edges` with `filter`, then weight every survivor.
///
/// Output order follows input order.  A retained edge whose start or end id
/// is not in `nodes` fails with [`CoreError::DanglingEdgeReference`]; edges
/// dropped by the filter are never looked up.
pub fn weigh_edges(
    edges:      &[EdgeRecord],
    filter:     EdgeFilter,
    nodes:      &NodeTable,
    deviations: &Deviations,
) -> SpatialResult<Vec<WeightedEdge>> {
    let mut weighted = Vec::with_capacity(edges.len());

    for edge in edges.iter().filter(|e| filter.retains(e)) {
        let start = resolve(nodes, edge, edge.start)?;
        let end = resolve(nodes, edge, edge.end)?;
        let weight = (deviations.get(start) + deviations.get(end)) / 2.0;
        weighted.push(WeightedEdge { start, end, weight });
    }

    log::trace!(
        "weighted {} of {} edges ({:?})",
        weighted.len(),
        edges.len(),
        filter
    );
    Ok(weighted)
}

fn resolve(nodes: &NodeTable, edge: &EdgeRecord, id: ns_core::NodeId) -> SpatialResult<NodeIx> {
    nodes.ix_of(id).ok_or_else(|| {
        CoreError::DanglingEdgeReference { start: edge.start, end: edge.end, missing: id }.into()
    })
}
