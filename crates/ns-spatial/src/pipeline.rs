//! Single-route matching pipeline.
//!
//! ```text
//! reference line ─► annotate ─► weigh_edges ─► Network ─┐
//!                                                       ├─► Router ─► node ids
//! reference line + direction ─► resolve_endpoints ──────┘
//! ```

use ns_core::{EdgeFilter, EdgeRecord, LineString, NodeId, RouteRecord};

use crate::{annotate, resolve_endpoints, weigh_edges, Network, NodeTable, Router, SpatialResult};

/// Outcome of matching one route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch {
    /// External ids from source to sink; empty when the sink is unreachable.
    pub sequence:     Vec<NodeId>,
    /// Summed arc weight of the path; `INFINITY` when unreachable.
    pub total_weight: f64,
}

/// Run annotate → weigh → assemble → resolve → route for one route.
///
/// Everything route-dependent is rebuilt from scratch, so no state leaks
/// from one call to the next.
pub fn match_route<R: Router + ?Sized>(
    route:  &RouteRecord,
    nodes:  &NodeTable,
    edges:  &[EdgeRecord],
    filter: EdgeFilter,
    router: &R,
) -> SpatialResult<RouteMatch> {
    let network = build_route_network(&route.geometry, nodes, edges, filter)?;
    let ends = resolve_endpoints(&route.geometry, route.direction, nodes)?;
    log::debug!(
        "route {}: {} arcs, source {} sink {}",
        route.id,
        network.edge_count(),
        nodes.id_of(ends.source),
        nodes.id_of(ends.sink)
    );

    let path = router.route(&network, ends.source, ends.sink)?;
    if path.is_empty() {
        log::debug!("route {}: sink unreachable from source", route.id);
    }

    Ok(RouteMatch {
        sequence:     path.nodes.iter().map(|&ix| nodes.id_of(ix)).collect(),
        total_weight: path.total_weight,
    })
}

/// Weighted network for one reference line.
pub fn build_route_network(
    reference: &LineString<f64>,
    nodes:     &NodeTable,
    edges:     &[EdgeRecord],
    filter:    EdgeFilter,
) -> SpatialResult<Network> {
    let deviations = annotate(reference, nodes)?;
    let weighted = weigh_edges(edges, filter, nodes, &deviations)?;
    Ok(Network::from_weighted(nodes.len(), &weighted))
}
