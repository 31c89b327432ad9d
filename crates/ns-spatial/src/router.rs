//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The batch router calls routing via the [`Router`] trait, so applications
//! can swap in other algorithms without touching the pipeline.
//!
//! # Unreachable sinks
//!
//! A sink that cannot be reached is a normal outcome: the router returns an
//! empty [`Path`], never an error.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use ns_core::{EdgeIx, NodeIx};

use crate::network::Network;
use crate::{SpatialError, SpatialResult};

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a routing query: the visited nodes and the summed weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Nodes from source to sink inclusive.  Empty when unreachable.
    pub nodes: Vec<NodeIx>,
    pub total_weight: f64,
}

impl Path {
    pub fn unreachable() -> Self {
        Self { nodes: Vec::new(), total_weight: f64::INFINITY }
    }

    /// `true` if no path was found.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable minimum-weight path engine.
///
/// Implementations must be deterministic: the same network, source and sink
/// always produce the same path.
pub trait Router {
    /// Compute the minimum-weight path from `from` to `to`.
    ///
    /// `from == to` yields the single-node path `[from]`.  Fails only if an
    /// endpoint is outside the network.
    fn route(&self, network: &Network, from: NodeIx, to: NodeIx) -> SpatialResult<Path>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the CSR network, using `edge_weight`
/// as cost.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(&self, network: &Network, from: NodeIx, to: NodeIx) -> SpatialResult<Path> {
        let n = network.node_count();
        for ix in [from, to] {
            if ix.index() >= n {
                return Err(SpatialError::NodeOutOfRange(ix));
            }
        }
        Ok(dijkstra(network, from, to))
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

fn dijkstra(network: &Network, from: NodeIx, to: NodeIx) -> Path {
    if from == to {
        return Path { nodes: vec![from], total_weight: 0.0 };
    }

    let n = network.node_count();
    // dist[v] = best known cost to reach v.
    let mut dist      = vec![f64::INFINITY; n];
    // prev_edge[v] = EdgeIx that reached v; EdgeIx::INVALID for unreached nodes.
    let mut prev_edge = vec![EdgeIx::INVALID; n];

    dist[from.index()] = 0.0;

    // Min-heap: (cost, node).  Secondary key NodeIx ensures deterministic
    // tie-breaking.
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, NodeIx)>> = BinaryHeap::new();
    heap.push(Reverse((OrderedFloat(0.0), from)));

    while let Some(Reverse((OrderedFloat(cost), node))) = heap.pop() {
        if node == to {
            return reconstruct(network, &prev_edge, from, to, cost);
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for edge in network.out_edges(node) {
            let neighbor = network.edge_to[edge.index()];
            let new_cost = cost + network.edge_weight[edge.index()];

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(Reverse((OrderedFloat(new_cost), neighbor)));
            }
        }
    }

    Path::unreachable()
}

fn reconstruct(
    network:   &Network,
    prev_edge: &[EdgeIx],
    from:      NodeIx,
    to:        NodeIx,
    total:     f64,
) -> Path {
    let mut nodes = vec![to];
    let mut cur = to;
    while cur != from {
        let e = prev_edge[cur.index()];
        debug_assert_ne!(e, EdgeIx::INVALID, "settled node without predecessor");
        cur = network.edge_from[e.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    Path { nodes, total_weight: total }
}
