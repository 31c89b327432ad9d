//! Route-independent node table and spatial index.
//!
//! # Layout
//!
//! Nodes are stored in input order.  A node's [`NodeIx`] is its position in
//! the input slice, so "first in node-set order" and "smallest `NodeIx`" are
//! the same thing.  Every per-route vector (`Deviations`, the CSR arrays of
//! `Network`) is indexed by `NodeIx`.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(x, y)` to the nearest `NodeIx`.  Used to
//! snap route endpoints to network nodes.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use ns_core::{Coord, CoreError, CoreResult, NodeId, NodeIx, NodeRecord};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[x, y]` point with the
/// associated `NodeIx`.
#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2],
    ix:    NodeIx,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared planar Euclidean distance.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── NodeTable ─────────────────────────────────────────────────────────────────

/// Dense node storage plus id lookup and nearest-node queries.
///
/// Built once per batch; node coordinates never change between routes.
pub struct NodeTable {
    /// External id of each node.  Indexed by `NodeIx`.
    pub node_id:  Vec<NodeId>,

    /// Position of each node.  Indexed by `NodeIx`.
    pub node_pos: Vec<Coord<f64>>,

    by_id:       FxHashMap<NodeId, NodeIx>,
    spatial_idx: RTree<NodeEntry>,
}

impl NodeTable {
    /// Index `nodes` in input order.
    ///
    /// Fails with [`CoreError::EmptyNodeSet`] for an empty slice and with
    /// [`CoreError::DuplicateNode`] if an id repeats.
    pub fn new(nodes: &[NodeRecord]) -> CoreResult<Self> {
        if nodes.is_empty() {
            return Err(CoreError::EmptyNodeSet);
        }

        let mut by_id = FxHashMap::default();
        by_id.reserve(nodes.len());
        let mut entries = Vec::with_capacity(nodes.len());

        for (i, node) in nodes.iter().enumerate() {
            let ix = NodeIx(i as u32);
            if by_id.insert(node.id, ix).is_some() {
                return Err(CoreError::DuplicateNode(node.id));
            }
            entries.push(NodeEntry { point: [node.position.x, node.position.y], ix });
        }

        Ok(Self {
            node_id:     nodes.iter().map(|n| n.id).collect(),
            node_pos:    nodes.iter().map(|n| n.position).collect(),
            by_id,
            // Bulk-load for O(N log N) construction (faster than N inserts).
            spatial_idx: RTree::bulk_load(entries),
        })
    }

    pub fn len(&self) -> usize {
        self.node_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_id.is_empty()
    }

    /// Position of the node with external id `id`, if present.
    #[inline]
    pub fn ix_of(&self, id: NodeId) -> Option<NodeIx> {
        self.by_id.get(&id).copied()
    }

    #[inline]
    pub fn id_of(&self, ix: NodeIx) -> NodeId {
        self.node_id[ix.index()]
    }

    /// `true` if some node uses the raw id `0`, which collides with the
    /// default result padding value.
    pub fn has_zero_id(&self) -> bool {
        self.by_id.contains_key(&NodeId(0))
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Return the nearest node to `pos`.
    ///
    /// Equidistant candidates resolve to the smallest `NodeIx`, i.e. the node
    /// that came first in the input.  Returns `None` only for an empty table.
    pub fn nearest(&self, pos: Coord<f64>) -> Option<NodeIx> {
        let mut candidates = self
            .spatial_idx
            .nearest_neighbor_iter_with_distance_2(&[pos.x, pos.y]);
        let (first, best) = candidates.next()?;

        let mut chosen = first.ix;
        for (entry, d2) in candidates {
            if d2 > best {
                break;
            }
            chosen = chosen.min(entry.ix);
        }
        Some(chosen)
    }
}
