//! Directed weighted network and its builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing arcs.
//! Given a `NodeIx n`, its outgoing arcs occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All arc arrays (`edge_from`, `edge_to`, `edge_weight`) are sorted by
//! `(source, target)` and indexed by `EdgeIx`.
//!
//! # Duplicate arcs
//!
//! At most one arc exists per ordered `(from, to)` pair.  Inserting the same
//! pair again overwrites the stored weight (**last write wins**); weights are
//! neither summed nor kept as parallel arcs.

use rustc_hash::FxHashMap;

use ns_core::{EdgeIx, NodeIx};

use crate::WeightedEdge;

// ── Network ───────────────────────────────────────────────────────────────────

/// Directed graph in CSR format over the positions of a `NodeTable`.
///
/// All fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`NetworkBuilder`].
pub struct Network {
    /// CSR row pointer.  Outgoing arcs of node `n` are at EdgeIxs
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    /// Source node of each arc.  Redundant with CSR but required for path
    /// reconstruction.
    pub edge_from: Vec<NodeIx>,

    /// Destination node of each arc.
    pub edge_to: Vec<NodeIx>,

    /// Traversal cost of each arc.  Always ≥ 0.
    pub edge_weight: Vec<f64>,
}

impl Network {
    /// Assemble a network over `node_count` nodes from weighted edges, in
    /// order.  Later duplicates of a `(start, end)` pair replace earlier ones.
    pub fn from_weighted(node_count: usize, edges: &[WeightedEdge]) -> Self {
        let mut b = NetworkBuilder::with_capacity(node_count, edges.len());
        for e in edges {
            b.add_arc(e.start, e.end, e.weight);
        }
        b.build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_out_start.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeIx`s of all outgoing arcs from `node`.
    #[inline]
    pub fn out_edges(&self, node: NodeIx) -> impl Iterator<Item = EdgeIx> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeIx(i as u32))
    }

    #[inline]
    pub fn out_degree(&self, node: NodeIx) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// Weight of the arc `from → to`, if it exists.
    pub fn arc_weight(&self, from: NodeIx, to: NodeIx) -> Option<f64> {
        self.out_edges(from)
            .find(|e| self.edge_to[e.index()] == to)
            .map(|e| self.edge_weight[e.index()])
    }
}

// ── NetworkBuilder ────────────────────────────────────────────────────────────

/// Construct a [`Network`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use ns_core::NodeIx;
/// use ns_spatial::NetworkBuilder;
///
/// let mut b = NetworkBuilder::new(2);
/// b.add_arc(NodeIx(0), NodeIx(1), 4.0);
/// b.add_arc(NodeIx(0), NodeIx(1), 1.5); // replaces 4.0
/// let net = b.build();
/// assert_eq!(net.edge_count(), 1);
/// assert_eq!(net.arc_weight(NodeIx(0), NodeIx(1)), Some(1.5));
/// assert_eq!(net.arc_weight(NodeIx(1), NodeIx(0)), None); // directed
/// ```
pub struct NetworkBuilder {
    node_count: usize,
    raw_edges:  Vec<RawArc>,
    /// `(from, to)` → position in `raw_edges`.
    slots:      FxHashMap<(NodeIx, NodeIx), usize>,
}

struct RawArc {
    from:   NodeIx,
    to:     NodeIx,
    weight: f64,
}

impl NetworkBuilder {
    pub fn new(node_count: usize) -> Self {
        Self::with_capacity(node_count, 0)
    }

    pub fn with_capacity(node_count: usize, edges: usize) -> Self {
        let mut slots = FxHashMap::default();
        slots.reserve(edges);
        Self {
            node_count,
            raw_edges: Vec::with_capacity(edges),
            slots,
        }
    }

    /// Add (or overwrite) the **directed** arc `from → to`.
    ///
    /// # Panics
    /// Panics if either endpoint is `>= node_count`.
    pub fn add_arc(&mut self, from: NodeIx, to: NodeIx, weight: f64) {
        assert!(
            from.index() < self.node_count && to.index() < self.node_count,
            "arc {from} -> {to} outside network of {} nodes",
            self.node_count
        );
        match self.slots.get(&(from, to)) {
            Some(&slot) => self.raw_edges[slot].weight = weight,
            None => {
                self.slots.insert((from, to), self.raw_edges.len());
                self.raw_edges.push(RawArc { from, to, weight });
            }
        }
    }

    pub fn node_count(&self) -> usize { self.node_count }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`Network`].
    ///
    /// Time complexity: O(E log E) for the arc sort.
    pub fn build(self) -> Network {
        let node_count = self.node_count;
        let edge_count = self.raw_edges.len();

        // Sort by (source, target) so adjacency order is independent of
        // insertion order.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| (e.from, e.to));

        let edge_from:   Vec<NodeIx> = raw.iter().map(|e| e.from).collect();
        let edge_to:     Vec<NodeIx> = raw.iter().map(|e| e.to).collect();
        let edge_weight: Vec<f64>    = raw.iter().map(|e| e.weight).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        Network {
            node_out_start,
            edge_from,
            edge_to,
            edge_weight,
        }
    }
}
