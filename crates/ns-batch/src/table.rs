//! Route → node sequence result table.
//!
//! Sequences are stored unpadded.  The rectangular view pads every row to the
//! longest sequence with [`PAD_SENTINEL`]; consumers that must tell padding
//! from a real node id `0` use [`ResultTable::cells`] instead.

use rustc_hash::FxHashMap;

use ns_core::{NodeId, RouteId};

/// Value used for trailing padding in [`ResultTable::padded_rows`].
pub const PAD_SENTINEL: u64 = 0;

/// Ordered mapping from route id to its node sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    rows:  Vec<(RouteId, Vec<NodeId>)>,
    index: FxHashMap<RouteId, usize>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `sequence` for `route`.
    ///
    /// A repeated route id replaces the earlier sequence but keeps the row at
    /// its first position.  Returns `true` if a row was replaced.
    pub fn insert(&mut self, route: RouteId, sequence: Vec<NodeId>) -> bool {
        match self.index.get(&route) {
            Some(&row) => {
                self.rows[row].1 = sequence;
                true
            }
            None => {
                self.index.insert(route.clone(), self.rows.len());
                self.rows.push((route, sequence));
                false
            }
        }
    }

    /// Number of rows (distinct routes).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column count: the length of the longest sequence.
    pub fn width(&self) -> usize {
        self.rows.iter().map(|(_, seq)| seq.len()).max().unwrap_or(0)
    }

    pub fn get(&self, route: &RouteId) -> Option<&[NodeId]> {
        self.index.get(route).map(|&row| self.rows[row].1.as_slice())
    }

    /// Unpadded rows in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = (&RouteId, &[NodeId])> + '_ {
        self.rows.iter().map(|(id, seq)| (id, seq.as_slice()))
    }

    /// Header labels for the node columns: `node_1 .. node_{width}`.
    pub fn column_names(&self) -> Vec<String> {
        (1..=self.width()).map(|i| format!("node_{i}")).collect()
    }

    /// Rows padded to [`width`](Self::width) with `None`.
    pub fn cells(&self) -> impl Iterator<Item = (&RouteId, Vec<Option<NodeId>>)> + '_ {
        let width = self.width();
        self.rows.iter().map(move |(id, seq)| {
            let mut cells: Vec<Option<NodeId>> = seq.iter().copied().map(Some).collect();
            cells.resize(width, None);
            (id, cells)
        })
    }

    /// Rows padded to [`width`](Self::width) with [`PAD_SENTINEL`].
    pub fn padded_rows(&self) -> impl Iterator<Item = (&RouteId, Vec<u64>)> + '_ {
        self.cells().map(|(id, cells)| {
            let raw = cells
                .into_iter()
                .map(|c| c.map_or(PAD_SENTINEL, |n| n.0))
                .collect();
            (id, raw)
        })
    }
}
