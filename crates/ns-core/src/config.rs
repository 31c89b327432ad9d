//! Run configuration.
//!
//! Typically assembled by the application crate (CLI flags) and passed to
//! the batch router.

use crate::EdgeRecord;

/// Availability value that marks an edge as usable.
pub const AVAILABLE_FLAG: i64 = 1;

/// Which edges take part in graph construction.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeFilter {
    /// Every edge is retained, whatever its availability flag.
    #[default]
    All,
    /// Only edges whose flag equals [`AVAILABLE_FLAG`]; `0`, other values and
    /// missing flags are dropped.
    AvailableOnly,
}

impl EdgeFilter {
    #[inline]
    pub fn retains(self, edge: &EdgeRecord) -> bool {
        match self {
            EdgeFilter::All => true,
            EdgeFilter::AvailableOnly => edge.is_available(),
        }
    }
}

/// Top-level matching configuration.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchConfig {
    /// Availability predicate applied before weighting.  Default: all edges.
    pub edge_filter: EdgeFilter,
}

impl MatchConfig {
    pub fn with_edge_filter(mut self, edge_filter: EdgeFilter) -> Self {
        self.edge_filter = edge_filter;
        self
    }
}
