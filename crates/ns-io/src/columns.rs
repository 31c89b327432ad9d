//! Column-name configuration for the three input tables.
//!
//! The matching crates never see column names; this is the only place that
//! knows how the producer labelled its data.

use ns_core::EdgeFilter;

/// Header names to look up in the node, edge and route CSV files.
///
/// Defaults match the layout of the transit survey exports this tool was
/// first used with (`ID`, `Nodo A`, `Nodo B`, `Name`, `sentido`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnConfig {
    /// Node id column (unsigned integer).
    pub node_id: String,
    /// Node easting column.
    pub x: String,
    /// Node northing column.
    pub y: String,

    /// Edge start-node column.
    pub edge_start: String,
    /// Edge end-node column.
    pub edge_end: String,
    /// Edge availability column.  `None` keeps every edge.
    pub availability: Option<String>,

    /// Route id column.
    pub route_id: String,
    /// Route direction column (`NS` / `SN`).
    pub direction: String,
    /// Route geometry column (WKT `LINESTRING`).
    pub geometry: String,
}

impl ColumnConfig {
    /// Edge filter implied by the availability column setting.
    pub fn edge_filter(&self) -> EdgeFilter {
        if self.availability.is_some() {
            EdgeFilter::AvailableOnly
        } else {
            EdgeFilter::All
        }
    }
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            node_id:      "ID".into(),
            x:            "x".into(),
            y:            "y".into(),
            edge_start:   "Nodo A".into(),
            edge_end:     "Nodo B".into(),
            availability: None,
            route_id:     "Name".into(),
            direction:    "sentido".into(),
            geometry:     "geometry".into(),
        }
    }
}
