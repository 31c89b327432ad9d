//! `ns-io` — file input and output for the node-sequence matcher.
//!
//! | Table  | Required columns (defaults)      | Loader               |
//! |--------|----------------------------------|----------------------|
//! | nodes  | `ID`, `x`, `y`                   | [`load_nodes_csv`]   |
//! | edges  | `Nodo A`, `Nodo B` (+ optional availability) | [`load_edges_csv`] |
//! | routes | `Name`, `sentido`, `geometry`    | [`load_routes_csv`]  |
//!
//! Results are written back with [`write_table_csv`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use ns_io::{ColumnConfig, PadStyle};
//!
//! let cols = ColumnConfig::default();
//! let nodes = ns_io::load_nodes_csv(Path::new("nodes.csv"), &cols)?;
//! let edges = ns_io::load_edges_csv(Path::new("edges.csv"), &cols)?;
//! let routes = ns_io::load_routes_csv(Path::new("routes.csv"), &cols)?;
//! // ... run the batch ...
//! ns_io::write_table_csv(Path::new("sequences.csv"), &table, PadStyle::Zero)?;
//! ```

pub mod columns;
pub mod error;
pub mod export;
pub mod loader;

#[cfg(test)]
mod tests;

pub use columns::ColumnConfig;
pub use error::{IoError, IoResult};
pub use export::{write_table, write_table_csv, PadStyle};
pub use loader::{
    load_edges_csv, load_edges_reader, load_nodes_csv, load_nodes_reader, load_routes_csv,
    load_routes_reader,
};
