//! Core error type.
//!
//! Higher-level crates wrap `CoreError` as one variant of their own enum via
//! `#[from]`.

use thiserror::Error;

use crate::NodeId;

/// Errors raised while validating or deriving from the input records.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("polyline has {vertices} vertices; at least 2 are required")]
    DegenerateGeometry { vertices: usize },

    #[error("node set is empty")]
    EmptyNodeSet,

    #[error("edge {start} -> {end} references node {missing}, which is not in the node set")]
    DanglingEdgeReference {
        start:   NodeId,
        end:     NodeId,
        missing: NodeId,
    },

    #[error("invalid direction {0:?}: expected \"NS\" or \"SN\"")]
    InvalidDirection(String),

    #[error("node {0} appears more than once in the node set")]
    DuplicateNode(NodeId),
}

/// Shorthand result type for all `ns-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
