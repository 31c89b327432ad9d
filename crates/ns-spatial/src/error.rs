//! Spatial-subsystem error type.

use thiserror::Error;

use ns_core::{CoreError, NodeIx};

/// Errors produced by `ns-spatial`.
#[derive(Debug, Error, PartialEq)]
pub enum SpatialError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("node position {0} is outside the network")]
    NodeOutOfRange(NodeIx),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
