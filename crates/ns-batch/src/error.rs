use ns_core::{CoreError, RouteId};
use ns_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BatchError {
    #[error("batch configuration error: {0}")]
    Config(String),

    #[error("invalid node set: {0}")]
    Nodes(#[from] CoreError),

    #[error("route {route}: {source}")]
    Route {
        route:  RouteId,
        #[source]
        source: SpatialError,
    },
}

pub type BatchResult<T> = Result<T, BatchError>;
