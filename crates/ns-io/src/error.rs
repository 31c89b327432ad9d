//! Error types for ns-io.

use ns_core::CoreError;
use thiserror::Error;

/// Errors that can occur when reading input tables or writing results.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{table} table has no column {column:?}")]
    MissingColumn {
        table:  &'static str,
        column: String,
    },

    #[error("{table} table, line {line}: cannot parse {column:?} value {value:?}")]
    Parse {
        table:  &'static str,
        line:   u64,
        column: String,
        value:  String,
    },

    #[error("routes table, line {line}: invalid WKT linestring: {message}")]
    Geometry { line: u64, message: String },

    #[error("{table} table, line {line}: {source}")]
    Invalid {
        table:  &'static str,
        line:   u64,
        #[source]
        source: CoreError,
    },
}

/// Alias for `Result<T, IoError>`.
pub type IoResult<T> = Result<T, IoError>;
