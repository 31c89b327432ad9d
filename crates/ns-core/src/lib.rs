//! `ns-core` — foundational types for the `nodeseq` route matcher.
//!
//! This crate is a dependency of every other `ns-*` crate.  It has no `ns-*`
//! dependencies and only `geo` and `thiserror` externally (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `NodeIx`, `EdgeIx`, `RouteId`               |
//! | [`geometry`]    | Polyline checks, endpoint extraction, deviation       |
//! | [`direction`]   | `Direction` enum and label parsing                    |
//! | [`records`]     | `NodeRecord`, `EdgeRecord`, `RouteRecord`             |
//! | [`config`]      | `MatchConfig`, `EdgeFilter`                           |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to records and config.      |

pub mod config;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod records;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EdgeFilter, MatchConfig, AVAILABLE_FLAG};
pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use ids::{EdgeIx, NodeId, NodeIx, RouteId};
pub use records::{EdgeRecord, NodeRecord, RouteRecord};

/// Re-exported so downstream crates name one geometry vocabulary.
pub use geo::{Coord, LineString, coord};
