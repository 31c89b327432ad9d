//! `ns-spatial` — deviation weighting, network assembly, endpoint snapping
//! and shortest paths.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`index`]      | `NodeTable` (id lookup + R-tree)                         |
//! | [`annotate`]   | `annotate`, `Deviations`                                 |
//! | [`weights`]    | `weigh_edges`, `WeightedEdge`                            |
//! | [`network`]    | `Network` (CSR), `NetworkBuilder`                        |
//! | [`endpoints`]  | `resolve_endpoints`, `directional_points`, `Endpoints`   |
//! | [`router`]     | `Router` trait, `Path`, `DijkstraRouter`                 |
//! | [`pipeline`]   | `match_route`, `RouteMatch`                              |
//! | [`error`]      | `SpatialError`, `SpatialResult<T>`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `ns-core` types.        |

pub mod annotate;
pub mod endpoints;
pub mod error;
pub mod index;
pub mod network;
pub mod pipeline;
pub mod router;
pub mod weights;


pub use annotate::{annotate, Deviations};
pub use endpoints::{directional_points, resolve_endpoints, Endpoints};
pub use error::{SpatialError, SpatialResult};
pub use index::NodeTable;
pub use network::{Network, NetworkBuilder};
pub use pipeline::{build_route_network, match_route, RouteMatch};
pub use router::{DijkstraRouter, Path, Router};
pub use weights::{weigh_edges, WeightedEdge};
