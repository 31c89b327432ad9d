//! `ns-batch` — sequential batch matching of routes to node sequences.
//!
//! # Route loop
//!
//! ```text
//! for route in routes (input order):
//!   ① on_route_start
//!   ② annotate     — node deviations from the route's reference line
//!   ③ weigh        — filter edges, weight = mean endpoint deviation
//!   ④ assemble     — directed network (last write wins per arc)
//!   ⑤ resolve      — directional endpoints → nearest nodes
//!   ⑥ route        — Dijkstra; unreachable → empty sequence
//!   ⑦ on_progress(completed, total)
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ns_batch::{BatchBuilder, NoopObserver};
//! use ns_core::MatchConfig;
//!
//! let batch = BatchBuilder::new(MatchConfig::default())
//!     .nodes(nodes)
//!     .edges(edges)
//!     .build()?;
//! let table = batch.run(&routes, &mut NoopObserver)?;
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod observer;
pub mod table;

#[cfg(test)]
mod tests;

pub use batch::BatchRouter;
pub use builder::BatchBuilder;
pub use error::{BatchError, BatchResult};
pub use observer::{NoopObserver, ObserverError, ProgressFn, ProgressObserver};
pub use table::{ResultTable, PAD_SENTINEL};
