//! Fluent builder for constructing a [`BatchRouter`].

use ns_core::{EdgeRecord, MatchConfig, NodeRecord};
use ns_spatial::{DijkstraRouter, NodeTable, Router};

use crate::{BatchError, BatchResult, BatchRouter};

/// Fluent builder for [`BatchRouter<R>`].
///
/// # Required inputs
///
/// - [`MatchConfig`] — edge filter
/// - `.nodes(v)` — the node set (non-empty, unique ids)
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                 |
/// |-----------------|-------------------------|
/// | `.edges(v)`     | No edges                |
/// | `.router(r)`    | [`DijkstraRouter`]      |
///
/// # Example
///
/// ```rust,ignore
/// let batch = BatchBuilder::new(MatchConfig::default())
///     .nodes(nodes)
///     .edges(edges)
///     .build()?;
/// let table = batch.run(&routes, &mut NoopObserver)?;
/// ```
pub struct BatchBuilder<R: Router = DijkstraRouter> {
    config: MatchConfig,
    nodes:  Option<Vec<NodeRecord>>,
    edges:  Vec<EdgeRecord>,
    router: R,
}

impl BatchBuilder<DijkstraRouter> {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            nodes:  None,
            edges:  Vec::new(),
            router: DijkstraRouter,
        }
    }
}

impl<R: Router> BatchBuilder<R> {
    pub fn nodes(mut self, nodes: Vec<NodeRecord>) -> Self {
        self.nodes = Some(nodes);
        self
    }

    pub fn edges(mut self, edges: Vec<EdgeRecord>) -> Self {
        self.edges = edges;
        self
    }

    /// Replace the shortest-path engine.
    pub fn router<R2: Router>(self, router: R2) -> BatchBuilder<R2> {
        BatchBuilder {
            config: self.config,
            nodes:  self.nodes,
            edges:  self.edges,
            router,
        }
    }

    /// Validate inputs, index the nodes and return a ready-to-run
    /// [`BatchRouter`].
    ///
    /// Edge references are not checked here; a dangling edge fails the first
    /// route that retains it.
    pub fn build(self) -> BatchResult<BatchRouter<R>> {
        let nodes = self
            .nodes
            .ok_or_else(|| BatchError::Config("no node set supplied".into()))?;
        let table = NodeTable::new(&nodes)?;

        if table.has_zero_id() {
            log::warn!("node id 0 is present and collides with the result padding value");
        }

        Ok(BatchRouter {
            config: self.config,
            nodes:  table,
            edges:  self.edges,
            router: self.router,
        })
    }
}
