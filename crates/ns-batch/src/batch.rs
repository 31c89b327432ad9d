//! The `BatchRouter` and its route loop.

use ns_core::{EdgeRecord, MatchConfig, RouteRecord};
use ns_spatial::{match_route, NodeTable, Router};

use crate::{BatchError, BatchResult, ProgressObserver, ResultTable};

/// Matches a collection of routes against one node/edge network.
///
/// Routes are processed strictly one at a time, in input order.  For every
/// route the deviation weights, the directed network and the endpoints are
/// rebuilt from that route's own geometry; only the node table (id lookup and
/// spatial index) is shared across routes.
///
/// Create via [`BatchBuilder`][crate::BatchBuilder].
pub struct BatchRouter<R: Router> {
    /// Filtering and matching options.
    pub config: MatchConfig,

    /// Route-independent node storage and spatial index.
    pub nodes: NodeTable,

    /// Raw edge records; filtered and weighted per route.
    pub edges: Vec<EdgeRecord>,

    /// Shortest-path engine.
    pub router: R,
}

impl<R: Router> BatchRouter<R> {
    /// Match every route and collect the results.
    ///
    /// The first failing route aborts the whole batch and its error is
    /// returned with the route id; no partial table is produced.  An
    /// unreachable sink is not a failure: that route gets an empty sequence.
    pub fn run<O: ProgressObserver + ?Sized>(
        &self,
        routes:   &[RouteRecord],
        observer: &mut O,
    ) -> BatchResult<ResultTable> {
        let total = routes.len();
        log::info!(
            "matching {total} routes against {} nodes / {} edges ({:?})",
            self.nodes.len(),
            self.edges.len(),
            self.config.edge_filter
        );

        let mut table = ResultTable::new();
        let mut unmatched = 0usize;

        for (i, route) in routes.iter().enumerate() {
            observer.on_route_start(i, &route.id);

            let found = match_route(route, &self.nodes, &self.edges, self.config.edge_filter, &self.router)
                .map_err(|source| BatchError::Route { route: route.id.clone(), source })?;

            if found.sequence.is_empty() {
                unmatched += 1;
            }
            if table.insert(route.id.clone(), found.sequence) {
                log::warn!("route {} appears more than once; keeping the last result", route.id);
            }

            if let Err(e) = observer.on_progress(i + 1, total) {
                log::warn!("progress observer failed after route {}: {e}", route.id);
            }
        }

        log::info!(
            "matched {} routes ({unmatched} without a path), {} node columns",
            table.len(),
            table.width()
        );
        observer.on_batch_end(total);
        Ok(table)
    }
}
