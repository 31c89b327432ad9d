//! Integration tests for ns-batch.

use ns_core::{Direction, EdgeRecord, LineString, MatchConfig, NodeId, NodeRecord, RouteRecord};

use crate::{BatchBuilder, BatchRouter};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Five nodes up the y axis, ids 1..=5 at y = 0..=4, one-way northbound.
fn chain() -> (Vec<NodeRecord>, Vec<EdgeRecord>) {
    let nodes = (0..5u64)
        .map(|i| NodeRecord::new(i + 1, 0.0, i as f64))
        .collect();
    let edges = (1..5u64).map(|i| EdgeRecord::new(i, i + 1)).collect();
    (nodes, edges)
}

fn chain_batch() -> BatchRouter<ns_spatial::DijkstraRouter> {
    let (nodes, edges) = chain();
    BatchBuilder::new(MatchConfig::default())
        .nodes(nodes)
        .edges(edges)
        .build()
        .unwrap()
}

fn route(id: &str, coords: Vec<(f64, f64)>, direction: Direction) -> RouteRecord {
    RouteRecord::new(id, LineString::from(coords), direction)
}

fn ids(raw: &[u64]) -> Vec<NodeId> {
    raw.iter().copied().map(NodeId).collect()
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use ns_core::{CoreError, MatchConfig, NodeId, NodeRecord};

    use crate::{BatchBuilder, BatchError};

    #[test]
    fn missing_nodes_is_config_error() {
        let err = BatchBuilder::new(MatchConfig::default()).build().err().unwrap();
        assert!(matches!(err, BatchError::Config(_)));
    }

    #[test]
    fn empty_nodes_rejected() {
        let err = BatchBuilder::new(MatchConfig::default())
            .nodes(vec![])
            .build()
            .err()
            .unwrap();
        assert_eq!(err, BatchError::Nodes(CoreError::EmptyNodeSet));
    }

    #[test]
    fn duplicate_nodes_rejected() {
        let err = BatchBuilder::new(MatchConfig::default())
            .nodes(vec![NodeRecord::new(4, 0.0, 0.0), NodeRecord::new(4, 1.0, 0.0)])
            .build()
            .err()
            .unwrap();
        assert_eq!(err, BatchError::Nodes(CoreError::DuplicateNode(NodeId(4))));
    }

    #[test]
    fn edges_default_to_none() {
        let batch = BatchBuilder::new(MatchConfig::default())
            .nodes(vec![NodeRecord::new(1, 0.0, 0.0)])
            .build()
            .unwrap();
        assert!(batch.edges.is_empty());
        assert_eq!(batch.nodes.len(), 1);
    }
}

// ── Route loop ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use ns_core::{CoreError, Direction, EdgeFilter, EdgeRecord, MatchConfig, NodeRecord, RouteId};
    use ns_spatial::SpatialError;

    use super::*;
    use crate::{BatchError, NoopObserver, ObserverError, ProgressFn, ProgressObserver, PAD_SENTINEL};

    #[test]
    fn padding_to_longest_sequence() {
        let batch = chain_batch();
        let routes = vec![
            route("three", vec![(0.0, 0.0), (0.0, 2.0)], Direction::SouthToNorth),
            route("five", vec![(0.0, 0.0), (0.0, 4.0)], Direction::SouthToNorth),
            // Southbound against one-way edges: no path.
            route("none", vec![(0.0, 0.0), (0.0, 4.0)], Direction::NorthToSouth),
        ];
        let table = batch.run(&routes, &mut NoopObserver).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.width(), 5);

        let rows: Vec<_> = table.padded_rows().collect();
        assert_eq!(rows[0].0.as_str(), "three");
        assert_eq!(rows[0].1, [1, 2, 3, PAD_SENTINEL, PAD_SENTINEL]);
        assert_eq!(rows[1].1, [1, 2, 3, 4, 5]);
        assert_eq!(rows[2].1, [0, 0, 0, 0, 0]);

        assert_eq!(table.get(&RouteId::from("five")), Some(ids(&[1, 2, 3, 4, 5]).as_slice()));
        assert_eq!(table.get(&RouteId::from("none")), Some(&[][..]));
    }

    #[test]
    fn preserves_route_order() {
        let batch = chain_batch();
        let routes = vec![
            route("b", vec![(0.0, 1.0), (0.0, 3.0)], Direction::SouthToNorth),
            route("a", vec![(0.0, 0.0), (0.0, 1.0)], Direction::SouthToNorth),
            route("c", vec![(0.0, 4.0), (0.0, 2.0)], Direction::SouthToNorth),
        ];
        let table = batch.run(&routes, &mut NoopObserver).unwrap();
        let order: Vec<_> = table.rows().map(|(id, _)| id.as_str().to_owned()).collect();
        assert_eq!(order, ["b", "a", "c"]);
        // "c" is drawn southbound but requested northbound → 3, 4, 5.
        assert_eq!(table.get(&RouteId::from("c")), Some(ids(&[3, 4, 5]).as_slice()));
    }

    #[test]
    fn deviations_recomputed_per_route() {
        // Diamond: A(0,0) B(0,5) C(4,5) D(0,10); A→B→D and A→C→D.
        let nodes = vec![
            NodeRecord::new(1, 0.0, 0.0),
            NodeRecord::new(2, 0.0, 5.0),
            NodeRecord::new(3, 4.0, 5.0),
            NodeRecord::new(4, 0.0, 10.0),
        ];
        let edges = vec![
            EdgeRecord::new(1, 2),
            EdgeRecord::new(2, 4),
            EdgeRecord::new(1, 3),
            EdgeRecord::new(3, 4),
        ];
        let batch = BatchBuilder::new(MatchConfig::default())
            .nodes(nodes)
            .edges(edges)
            .build()
            .unwrap();
        let routes = vec![
            route("left", vec![(0.0, 0.0), (0.0, 10.0)], Direction::SouthToNorth),
            route("right", vec![(0.0, 0.0), (4.0, 5.0), (0.0, 10.0)], Direction::SouthToNorth),
            route("left-again", vec![(0.0, 0.0), (0.0, 10.0)], Direction::SouthToNorth),
        ];
        let table = batch.run(&routes, &mut NoopObserver).unwrap();
        assert_eq!(table.get(&RouteId::from("left")), Some(ids(&[1, 2, 4]).as_slice()));
        assert_eq!(table.get(&RouteId::from("right")), Some(ids(&[1, 3, 4]).as_slice()));
        assert_eq!(table.get(&RouteId::from("left-again")), Some(ids(&[1, 2, 4]).as_slice()));
    }

    #[test]
    fn availability_filter_applied() {
        let (nodes, edges) = chain();
        // Close 3→4.
        let edges: Vec<_> = edges
            .into_iter()
            .map(|e| e.with_availability(Some((e.start != NodeId(3)) as i64)))
            .collect();
        let batch = BatchBuilder::new(MatchConfig::default().with_edge_filter(EdgeFilter::AvailableOnly))
            .nodes(nodes)
            .edges(edges)
            .build()
            .unwrap();
        let routes = vec![route("r", vec![(0.0, 0.0), (0.0, 4.0)], Direction::SouthToNorth)];
        let table = batch.run(&routes, &mut NoopObserver).unwrap();
        assert_eq!(table.get(&RouteId::from("r")), Some(&[][..]));
    }

    #[test]
    fn progress_reported_once_per_route() {
        let batch = chain_batch();
        let routes = vec![
            route("a", vec![(0.0, 0.0), (0.0, 1.0)], Direction::SouthToNorth),
            route("b", vec![(0.0, 0.0), (0.0, 2.0)], Direction::SouthToNorth),
            route("c", vec![(0.0, 0.0), (0.0, 3.0)], Direction::SouthToNorth),
        ];
        let mut seen = Vec::new();
        batch.run(&routes, &mut ProgressFn(|done, total| seen.push((done, total)))).unwrap();
        assert_eq!(seen, [(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn failing_observer_does_not_abort() {
        struct Broken {
            calls: usize,
            ended: bool,
        }
        impl ProgressObserver for Broken {
            fn on_progress(&mut self, _: usize, _: usize) -> Result<(), ObserverError> {
                self.calls += 1;
                Err("display went away".into())
            }
            fn on_batch_end(&mut self, _: usize) {
                self.ended = true;
            }
        }

        let batch = chain_batch();
        let routes = vec![
            route("a", vec![(0.0, 0.0), (0.0, 2.0)], Direction::SouthToNorth),
            route("b", vec![(0.0, 0.0), (0.0, 4.0)], Direction::SouthToNorth),
        ];
        let mut obs = Broken { calls: 0, ended: false };
        let table = batch.run(&routes, &mut obs).unwrap();
        assert_eq!(obs.calls, 2);
        assert!(obs.ended);
        assert_eq!(table.width(), 5);
    }

    #[test]
    fn first_error_aborts_with_route_id() {
        let batch = chain_batch();
        let routes = vec![
            route("ok", vec![(0.0, 0.0), (0.0, 2.0)], Direction::SouthToNorth),
            route("bad", vec![(0.0, 0.0)], Direction::SouthToNorth),
            route("never", vec![(0.0, 0.0), (0.0, 4.0)], Direction::SouthToNorth),
        ];
        let mut started = Vec::new();
        struct Starts<'a>(&'a mut Vec<usize>);
        impl ProgressObserver for Starts<'_> {
            fn on_route_start(&mut self, index: usize, _: &RouteId) {
                self.0.push(index);
            }
        }

        let err = batch.run(&routes, &mut Starts(&mut started)).unwrap_err();
        assert_eq!(
            err,
            BatchError::Route {
                route:  RouteId::from("bad"),
                source: SpatialError::Core(CoreError::DegenerateGeometry { vertices: 1 }),
            }
        );
        assert_eq!(started, [0, 1]);
    }

    #[test]
    fn dangling_edge_aborts() {
        let (nodes, mut edges) = chain();
        edges.push(EdgeRecord::new(5, 42));
        let batch = BatchBuilder::new(MatchConfig::default())
            .nodes(nodes)
            .edges(edges)
            .build()
            .unwrap();
        let routes = vec![route("r", vec![(0.0, 0.0), (0.0, 4.0)], Direction::SouthToNorth)];
        let err = batch.run(&routes, &mut NoopObserver).unwrap_err();
        assert!(matches!(
            err,
            BatchError::Route {
                source: SpatialError::Core(CoreError::DanglingEdgeReference { .. }),
                ..
            }
        ));
    }

    #[test]
    fn empty_route_set() {
        let batch = chain_batch();
        let table = batch.run(&[], &mut NoopObserver).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.width(), 0);
    }

    #[test]
    fn repeated_route_id_keeps_last_result_in_first_slot() {
        let batch = chain_batch();
        let routes = vec![
            route("x", vec![(0.0, 0.0), (0.0, 1.0)], Direction::SouthToNorth),
            route("y", vec![(0.0, 0.0), (0.0, 1.0)], Direction::SouthToNorth),
            route("x", vec![(0.0, 0.0), (0.0, 3.0)], Direction::SouthToNorth),
        ];
        let table = batch.run(&routes, &mut NoopObserver).unwrap();
        assert_eq!(table.len(), 2);
        let first = table.rows().next().unwrap();
        assert_eq!(first.0.as_str(), "x");
        assert_eq!(first.1, ids(&[1, 2, 3, 4]).as_slice());
    }
}

// ── ResultTable ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod table_tests {
    use ns_core::{NodeId, RouteId};

    use super::ids;
    use crate::ResultTable;

    #[test]
    fn cells_distinguish_padding_from_zero_id() {
        let mut t = ResultTable::new();
        t.insert(RouteId::from("r0"), ids(&[0, 7]));
        t.insert(RouteId::from("r1"), ids(&[7, 8, 9]));

        let cells: Vec<_> = t.cells().map(|(_, c)| c).collect();
        assert_eq!(cells[0], [Some(NodeId(0)), Some(NodeId(7)), None]);
        assert_eq!(cells[1], [Some(NodeId(7)), Some(NodeId(8)), Some(NodeId(9))]);

        let padded: Vec<_> = t.padded_rows().map(|(_, r)| r).collect();
        assert_eq!(padded[0], [0, 7, 0]);
    }

    #[test]
    fn column_names_follow_width() {
        let mut t = ResultTable::new();
        assert!(t.column_names().is_empty());
        t.insert(RouteId::from("a"), ids(&[1, 2]));
        assert_eq!(t.column_names(), ["node_1", "node_2"]);
    }
}
