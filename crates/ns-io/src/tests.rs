//! Integration tests for ns-io.

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use ns_core::{Direction, NodeId, RouteId};

    use crate::{load_edges_reader, load_nodes_reader, load_routes_reader, ColumnConfig, IoError};

    fn cols() -> ColumnConfig {
        ColumnConfig::default()
    }

    #[test]
    fn nodes_default_columns() {
        let src = "ID,x,y\n1,0.0,0.0\n2,0.5,10\n";
        let nodes = load_nodes_reader(Cursor::new(src), &cols()).unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].id, NodeId(2));
        assert_eq!(nodes[1].position.x, 0.5);
        assert_eq!(nodes[1].position.y, 10.0);
    }

    #[test]
    fn nodes_column_order_and_extras_ignored() {
        let src = "y,comment,x,ID\n3.0,stop,4.0,9\n";
        let nodes = load_nodes_reader(Cursor::new(src), &cols()).unwrap();
        assert_eq!(nodes[0].id, NodeId(9));
        assert_eq!(nodes[0].position.x, 4.0);
        assert_eq!(nodes[0].position.y, 3.0);
    }

    #[test]
    fn float_formatted_ids_accepted() {
        let src = "ID,x,y\n12.0,1,1\n";
        let nodes = load_nodes_reader(Cursor::new(src), &cols()).unwrap();
        assert_eq!(nodes[0].id, NodeId(12));
    }

    #[test]
    fn fractional_id_rejected() {
        let src = "ID,x,y\n1.5,1,1\n";
        let err = load_nodes_reader(Cursor::new(src), &cols()).unwrap_err();
        match err {
            IoError::Parse { table, line, column, value } => {
                assert_eq!(table, "nodes");
                assert_eq!(line, 2);
                assert_eq!(column, "ID");
                assert_eq!(value, "1.5");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_coordinate_rejected() {
        let src = "ID,x,y\n1,east,1\n";
        let err = load_nodes_reader(Cursor::new(src), &cols()).unwrap_err();
        assert!(matches!(err, IoError::Parse { ref column, .. } if column == "x"));
    }

    #[test]
    fn missing_column_named() {
        let src = "id,x,y\n1,0,0\n";
        let err = load_nodes_reader(Cursor::new(src), &cols()).unwrap_err();
        match err {
            IoError::MissingColumn { table, column } => {
                assert_eq!(table, "nodes");
                assert_eq!(column, "ID");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn custom_column_names() {
        let cols = ColumnConfig {
            node_id: "node".into(),
            x: "lon".into(),
            y: "lat".into(),
            ..ColumnConfig::default()
        };
        let src = "node,lon,lat\n5,1.0,2.0\n";
        let nodes = load_nodes_reader(Cursor::new(src), &cols).unwrap();
        assert_eq!(nodes[0].id, NodeId(5));
    }

    #[test]
    fn edges_without_availability_column() {
        let src = "Nodo A,Nodo B\n1,2\n2,3\n";
        let edges = load_edges_reader(Cursor::new(src), &cols()).unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].start, NodeId(1));
        assert_eq!(edges[0].end, NodeId(2));
        assert_eq!(edges[0].available, None);
    }

    #[test]
    fn edges_availability_parsed() {
        let cols = ColumnConfig { availability: Some("disponible".into()), ..ColumnConfig::default() };
        let src = "Nodo A,Nodo B,disponible\n1,2,1\n2,3,0\n3,4,\n4,5,yes\n5,6,1.0\n";
        let edges = load_edges_reader(Cursor::new(src), &cols).unwrap();
        let flags: Vec<_> = edges.iter().map(|e| e.available).collect();
        assert_eq!(flags, [Some(1), Some(0), None, None, Some(1)]);
        let usable = edges.iter().filter(|e| cols.edge_filter().retains(e)).count();
        assert_eq!(usable, 2);
    }

    #[test]
    fn edges_missing_availability_column_is_error() {
        let cols = ColumnConfig { availability: Some("disponible".into()), ..ColumnConfig::default() };
        let src = "Nodo A,Nodo B\n1,2\n";
        let err = load_edges_reader(Cursor::new(src), &cols).unwrap_err();
        assert!(matches!(err, IoError::MissingColumn { table: "edges", .. }));
    }

    #[test]
    fn routes_parsed() {
        let src = "Name,sentido,geometry\n\
                   L1,NS,\"LINESTRING (0 10, 0 0)\"\n\
                   L2,south-to-north,\"LINESTRING (1 0, 1 5, 2 10)\"\n";
        let routes = load_routes_reader(Cursor::new(src), &cols()).unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].id, RouteId::from("L1"));
        assert_eq!(routes[0].direction, Direction::NorthToSouth);
        assert_eq!(routes[0].geometry.0.len(), 2);
        assert_eq!(routes[1].direction, Direction::SouthToNorth);
        assert_eq!(routes[1].geometry.0[2].y, 10.0);
    }

    #[test]
    fn unknown_direction_rejected() {
        let src = "Name,sentido,geometry\nL1,EW,\"LINESTRING (0 0, 0 1)\"\n";
        let err = load_routes_reader(Cursor::new(src), &cols()).unwrap_err();
        assert!(matches!(err, IoError::Invalid { table: "routes", line: 2, .. }));
    }

    #[test]
    fn non_linestring_geometry_rejected() {
        let src = "Name,sentido,geometry\nL1,NS,\"POINT (0 0)\"\n";
        let err = load_routes_reader(Cursor::new(src), &cols()).unwrap_err();
        assert!(matches!(err, IoError::Geometry { line: 2, .. }));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("nodes.csv");
        std::fs::write(&path, "ID,x,y\n1,0,0\n").unwrap();
        let nodes = crate::load_nodes_csv(&path, &cols()).unwrap();
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = crate::load_nodes_csv(&dir.path().join("absent.csv"), &cols()).unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }
}

#[cfg(test)]
mod export_tests {
    use ns_batch::ResultTable;
    use ns_core::{NodeId, RouteId};

    use crate::{write_table, write_table_csv, PadStyle};

    fn table() -> ResultTable {
        let mut t = ResultTable::new();
        t.insert(RouteId::from("L1"), vec![NodeId(4), NodeId(3), NodeId(1)]);
        t.insert(RouteId::from("L2"), vec![NodeId(4), NodeId(1)]);
        t.insert(RouteId::from("L3"), vec![]);
        t
    }

    fn render(table: &ResultTable, pad: PadStyle) -> String {
        let mut buf = Vec::new();
        write_table(&mut buf, table, pad).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn zero_padding() {
        let out = render(&table(), PadStyle::Zero);
        assert_eq!(
            out,
            "route_id,node_1,node_2,node_3\nL1,4,3,1\nL2,4,1,0\nL3,0,0,0\n"
        );
    }

    #[test]
    fn empty_padding() {
        let out = render(&table(), PadStyle::Empty);
        assert_eq!(out, "route_id,node_1,node_2,node_3\nL1,4,3,1\nL2,4,1,\nL3,,,\n");
    }

    #[test]
    fn empty_table_writes_header_only() {
        let out = render(&ResultTable::new(), PadStyle::Zero);
        assert_eq!(out, "route_id\n");
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("sequences.csv");
        let rows = write_table_csv(&path, &table(), PadStyle::Zero).unwrap();
        assert_eq!(rows, 3);

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["route_id", "node_1", "node_2", "node_3"]);
        let first = rdr.records().next().unwrap().unwrap();
        assert_eq!(first.get(0), Some("L1"));
        assert_eq!(first.get(3), Some("1"));
    }
}
