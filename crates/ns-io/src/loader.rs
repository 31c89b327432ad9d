//! CSV loaders for nodes, edges and routes.
//!
//! # CSV formats
//!
//! Columns are located by header name (see [`ColumnConfig`]); extra columns
//! are ignored and column order does not matter.
//!
//! ```text
//! ID,x,y
//! 1,345120.5,6291002.0
//! 2,345180.0,6291130.2
//! ```
//!
//! ```text
//! Nodo A,Nodo B,disponible
//! 1,2,1
//! 2,1,0
//! ```
//!
//! ```text
//! Name,sentido,geometry
//! L1,NS,"LINESTRING (345100 6291200, 345130 6291000)"
//! ```
//!
//! Ids written as whole floats (`12.0`), as spreadsheet and GIS exports
//! often do, are accepted.  An availability cell that is empty or not a whole
//! number is treated as missing.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::StringRecord;
use wkt::TryFromWkt;

use ns_core::{Direction, EdgeRecord, LineString, NodeId, NodeRecord, RouteRecord};

use crate::{ColumnConfig, IoError, IoResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the node table from a CSV file.
pub fn load_nodes_csv(path: &Path, cols: &ColumnConfig) -> IoResult<Vec<NodeRecord>> {
    load_nodes_reader(File::open(path)?, cols)
}

/// Like [`load_nodes_csv`] but accepts any `Read` source.
pub fn load_nodes_reader<R: Read>(reader: R, cols: &ColumnConfig) -> IoResult<Vec<NodeRecord>> {
    const TABLE: &str = "nodes";
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();
    let id = column(&headers, TABLE, &cols.node_id)?;
    let x = column(&headers, TABLE, &cols.x)?;
    let y = column(&headers, TABLE, &cols.y)?;

    let mut nodes = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let cell = Cell { row: &row, table: TABLE };
        nodes.push(NodeRecord {
            id:       cell.id(id, &cols.node_id)?,
            position: ns_core::Coord {
                x: cell.parse(x, &cols.x)?,
                y: cell.parse(y, &cols.y)?,
            },
        });
    }

    log::debug!("loaded {} nodes", nodes.len());
    Ok(nodes)
}

/// Load the edge table from a CSV file.
pub fn load_edges_csv(path: &Path, cols: &ColumnConfig) -> IoResult<Vec<EdgeRecord>> {
    load_edges_reader(File::open(path)?, cols)
}

/// Like [`load_edges_csv`] but accepts any `Read` source.
pub fn load_edges_reader<R: Read>(reader: R, cols: &ColumnConfig) -> IoResult<Vec<EdgeRecord>> {
    const TABLE: &str = "edges";
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();
    let start = column(&headers, TABLE, &cols.edge_start)?;
    let end = column(&headers, TABLE, &cols.edge_end)?;
    let availability = cols
        .availability
        .as_deref()
        .map(|name| column(&headers, TABLE, name))
        .transpose()?;

    let mut edges = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let cell = Cell { row: &row, table: TABLE };
        edges.push(EdgeRecord {
            start:     cell.id(start, &cols.edge_start)?,
            end:       cell.id(end, &cols.edge_end)?,
            available: availability.and_then(|i| parse_whole(cell.raw(i))),
        });
    }

    log::debug!("loaded {} edges", edges.len());
    Ok(edges)
}

/// Load the route table from a CSV file.
pub fn load_routes_csv(path: &Path, cols: &ColumnConfig) -> IoResult<Vec<RouteRecord>> {
    load_routes_reader(File::open(path)?, cols)
}

/// Like [`load_routes_csv`] but accepts any `Read` source.
///
/// Fails on an unknown direction label or a geometry that is not a WKT
/// `LINESTRING`.  Vertex count is not checked here; the matcher rejects
/// degenerate lines itself.
pub fn load_routes_reader<R: Read>(reader: R, cols: &ColumnConfig) -> IoResult<Vec<RouteRecord>> {
    const TABLE: &str = "routes";
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();
    let id = column(&headers, TABLE, &cols.route_id)?;
    let direction = column(&headers, TABLE, &cols.direction)?;
    let geometry = column(&headers, TABLE, &cols.geometry)?;

    let mut routes = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let cell = Cell { row: &row, table: TABLE };
        let line = cell.line();

        let direction = Direction::from_str(cell.raw(direction))
            .map_err(|source| IoError::Invalid { table: TABLE, line, source })?;
        let geometry = LineString::<f64>::try_from_wkt_str(cell.raw(geometry))
            .map_err(|e| IoError::Geometry { line, message: e.to_string() })?;

        routes.push(RouteRecord::new(cell.raw(id).trim(), geometry, direction));
    }

    log::debug!("loaded {} routes", routes.len());
    Ok(routes)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn column(headers: &StringRecord, table: &'static str, name: &str) -> IoResult<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| IoError::MissingColumn { table, column: name.to_owned() })
}

/// One data row plus the context needed for error messages.
struct Cell<'a> {
    row:   &'a StringRecord,
    table: &'static str,
}

impl Cell<'_> {
    fn line(&self) -> u64 {
        self.row.position().map_or(0, |p| p.line())
    }

    fn raw(&self, i: usize) -> &str {
        self.row.get(i).unwrap_or("")
    }

    fn error(&self, i: usize, column: &str) -> IoError {
        IoError::Parse {
            table:  self.table,
            line:   self.line(),
            column: column.to_owned(),
            value:  self.raw(i).to_owned(),
        }
    }

    fn parse<T: FromStr>(&self, i: usize, column: &str) -> IoResult<T> {
        self.raw(i).trim().parse().map_err(|_| self.error(i, column))
    }

    fn id(&self, i: usize, column: &str) -> IoResult<NodeId> {
        parse_whole(self.raw(i))
            .and_then(|v| u64::try_from(v).ok())
            .map(NodeId)
            .ok_or_else(|| self.error(i, column))
    }
}

/// Parse an integer, accepting whole-valued floats such as `"3.0"`.
fn parse_whole(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }
    let f = s.parse::<f64>().ok()?;
    (f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64).then_some(f as i64)
}
