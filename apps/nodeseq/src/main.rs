//! nodeseq — match route polylines to node sequences on a directed network.
//!
//! Reads a node table, an edge table and a route table (WKT geometries),
//! finds for every route the lowest-deviation path between the nodes nearest
//! its directional endpoints, and writes one row of node ids per route.
//!
//! ```text
//! nodeseq --nodes nodes.csv --edges edges.csv --routes routes.csv \
//!         --output sequences.csv --availability-column disponible
//! ```
//!
//! Set `RUST_LOG=info` (or `debug`) for per-route diagnostics.

mod progress;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use ns_batch::BatchBuilder;
use ns_core::MatchConfig;
use ns_io::{ColumnConfig, PadStyle};

use progress::BarObserver;

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, help = "CSV file with node ids and coordinates")]
    nodes: PathBuf,
    #[arg(long, help = "CSV file with directed edges")]
    edges: PathBuf,
    #[arg(long, help = "CSV file with route ids, directions and WKT linestrings")]
    routes: PathBuf,
    #[arg(long, help = "output CSV for the node sequences")]
    output: PathBuf,

    #[arg(long, default_value = "ID", help = "node id column")]
    node_id_column: String,
    #[arg(long, default_value = "x", help = "node x coordinate column")]
    x_column: String,
    #[arg(long, default_value = "y", help = "node y coordinate column")]
    y_column: String,
    #[arg(long, default_value = "Nodo A", help = "edge start-node column")]
    edge_start_column: String,
    #[arg(long, default_value = "Nodo B", help = "edge end-node column")]
    edge_end_column: String,
    #[arg(long, help = "edge availability column; when set only edges flagged 1 are used")]
    availability_column: Option<String>,
    #[arg(long, default_value = "Name", help = "route id column")]
    route_id_column: String,
    #[arg(long, default_value = "sentido", help = "route direction column (NS/SN)")]
    direction_column: String,
    #[arg(long, default_value = "geometry", help = "route geometry column (WKT)")]
    geometry_column: String,

    #[arg(long, help = "leave padding cells empty instead of writing 0")]
    empty_padding: bool,
    #[arg(long, help = "hide the progress bar")]
    quiet: bool,
}

impl Args {
    fn columns(&self) -> ColumnConfig {
        ColumnConfig {
            node_id:      self.node_id_column.clone(),
            x:            self.x_column.clone(),
            y:            self.y_column.clone(),
            edge_start:   self.edge_start_column.clone(),
            edge_end:     self.edge_end_column.clone(),
            availability: self.availability_column.clone(),
            route_id:     self.route_id_column.clone(),
            direction:    self.direction_column.clone(),
            geometry:     self.geometry_column.clone(),
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let cols = args.columns();

    // 1. Load inputs.
    let nodes = ns_io::load_nodes_csv(&args.nodes, &cols)
        .with_context(|| format!("reading nodes from {}", args.nodes.display()))?;
    let edges = ns_io::load_edges_csv(&args.edges, &cols)
        .with_context(|| format!("reading edges from {}", args.edges.display()))?;
    let routes = ns_io::load_routes_csv(&args.routes, &cols)
        .with_context(|| format!("reading routes from {}", args.routes.display()))?;
    println!(
        "Loaded {} nodes, {} edges, {} routes",
        nodes.len(),
        edges.len(),
        routes.len()
    );

    // 2. Build the batch router.
    let config = MatchConfig::default().with_edge_filter(cols.edge_filter());
    let batch = BatchBuilder::new(config).nodes(nodes).edges(edges).build()?;

    // 3. Run.
    let t0 = Instant::now();
    let table = if args.quiet {
        batch.run(&routes, &mut ns_batch::NoopObserver)?
    } else {
        let mut bar = BarObserver::new(routes.len()).map_err(|e| anyhow::anyhow!(e))?;
        batch.run(&routes, &mut bar)?
    };
    let elapsed = t0.elapsed();

    // 4. Write.
    let pad = if args.empty_padding { PadStyle::Empty } else { PadStyle::Zero };
    ns_io::write_table_csv(&args.output, &table, pad)
        .with_context(|| format!("writing {}", args.output.display()))?;

    // 5. Summary.
    println!("Matched {} routes in {:.3} s", table.len(), elapsed.as_secs_f64());
    println!("  {} : {} rows x {} node columns", args.output.display(), table.len(), table.width());
    println!();
    println!("{:<16} {:>6} {:>12} {:>12}", "Route", "Nodes", "First", "Last");
    println!("{}", "-".repeat(49));
    for (route, seq) in table.rows() {
        let first = seq.first().map_or_else(|| "-".to_owned(), ToString::to_string);
        let last = seq.last().map_or_else(|| "-".to_owned(), ToString::to_string);
        println!("{:<16} {:>6} {:>12} {:>12}", route.as_str(), seq.len(), first, last);
    }

    Ok(())
}
