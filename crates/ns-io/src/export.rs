//! CSV export of a [`ResultTable`].
//!
//! One row per route, in table order:
//!
//! ```text
//! route_id,node_1,node_2,node_3
//! L1,4,3,1
//! L2,4,1,0
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use ns_batch::{ResultTable, PAD_SENTINEL};

use crate::IoResult;

/// How short rows are padded out to the table width.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PadStyle {
    /// Write [`PAD_SENTINEL`] (`0`) in unused cells.
    #[default]
    Zero,
    /// Leave unused cells empty.
    Empty,
}

/// Write `table` as CSV to an arbitrary sink.  Returns the number of rows.
pub fn write_table<W: Write>(sink: W, table: &ResultTable, pad: PadStyle) -> IoResult<usize> {
    let mut wtr = Writer::from_writer(sink);

    let mut header = Vec::with_capacity(table.width() + 1);
    header.push("route_id".to_owned());
    header.extend(table.column_names());
    wtr.write_record(&header)?;

    for (route, cells) in table.cells() {
        let mut record = Vec::with_capacity(cells.len() + 1);
        record.push(route.to_string());
        record.extend(cells.into_iter().map(|cell| match (cell, pad) {
            (Some(node), _) => node.to_string(),
            (None, PadStyle::Zero) => PAD_SENTINEL.to_string(),
            (None, PadStyle::Empty) => String::new(),
        }));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(table.len())
}

/// Create (or truncate) `path` and write `table` to it.
pub fn write_table_csv(path: &Path, table: &ResultTable, pad: PadStyle) -> IoResult<usize> {
    let rows = write_table(File::create(path)?, table, pad)?;
    log::info!("wrote {rows} node sequences to {}", path.display());
    Ok(rows)
}
