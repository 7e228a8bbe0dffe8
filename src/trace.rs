//! Loading of render-pass timing traces.
//!
//! A trace is a tab-separated file: two header lines (run title and column
//! names), then one row per frame with `frame`, `median`, `minimum` and
//! `maximum` columns. Rows are kept in file order and never re-sorted.

use csv;
use errors::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading header rows every trace carries.
const HEADER_ROWS: usize = 2;

/// One frame's render-pass timing statistics, in nanoseconds.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Frame index as recorded by the instrumentation.
    pub frame: u32,

    /// Median render-pass time.
    pub median: f64,

    /// Minimum render-pass time.
    pub minimum: f64,

    /// Maximum render-pass time.
    pub maximum: f64,
}

/// Reads a trace from `rdr`, skipping the two header rows. A data row with
/// fewer than four fields or non-numeric content fails with `MalformedRow`
/// carrying the 1-based row number; a trace without any data rows fails
/// with `EmptyTrace`.
pub fn load_trace<R: Read>(rdr: R) -> Result<Vec<Sample>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(rdr);

    let mut samples = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let row = i + 1;
        let record = record.chain_err(|| ErrorKind::MalformedRow(row))?;
        if i < HEADER_ROWS {
            continue;
        }
        let sample: Sample = record
            .deserialize(None)
            .chain_err(|| ErrorKind::MalformedRow(row))?;
        samples.push(sample);
    }

    if samples.is_empty() {
        bail!(ErrorKind::EmptyTrace);
    }
    Ok(samples)
}

/// Opens `path` and loads the trace in it.
pub fn load_trace_path<P: AsRef<Path>>(path: P) -> Result<Vec<Sample>> {
    let name = path.as_ref().display().to_string();
    let file = File::open(path.as_ref())
        .chain_err(|| format!("cannot open trace {}", name))?;
    load_trace(file).chain_err(|| format!("bad trace {}", name))
}
