//! Basic trace plotter: overlays the median column of one or two traces
//! with the fixed y-range used for the Hall of Pillars flythrough.

extern crate chrono;
extern crate env_logger;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate perfgraph;
extern crate structopt;

use perfgraph::errors::*;
use perfgraph::{load_trace_path, render_overlay};
use std::env;
use std::io::Write;
use std::path::PathBuf;
use structopt::StructOpt;

/// Fixed y-limits in nanoseconds, the usual flythrough range.
const Y_MIN: f64 = 5_000_000.0;
const Y_MAX: f64 = 18_000_000.0;

quick_main!(run);

fn run() -> Result<()> {
    init_logger();
    let opt = Opt::from_args();

    let first = load_trace_path(&opt.first)?;
    info!("loaded {} frames from {}", first.len(), opt.first.display());

    let second = match opt.second {
        Some(ref path) => {
            let trace = load_trace_path(path)?;
            info!("loaded {} frames from {}", trace.len(), path.display());
            Some(trace)
        }
        None => None,
    };

    render_overlay(
        &opt.output,
        &first,
        second.as_ref().map(|t| t.as_slice()),
        (Y_MIN, Y_MAX),
    )?;
    info!("wrote {}", opt.output.display());
    Ok(())
}

fn init_logger() {
    let mut builder = env_logger::Builder::new();
    builder.format(|buf, record| {
        let t = chrono::Utc::now();
        writeln!(
            buf,
            "{} {}:{}: {}",
            t.format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });
    if let Ok(filter) = env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    }
    builder.init();
}

#[derive(StructOpt, Debug)]
#[structopt(name = "plot")]
#[structopt(about = "Overlay the median render-pass time of one or two traces.")]
struct Opt {
    /// First trace file.
    first: PathBuf,

    /// Optional second trace file.
    second: Option<PathBuf>,

    /// Output image.
    #[structopt(short = "o", long = "out", default_value = "plot.png")]
    output: PathBuf,
}
