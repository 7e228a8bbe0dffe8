//! Configurable trace plotter. Arguments mirror the original measurement
//! workflow: y limits, one or two traces, a mode flag (0 overlays both
//! runs, 1 plots the percentage gain of the second run) and a fit flag for
//! the polynomial trend line.
//!
//! Recommended y limits, in nanoseconds:
//!
//! Hall of Pillars flythrough: 7000000 18000000
//! Hall of Pillars parameter:  0 42500000
//! Mandelbulb parameter:       0 11000000

extern crate chrono;
extern crate env_logger;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate perfgraph;
extern crate structopt;

use perfgraph::errors::*;
use perfgraph::{Mode, PlotSetting, OUTLIER_THRESHOLD};
use perfgraph::{load_trace_path, percent_difference, polyfit, render_difference,
                render_overlay, suppress_outliers};
use std::env;
use std::io::Write;
use std::path::PathBuf;
use structopt::StructOpt;

quick_main!(run);

fn run() -> Result<()> {
    init_logger();
    let opt = Opt::from_args();

    let mode = Mode::from_flag(opt.mode)?;
    let fit_degree = match opt.fit {
        0 => None,
        1 => Some(opt.degree),
        other => bail!(ErrorKind::InvalidArgument(
            format!("fit flag must be 0 or 1, got {}", other),
        )),
    };
    let setting = PlotSetting::new(
        opt.y_min,
        opt.y_max,
        opt.first,
        opt.second,
        mode,
        fit_degree,
        opt.output,
    )?;

    let first = load_trace_path(&setting.first)?;
    info!("loaded {} frames from {}", first.len(), setting.first.display());

    match setting.mode {
        Mode::Overlay => {
            if setting.fit_degree.is_some() {
                warn!("trend fitting applies to difference mode only, ignoring");
            }
            let second = match setting.second {
                Some(ref path) => Some(load_trace_path(path)?),
                None => None,
            };
            render_overlay(
                &setting.output,
                &first,
                second.as_ref().map(|t| t.as_slice()),
                (setting.y_min, setting.y_max),
            )?;
        }
        Mode::Difference => {
            let path = setting.second.as_ref().expect("checked by PlotSetting::new");
            let second = load_trace_path(path)?;
            let diff = percent_difference(&first, &second)?;

            // Suppress once; the chart bounds and the fit share the result.
            let cleaned = suppress_outliers(&diff, OUTLIER_THRESHOLD);

            let trend = match setting.fit_degree {
                Some(degree) => {
                    let xs: Vec<f64> = cleaned.iter().map(|&(f, _)| f as f64).collect();
                    let ys: Vec<f64> = cleaned.iter().map(|&(_, v)| v).collect();
                    Some(polyfit(&xs, &ys, degree)?)
                }
                None => None,
            };
            render_difference(&setting.output, &cleaned, trend.as_ref())?;
        }
    }

    info!("wrote {}", setting.output.display());
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
#[structopt(name = "graph")]
#[structopt(about = "Plot one or two traces, or the percentage difference between them.")]
struct Opt {
    /// Lower y-axis limit in nanoseconds (overlay mode).
    y_min: f64,

    /// Upper y-axis limit in nanoseconds (overlay mode).
    y_max: f64,

    /// First (baseline) trace file.
    first: PathBuf,

    /// Optional second trace file.
    second: Option<PathBuf>,

    /// 0 plots both traces, 1 plots the percentage difference.
    #[structopt(default_value = "0")]
    mode: u8,

    /// 1 overlays a polynomial trend line on the difference.
    #[structopt(default_value = "0")]
    fit: u8,

    /// Degree of the trend-line polynomial.
    #[structopt(long = "degree", default_value = "15")]
    degree: usize,

    /// Output image.
    #[structopt(short = "o", long = "out", default_value = "graph.png")]
    output: PathBuf,
}
