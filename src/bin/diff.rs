//! Reports the percentage gain between two scalar measurements, typically
//! the per-run median render-pass time before and after an optimization.

#[macro_use]
extern crate error_chain;
extern crate perfgraph;
extern crate structopt;

use perfgraph::errors::*;
use perfgraph::percent_change;
use structopt::StructOpt;

quick_main!(run);

fn run() -> Result<()> {
    let opt = Opt::from_args();
    if opt.unoptimized == 0.0 {
        bail!(ErrorKind::InvalidArgument(
            "unoptimized value must be nonzero".into(),
        ));
    }

    let difference = percent_change(opt.unoptimized, opt.optimized);

    println!("Unoptimized: {}", opt.unoptimized as i64);
    println!("Optimized:   {}", opt.optimized as i64);
    println!("Difference:  {:.2}", difference);
    Ok(())
}

#[derive(StructOpt, Debug)]
#[structopt(name = "diff")]
#[structopt(about = "Percentage gain of an optimized measurement over a baseline.")]
struct Opt {
    /// Unoptimized (baseline) measurement.
    unoptimized: f64,

    /// Optimized measurement.
    optimized: f64,
}
