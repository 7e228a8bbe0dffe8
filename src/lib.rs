//! Perfgraph: plotting and comparison of render-pass timing traces.
//!
//! The renderer's performance instrumentation writes one tab-separated trace
//! per run: two header lines, then one row per frame carrying the median,
//! minimum and maximum render-pass time in nanoseconds. This crate loads
//! those traces, overlays them, and compares an optimized run against a
//! baseline as a percentage-difference series with optional outlier
//! suppression and a polynomial trend line.
//!
//! The binaries (`plot`, `graph`, `diff`) are thin wrappers; the transforms
//! live in the `compare` and `fit` modules.

#![deny(missing_docs)]

extern crate csv;
#[macro_use]
extern crate error_chain;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate nalgebra;
extern crate plotters;
extern crate serde;
#[macro_use]
extern crate serde_derive;

pub mod errors;

mod trace;
pub use trace::Sample;
pub use trace::load_trace;
pub use trace::load_trace_path;

mod compare;
pub use compare::OUTLIER_THRESHOLD;
pub use compare::percent_change;
pub use compare::percent_difference;
pub use compare::suppress_outliers;
pub use compare::symmetric_bounds;

mod fit;
pub use fit::Polynomial;
pub use fit::polyfit;

mod chart;
pub use chart::render_difference;
pub use chart::render_overlay;

mod setting;
pub use setting::Mode;
pub use setting::PlotSetting;

#[cfg(test)]
mod tests {
    use super::*;

    const BASELINE: &'static str = "Hall of Pillars flythrough\n\
                                    frame\tmedian\tminimum\tmaximum\n\
                                    1\t100.0\t90.0\t110.0\n\
                                    2\t200.0\t180.0\t220.0\n";

    const OPTIMIZED: &'static str = "Hall of Pillars flythrough\n\
                                     frame\tmedian\tminimum\tmaximum\n\
                                     1\t80.0\t70.0\t90.0\n\
                                     2\t150.0\t140.0\t160.0\n";

    #[test]
    fn load_then_compare() {
        let a = load_trace(BASELINE.as_bytes()).unwrap();
        let b = load_trace(OPTIMIZED.as_bytes()).unwrap();
        assert_eq!(a.len(), 2);
        assert_eq!(a[0].frame, 1);
        assert_eq!(a[0].median, 100.0);
        assert_eq!(a[1].maximum, 220.0);

        let diff = percent_difference(&a, &b).unwrap();
        assert_eq!(diff, vec![(1, 20.0), (2, 25.0)]);
    }
}
