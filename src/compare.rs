//! The series comparator: percentage difference between two runs, outlier
//! suppression and chart bounds.

use errors::*;
use trace::Sample;

/// Clipping threshold (in percent) used by the difference chart. Values
/// beyond it are render-pass hiccups, not optimization effects, and would
/// drown out the trend.
pub const OUTLIER_THRESHOLD: f64 = 15.0;

/// Pointwise percentage difference of the median columns,
/// `(a - b) / a * 100` per frame.
///
/// Traces of unequal length are truncated to the shorter one (with a
/// warning); a pointwise frame-number mismatch is an error. Frames whose
/// baseline median is zero are skipped rather than producing inf/NaN.
pub fn percent_difference(a: &[Sample], b: &[Sample]) -> Result<Vec<(u32, f64)>> {
    let len = ::std::cmp::min(a.len(), b.len());
    if a.len() != b.len() {
        warn!(
            "traces differ in length ({} vs {} frames), truncating to {}",
            a.len(),
            b.len(),
            len
        );
    }

    let mut series = Vec::with_capacity(len);
    for (x, y) in a.iter().zip(b.iter()) {
        if x.frame != y.frame {
            bail!(ErrorKind::FrameMismatch(x.frame, y.frame));
        }
        if x.median == 0.0 {
            warn!("frame {}: zero median in baseline, skipping", x.frame);
            continue;
        }
        series.push((x.frame, (x.median - y.median) / x.median * 100.0));
    }
    Ok(series)
}

/// Returns a copy of `series` with every value beyond `threshold` percent
/// replaced by zero.
///
/// This is blunt fixed-threshold clipping for chart readability, not
/// statistical outlier detection; callers that want a different policy only
/// need to swap this function.
pub fn suppress_outliers(series: &[(u32, f64)], threshold: f64) -> Vec<(u32, f64)> {
    series
        .iter()
        .map(|&(frame, v)| if v.abs() > threshold {
            (frame, 0.0)
        } else {
            (frame, v)
        })
        .collect()
}

/// Symmetric y-limits around zero: `(-m, m)` with `m` one more than the
/// largest magnitude in `series`. Returns `None` for an empty series.
pub fn symmetric_bounds(series: &[(u32, f64)]) -> Option<(f64, f64)> {
    series
        .iter()
        .map(|&(_, v)| v.abs())
        .fold(None, |acc: Option<f64>, v| {
            Some(acc.map_or(v, |m| m.max(v)))
        })
        .map(|m| (-(m + 1.0), m + 1.0))
}

/// Percentage gain of `opt` over `unopt`: `(unopt - opt) / unopt * 100`.
pub fn percent_change(unopt: f64, opt: f64) -> f64 {
    (unopt - opt) / unopt * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use trace::Sample;

    fn sample(frame: u32, median: f64) -> Sample {
        Sample {
            frame: frame,
            median: median,
            minimum: median * 0.9,
            maximum: median * 1.1,
        }
    }

    #[test]
    fn identical_traces_give_zero() {
        let a = vec![sample(1, 100.0), sample(2, 250.0), sample(3, 175.0)];
        let diff = percent_difference(&a, &a).unwrap();
        assert!(diff.iter().all(|&(_, v)| v == 0.0));
        assert_eq!(diff.len(), 3);
    }

    #[test]
    fn twenty_percent_gain() {
        let a = vec![sample(1, 100.0)];
        let b = vec![sample(1, 80.0)];
        assert_eq!(percent_difference(&a, &b).unwrap(), vec![(1, 20.0)]);
    }

    #[test]
    fn truncates_to_shorter_trace() {
        let a = vec![sample(1, 100.0), sample(2, 100.0), sample(3, 100.0)];
        let b = vec![sample(1, 90.0), sample(2, 90.0)];
        let diff = percent_difference(&a, &b).unwrap();
        assert_eq!(diff.len(), 2);
    }

    #[test]
    fn frame_mismatch_is_an_error() {
        let a = vec![sample(1, 100.0)];
        let b = vec![sample(7, 100.0)];
        let err = percent_difference(&a, &b).unwrap_err();
        match *err.kind() {
            ErrorKind::FrameMismatch(1, 7) => {}
            ref other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn zero_median_is_skipped() {
        let a = vec![sample(1, 0.0), sample(2, 100.0)];
        let b = vec![sample(1, 50.0), sample(2, 50.0)];
        let diff = percent_difference(&a, &b).unwrap();
        assert_eq!(diff, vec![(2, 50.0)]);
    }

    #[test]
    fn suppression_clips_beyond_threshold() {
        let series = vec![(1, 5.0), (2, 20.0), (3, -30.0), (4, 10.0)];
        let cleaned = suppress_outliers(&series, 15.0);
        assert_eq!(cleaned, vec![(1, 5.0), (2, 0.0), (3, 0.0), (4, 10.0)]);
    }

    #[test]
    fn suppression_is_idempotent() {
        let series = vec![(1, 5.0), (2, 20.0), (3, -30.0), (4, 10.0)];
        let once = suppress_outliers(&series, 15.0);
        let twice = suppress_outliers(&once, 15.0);
        assert_eq!(once, twice);
    }

    #[test]
    fn bounds_are_symmetric_and_positive() {
        let series = vec![(1, 3.0), (2, -8.0), (3, 4.5)];
        let (lo, hi) = symmetric_bounds(&series).unwrap();
        assert_eq!(lo, -hi);
        assert_eq!(hi, 9.0);
        assert!(hi > 0.0);
    }

    #[test]
    fn bounds_of_empty_series() {
        assert_eq!(symmetric_bounds(&[]), None);
    }

    #[test]
    fn scalar_percent_change() {
        let d = percent_change(120.0, 100.0);
        assert!((d - 16.666666666666668).abs() < 1e-12);
        assert_eq!(format!("{:.2}", d), "16.67");
    }
}
