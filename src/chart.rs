//! Chart rendering over plotters.
//!
//! Charts are written as PNG files. The drawing functions are generic over
//! the backend so tests can render into an in-memory buffer.

use compare;
use errors::*;
use fit::Polynomial;
use itertools::Itertools;
use itertools::MinMaxResult;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use trace::Sample;

/// Chart pixel dimensions.
const SIZE: (u32, u32) = (1280, 720);

/// Horizontal padding (in frames) around the difference chart.
const X_PAD: f64 = 500.0;

fn render_err<E: ::std::fmt::Display>(e: E) -> Error {
    ErrorKind::Render(e.to_string()).into()
}

fn medians<'a>(samples: &'a [Sample]) -> impl Iterator<Item = (f64, f64)> + 'a {
    samples.iter().map(|s| (s.frame as f64, s.median))
}

fn span<I: Iterator<Item = f64>>(xs: I) -> Result<(f64, f64)> {
    match xs.minmax() {
        MinMaxResult::NoElements => bail!(ErrorKind::EmptyTrace),
        MinMaxResult::OneElement(x) => Ok((x - 1.0, x + 1.0)),
        MinMaxResult::MinMax(lo, hi) => Ok((lo, hi)),
    }
}

/// Draws the median column of one or two traces into a PNG at `path`.
pub fn render_overlay<P: AsRef<Path>>(
    path: P,
    first: &[Sample],
    second: Option<&[Sample]>,
    y_range: (f64, f64),
) -> Result<()> {
    let root = BitMapBackend::new(path.as_ref(), SIZE).into_drawing_area();
    draw_overlay(&root, first, second, y_range)?;
    root.present().map_err(render_err)
}

fn draw_overlay<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    first: &[Sample],
    second: Option<&[Sample]>,
    y_range: (f64, f64),
) -> Result<()> {
    root.fill(&WHITE).map_err(render_err)?;

    let frames = first
        .iter()
        .chain(second.unwrap_or(&[]).iter())
        .map(|s| s.frame as f64);
    let (x_lo, x_hi) = span(frames)?;

    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(x_lo..x_hi, y_range.0..y_range.1)
        .map_err(render_err)?;
    chart
        .configure_mesh()
        .x_desc("Frame")
        .y_desc("Render Pass Time (ns)")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(medians(first), &BLUE))
        .map_err(render_err)?
        .label("Unoptimized")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    if let Some(second) = second {
        chart
            .draw_series(LineSeries::new(medians(second), &GREEN))
            .map_err(render_err)?
            .label("Optimized")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &GREEN));

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(render_err)?;
    }
    Ok(())
}

/// Draws the percentage-difference series into a PNG at `path`, with a
/// black zero line and an optional red trend curve. Pass the series with
/// outliers already suppressed; the symmetric y-limits come from it.
pub fn render_difference<P: AsRef<Path>>(
    path: P,
    series: &[(u32, f64)],
    trend: Option<&Polynomial>,
) -> Result<()> {
    let root = BitMapBackend::new(path.as_ref(), SIZE).into_drawing_area();
    draw_difference(&root, series, trend)?;
    root.present().map_err(render_err)
}

fn draw_difference<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &[(u32, f64)],
    trend: Option<&Polynomial>,
) -> Result<()> {
    root.fill(&WHITE).map_err(render_err)?;

    let (y_lo, y_hi) = match compare::symmetric_bounds(series) {
        Some(bounds) => bounds,
        None => bail!(ErrorKind::EmptyTrace),
    };
    let (x_lo, x_hi) = span(series.iter().map(|&(f, _)| f as f64))?;

    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d((x_lo - X_PAD)..(x_hi + X_PAD), y_lo..y_hi)
        .map_err(render_err)?;
    chart
        .configure_mesh()
        .x_desc("Frame")
        .y_desc("Percentage Difference in Median Render Pass Time")
        .draw()
        .map_err(render_err)?;

    // Zero line first so the difference reads against it.
    chart
        .draw_series(LineSeries::new(
            vec![(x_lo - 2.0 * X_PAD, 0.0), (x_hi + 2.0 * X_PAD, 0.0)],
            &BLACK,
        ))
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            series.iter().map(|&(f, v)| (f as f64, v)),
            &BLUE,
        ))
        .map_err(render_err)?;

    if let Some(trend) = trend {
        chart
            .draw_series(LineSeries::new(
                series.iter().map(|&(f, _)| (f as f64, trend.eval(f as f64))),
                &RED,
            ))
            .map_err(render_err)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fit::polyfit;

    const W: u32 = 400;
    const H: u32 = 300;

    fn samples() -> Vec<Sample> {
        (1..20)
            .map(|i| Sample {
                frame: i,
                median: 10_000_000.0 + 100_000.0 * i as f64,
                minimum: 9_000_000.0,
                maximum: 12_000_000.0,
            })
            .collect()
    }

    #[test]
    fn overlay_draws_into_buffer() {
        let a = samples();
        let mut buf = vec![0u8; (W * H * 3) as usize];
        let root = BitMapBackend::with_buffer(&mut buf, (W, H)).into_drawing_area();
        draw_overlay(&root, &a, Some(&a), (5_000_000.0, 18_000_000.0)).unwrap();
    }

    #[test]
    fn difference_draws_into_buffer() {
        let series: Vec<(u32, f64)> =
            (1..20).map(|i| (i, (i as f64 * 0.7).sin() * 5.0)).collect();
        let xs: Vec<f64> = series.iter().map(|&(f, _)| f as f64).collect();
        let ys: Vec<f64> = series.iter().map(|&(_, v)| v).collect();
        let trend = polyfit(&xs, &ys, 3).unwrap();

        let mut buf = vec![0u8; (W * H * 3) as usize];
        let root = BitMapBackend::with_buffer(&mut buf, (W, H)).into_drawing_area();
        draw_difference(&root, &series, Some(&trend)).unwrap();
    }

    #[test]
    fn empty_series_is_rejected() {
        let mut buf = vec![0u8; (W * H * 3) as usize];
        let root = BitMapBackend::with_buffer(&mut buf, (W, H)).into_drawing_area();
        assert!(draw_difference(&root, &[], None).is_err());
    }
}
