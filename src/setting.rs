//! Validated plot settings assembled from command-line arguments.

use errors::*;
use std::path::PathBuf;

/// What the configurable plotter should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Overlay the median series of each input trace.
    Overlay,

    /// Plot the percentage difference of the second trace against the first.
    Difference,
}

impl Mode {
    /// Parses the 0/1 flag used on the command line.
    pub fn from_flag(flag: u8) -> Result<Mode> {
        match flag {
            0 => Ok(Mode::Overlay),
            1 => Ok(Mode::Difference),
            other => bail!(ErrorKind::InvalidArgument(
                format!("mode must be 0 or 1, got {}", other),
            )),
        }
    }
}

/// Settings for one plotting run, validated at construction so the
/// mode/file coupling fails before any file is read.
#[derive(Debug)]
pub struct PlotSetting {
    /// Lower y-axis limit in nanoseconds (overlay mode).
    pub y_min: f64,

    /// Upper y-axis limit in nanoseconds (overlay mode).
    pub y_max: f64,

    /// First (baseline) trace.
    pub first: PathBuf,

    /// Optional second trace.
    pub second: Option<PathBuf>,

    /// Overlay or difference.
    pub mode: Mode,

    /// Trend-line degree when fitting is requested.
    pub fit_degree: Option<usize>,

    /// Output image path.
    pub output: PathBuf,
}

impl PlotSetting {
    /// Builds a setting. Difference mode without a second trace is a
    /// `MissingArgument` error; an inverted y-range is rejected as well.
    pub fn new(
        y_min: f64,
        y_max: f64,
        first: PathBuf,
        second: Option<PathBuf>,
        mode: Mode,
        fit_degree: Option<usize>,
        output: PathBuf,
    ) -> Result<PlotSetting> {
        if mode == Mode::Difference && second.is_none() {
            bail!(ErrorKind::MissingArgument(
                "difference mode needs a second trace file".into(),
            ));
        }
        if y_min >= y_max {
            bail!(ErrorKind::InvalidArgument(
                format!("y limits are inverted: {} >= {}", y_min, y_max),
            ));
        }
        Ok(PlotSetting {
            y_min: y_min,
            y_max: y_max,
            first: first,
            second: second,
            mode: mode,
            fit_degree: fit_degree,
            output: output,
        })
    }
}
