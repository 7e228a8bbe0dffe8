//! Least-squares polynomial fitting for the trend line.

use errors::*;
use nalgebra::{DMatrix, DVector};

/// A polynomial fitted over a normalized x interval.
///
/// Coefficients are stored in the normalized coordinate
/// `t = (x - mid) / half`; fitting a Vandermonde system on raw frame
/// indices (order 10^4) at degree 15 is hopelessly ill-conditioned.
#[derive(Debug, Clone)]
pub struct Polynomial {
    coeffs: Vec<f64>,
    mid: f64,
    half: f64,
}

impl Polynomial {
    /// Degree of the fitted polynomial.
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Evaluates the polynomial at original-scale `x`.
    pub fn eval(&self, x: f64) -> f64 {
        let t = (x - self.mid) / self.half;
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
    }
}

/// Fits a least-squares polynomial of the given degree through `(xs, ys)`.
/// The x values are normalized to [-1, 1] before building the Vandermonde
/// matrix, which is then solved by SVD.
pub fn polyfit(xs: &[f64], ys: &[f64], degree: usize) -> Result<Polynomial> {
    if xs.len() != ys.len() {
        bail!(
            "cannot fit: x and y lengths differ ({} vs {})",
            xs.len(),
            ys.len()
        );
    }
    if xs.is_empty() {
        bail!("cannot fit an empty series");
    }

    let min = xs.iter().cloned().fold(xs[0], f64::min);
    let max = xs.iter().cloned().fold(xs[0], f64::max);
    let mid = (min + max) / 2.0;
    let half = if max > min { (max - min) / 2.0 } else { 1.0 };

    let vandermonde = DMatrix::from_fn(xs.len(), degree + 1, |r, c| {
        ((xs[r] - mid) / half).powi(c as i32)
    });
    let rhs = DVector::from_column_slice(ys);

    let svd = vandermonde.svd(true, true);
    let solution = svd.solve(&rhs, 1.0e-12).map_err(Error::from)?;

    Ok(Polynomial {
        coeffs: solution.iter().cloned().collect(),
        mid: mid,
        half: half,
    })
}
