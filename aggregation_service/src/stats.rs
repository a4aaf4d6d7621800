//! Pure numeric kernels: arithmetic mean and Pearson correlation.
//!
//! Both functions are total — degenerate inputs (empty series, zero
//! variance) yield `0.0` rather than an error or a NaN, so callers never
//! see a non-finite value. Rejecting too-small inputs is the query
//! layer's job, not this module's.

use price_feed::models::sample::PricePoint;

/// Arithmetic mean of the `price` fields. An empty series averages to
/// `0.0` by policy.
pub fn average(points: &[PricePoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let sum: f64 = points.iter().map(|p| p.price).sum();
    sum / points.len() as f64
}

/// Pearson correlation coefficient over paired value sequences.
///
/// Uses the computational form
/// `r = (nΣxy − ΣxΣy) / (√(nΣx² − (Σx)²) · √(nΣy² − (Σy)²))`.
///
/// Returns `0.0` when the inputs are empty, of unequal length, or either
/// series has zero variance (constant prices). Never returns NaN or ±inf.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() != ys.len() || xs.is_empty() {
        return 0.0;
    }

    let n = xs.len() as f64;
    let sum_x: f64 = xs.iter().sum();
    let sum_y: f64 = ys.iter().sum();
    let sum_xy: f64 = xs.iter().zip(ys).map(|(x, y)| x * y).sum();
    let sum_x2: f64 = xs.iter().map(|x| x * x).sum();
    let sum_y2: f64 = ys.iter().map(|y| y * y).sum();

    let numerator = n * sum_xy - sum_x * sum_y;
    let denom_x = (n * sum_x2 - sum_x * sum_x).sqrt();
    let denom_y = (n * sum_y2 - sum_y * sum_y).sqrt();

    if denom_x == 0.0 || denom_y == 0.0 {
        return 0.0;
    }

    numerator / (denom_x * denom_y)
}
