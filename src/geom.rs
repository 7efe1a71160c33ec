//! Shared geometry utilities.

use std::f64::consts::TAU;

use kurbo::Point;

/// Denominators below this are treated as zero.
pub const EPSILON: f64 = 1e-9;

/// Centroid (mean of all points).
///
/// Callers must not pass an empty slice; the result would be NaN.
pub fn centroid(points: &[Point]) -> Point {
    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|p| p.x).sum();
    let sum_y: f64 = points.iter().map(|p| p.y).sum();
    Point::new(sum_x / n, sum_y / n)
}

/// Angular distance between two angles, measured on the shorter arc.
///
/// Result lies in [0, π] for any pair of finite angles.
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(TAU);
    diff.min(TAU - diff)
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean of `|v - avg| / avg` over all values.
///
/// `None` when the slice is empty or its mean is (near) zero.
pub fn mean_relative_deviation(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    if avg.abs() < EPSILON {
        return None;
    }
    let total: f64 = values.iter().map(|v| (v - avg).abs() / avg).sum();
    Some(total / values.len() as f64)
}
