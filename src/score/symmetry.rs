//! Angular and radial symmetry of the detected tips.

use crate::geom::mean_relative_deviation;
use crate::polar::PolarPoint;

/// Penalty per unit of mean relative deviation.
const DEVIATION_PENALTY: f64 = 1.5;

/// How evenly the tips are spaced around the centroid.
///
/// `gaps` are the consecutive tip-angle gaps (wrapping). No tips, or a
/// zero mean gap, scores 0.
pub fn angular(gaps: &[f64]) -> f64 {
    deviation_score(gaps)
}

/// How equally far the tips are from the centroid.
pub fn radial(vertices: &[PolarPoint]) -> f64 {
    let distances: Vec<f64> = vertices.iter().map(|v| v.distance).collect();
    deviation_score(&distances)
}

fn deviation_score(values: &[f64]) -> f64 {
    mean_relative_deviation(values)
        .map(|deviation| (1.0 - deviation * DEVIATION_PENALTY).max(0.0))
        .unwrap_or(0.0)
}
