//! Centroid-relative polar coordinates.

use kurbo::Point;

/// A sampled point expressed relative to the centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    pub point: Point,
    /// atan2 angle in (-π, π].
    pub angle: f64,
    /// Radial distance from the centroid (≥ 0).
    pub distance: f64,
}

/// Map each point to its polar form around `centroid`, preserving order.
pub fn to_polar(points: &[Point], centroid: Point) -> Vec<PolarPoint> {
    points
        .iter()
        .map(|&point| {
            let offset = point - centroid;
            PolarPoint {
                point,
                angle: offset.atan2(),
                distance: offset.hypot(),
            }
        })
        .collect()
}

/// Copy of `polar` sorted by ascending angle (stable for equal angles).
pub fn sorted_by_angle(polar: &[PolarPoint]) -> Vec<PolarPoint> {
    let mut sorted = polar.to_vec();
    sorted.sort_by(|a, b| a.angle.total_cmp(&b.angle));
    sorted
}
