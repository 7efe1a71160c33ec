use kurbo::Point;

use crate::geom::EPSILON;

/// Penalty per unit of gap relative to the shape's reach.
const GAP_PENALTY: f64 = 2.0;

/// How well the stroke returns to where it started.
///
/// The start–end gap is normalized by the farthest sample's distance from
/// the centroid. A path with no extent scores 0.
pub fn closure(points: &[Point], centroid: Point) -> f64 {
    let (Some(&start), Some(&end)) = (points.first(), points.last()) else {
        return 0.0;
    };
    let reach = points
        .iter()
        .map(|p| p.distance(centroid))
        .fold(0.0, f64::max);
    if reach < EPSILON {
        return 0.0;
    }
    (1.0 - start.distance(end) / reach * GAP_PENALTY).max(0.0)
}
