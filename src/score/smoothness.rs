//! Stroke straightness between tips.

use kurbo::Point;

use crate::geom::EPSILON;

/// Penalty per unit of mean normalized wobble.
const WOBBLE_PENALTY: f64 = 3.0;

/// How straight the stroke runs through its interior samples.
///
/// Each interior point is compared to the midpoint of its two neighbors;
/// the offset is normalized by the neighbor distance. Triples whose
/// neighbors coincide are skipped. Fewer than three points score 0.
pub fn smoothness(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let mut total = 0.0;
    let mut counted = 0usize;
    for w in points.windows(3) {
        let (prev, curr, next) = (w[0], w[1], w[2]);
        let span = prev.distance(next);
        if span > EPSILON {
            total += curr.distance(prev.midpoint(next)) / span;
            counted += 1;
        }
    }

    let wobble = if counted > 0 { total / counted as f64 } else { 0.0 };
    (1.0 - wobble * WOBBLE_PENALTY).max(0.0)
}
