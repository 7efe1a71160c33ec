//! Self-intersection detection for interlaced ("cross") star strokes.

use kurbo::Point;

/// Crossings needed before a path counts as self-intersecting.
const MIN_CROSSINGS: usize = 2;

/// Whether the path crosses itself at least twice.
///
/// Segments join every `max(1, n / 40)`-th point. Only segment pairs at
/// least two strides apart are tested, so neighbors sharing an endpoint
/// never count. Stops at the second crossing.
pub fn has_self_intersections(points: &[Point]) -> bool {
    let n = points.len();
    let stride = (n / 40).max(1);
    let mut crossings = 0;

    for i in (0..n.saturating_sub(stride)).step_by(stride) {
        let (a1, a2) = (points[i], points[i + stride]);
        for j in (i + 2 * stride..n.saturating_sub(stride)).step_by(stride) {
            if segments_intersect(a1, a2, points[j], points[j + stride]) {
                crossings += 1;
                if crossings >= MIN_CROSSINGS {
                    return true;
                }
            }
        }
    }
    false
}

/// Orientation test for segments `a1–a2` and `b1–b2`.
///
/// Zero-length segments never intersect.
pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    if a1 == a2 || b1 == b2 {
        return false;
    }
    ccw(a1, b1, b2) != ccw(a2, b1, b2) && ccw(a1, a2, b1) != ccw(a1, a2, b2)
}

/// True when `p1 → p2 → p3` turns counter-clockwise (y-up).
fn ccw(p1: Point, p2: Point, p3: Point) -> bool {
    (p3.y - p1.y) * (p2.x - p1.x) > (p2.y - p1.y) * (p3.x - p1.x)
}
