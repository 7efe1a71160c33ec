//! Stride-based path downsampling.

use kurbo::Point;

/// Keep points at indices `0, stride, 2·stride, …` plus the final point.
///
/// The final point is appended when the stride skipped it, so closure
/// (start vs end) stays measurable. A zero stride behaves like 1.
pub fn downsample(path: &[Point], stride: usize) -> Vec<Point> {
    let stride = stride.max(1);
    let mut sampled: Vec<Point> = path.iter().step_by(stride).copied().collect();
    if let Some(&last) = path.last() {
        if (path.len() - 1) % stride != 0 {
            sampled.push(last);
        }
    }
    sampled
}
