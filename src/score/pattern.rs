//! Peak/valley alternation of the radial profile.

use std::f64::consts::TAU;

use crate::geom::angular_separation;
use crate::polar::PolarPoint;

/// Fixed angular probes around the centroid (every 5°).
const PROBES: usize = 72;
/// Fewer tips than this carry no meaningful alternation.
const MIN_TIPS: usize = 4;

/// Fraction of the expected peak/valley alternations actually observed.
///
/// The radial distance is probed at `PROBES` evenly spaced angles, each
/// taking the distance of the sample nearest in angle. A star with `n`
/// tips should alternate about `2n` times; the ratio is capped at 1.
pub fn pattern(polar: &[PolarPoint], vertex_count: usize) -> f64 {
    if vertex_count < MIN_TIPS || polar.is_empty() {
        return 0.0;
    }

    let profile: Vec<f64> = (0..PROBES)
        .map(|i| nearest_distance(polar, TAU * i as f64 / PROBES as f64))
        .collect();

    let expected = (vertex_count * 2) as f64;
    (count_alternations(&profile) as f64 / expected).min(1.0)
}

fn nearest_distance(polar: &[PolarPoint], angle: f64) -> f64 {
    let mut best = f64::INFINITY;
    let mut distance = 0.0;
    for p in polar {
        let sep = angular_separation(p.angle, angle);
        if sep < best {
            best = sep;
            distance = p.distance;
        }
    }
    distance
}

/// Count switches between strict peaks and strict valleys, in order.
fn count_alternations(profile: &[f64]) -> usize {
    let n = profile.len();
    let mut alternations = 0;
    let mut last_was_peak: Option<bool> = None;

    for (i, &curr) in profile.iter().enumerate() {
        let prev = profile[(i + n - 1) % n];
        let next = profile[(i + 1) % n];
        let is_peak = curr > prev && curr > next;
        let is_valley = curr < prev && curr < next;
        if !(is_peak || is_valley) {
            continue;
        }
        if last_was_peak.is_some_and(|last| last != is_peak) {
            alternations += 1;
        }
        last_was_peak = Some(is_peak);
    }
    alternations
}
