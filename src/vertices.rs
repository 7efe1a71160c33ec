use std::f64::consts::TAU;

use crate::geom::angular_separation;
use crate::polar::{sorted_by_angle, PolarPoint};

/// Tips closer than this (radians, shorter arc) are merged.
pub const MIN_VERTEX_SEPARATION: f64 = 0.2;

/// Smallest half-window used for the local-maximum test.
const MIN_WINDOW: usize = 3;

/// Detect star tips: local radial maxima in angle order, deduplicated.
///
/// Each point is compared against `max(3, n / 30)` neighbors on each side
/// of the angle-sorted sequence, wrapping around. A point is rejected only
/// if some neighbor is strictly farther from the centroid, so ties pass.
/// Surviving candidates within `MIN_VERTEX_SEPARATION` of an already
/// retained tip replace it when farther out, and are dropped otherwise.
pub fn detect(polar: &[PolarPoint]) -> Vec<PolarPoint> {
    let sorted = sorted_by_angle(polar);
    if sorted.is_empty() {
        return vec![];
    }

    let window = (sorted.len() / 30).max(MIN_WINDOW);
    let candidates = sorted
        .iter()
        .enumerate()
        .filter(|&(i, _)| is_local_max(&sorted, i, window))
        .map(|(_, p)| *p);

    dedupe(candidates)
}

fn is_local_max(sorted: &[PolarPoint], i: usize, window: usize) -> bool {
    let n = sorted.len();
    let d = sorted[i].distance;
    (1..=window).all(|j| {
        let prev = (i + n - j % n) % n;
        let next = (i + j) % n;
        d >= sorted[prev].distance && d >= sorted[next].distance
    })
}

fn dedupe(candidates: impl Iterator<Item = PolarPoint>) -> Vec<PolarPoint> {
    let mut kept: Vec<PolarPoint> = Vec::new();
    for candidate in candidates {
        let close = kept
            .iter_mut()
            .find(|v| angular_separation(v.angle, candidate.angle) < MIN_VERTEX_SEPARATION);
        match close {
            Some(existing) => {
                if candidate.distance > existing.distance {
                    *existing = candidate;
                }
            }
            None => kept.push(candidate),
        }
    }
    kept
}

/// Gaps between consecutive tips in angle order.
///
/// The last gap wraps from the largest angle back to the smallest through
/// 2π, so the gaps of two or more tips sum to a full turn. A single tip
/// yields one zero gap.
pub fn angular_gaps(vertices: &[PolarPoint]) -> Vec<f64> {
    let mut angles: Vec<f64> = vertices.iter().map(|v| v.angle).collect();
    angles.sort_by(f64::total_cmp);

    let n = angles.len();
    (0..n)
        .map(|i| {
            let diff = angles[(i + 1) % n] - angles[i];
            if diff < 0.0 {
                diff + TAU
            } else {
                diff
            }
        })
        .collect()
}
