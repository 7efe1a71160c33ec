//! Star / not-star decision.
//!
//! No single signal is reliable on hand-drawn input, so a path is accepted
//! when any one of three signatures is present: interlaced strokes
//! (self-intersection), angularly regular tips with real radial contrast,
//! or a clearly alternating peak/valley radial profile.

use kurbo::Point;

use crate::analysis::Analysis;
use crate::config::StarConfig;
use crate::geom::{mean, EPSILON};
use crate::polar::sorted_by_angle;
use crate::topology::has_self_intersections;

/// Angle variance (radians) below which tips count as regularly spaced.
const MAX_ANGLE_VARIANCE: f64 = 0.6;
/// Radial contrast above which the outline counts as spiky.
const MIN_RADIAL_RANGE_RATIO: f64 = 0.2;
/// Half-width of the peak/valley window, in angle-sorted samples.
const PEAK_WINDOW: usize = 5;

/// The signals the decision is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarFeatures {
    pub vertex_count: usize,
    pub self_intersecting: bool,
    /// Mean absolute deviation of tip gaps from their mean.
    /// Infinite when there are no tips.
    pub angle_variance: f64,
    /// `(max - min) / mean` of all sampled radial distances.
    pub radial_range_ratio: f64,
    pub peaks: usize,
    pub valleys: usize,
}

impl StarFeatures {
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let distances: Vec<f64> = sorted_by_angle(&analysis.polar)
            .iter()
            .map(|p| p.distance)
            .collect();
        let (peaks, valleys) = peak_valley_counts(&distances);

        Self {
            vertex_count: analysis.vertices.len(),
            self_intersecting: has_self_intersections(&analysis.sampled),
            angle_variance: angle_variance(&analysis.vertex_gaps()),
            radial_range_ratio: radial_range_ratio(&distances),
            peaks,
            valleys,
        }
    }

    /// Whether any of the three star signatures is present.
    pub fn accepts(&self) -> bool {
        let half = self.vertex_count as f64 / 2.0;
        self.self_intersecting
            || (self.angle_variance < MAX_ANGLE_VARIANCE
                && self.radial_range_ratio > MIN_RADIAL_RANGE_RATIO)
            || (self.peaks as f64 >= half && self.valleys as f64 >= half)
    }
}

/// Whether a raw pointer path resembles a star.
///
/// Paths shorter than `config.min_points` are rejected without analysis.
pub fn is_star_like(path: &[Point], config: &StarConfig) -> bool {
    if path.len() < config.min_points {
        tracing::trace!(points = path.len(), min = config.min_points, "path too short");
        return false;
    }
    match Analysis::new(path, config.sample_rate) {
        Some(analysis) => classify(&analysis, config),
        None => false,
    }
}

/// Decide on an already-derived analysis.
pub fn classify(analysis: &Analysis, config: &StarConfig) -> bool {
    let count = analysis.vertices.len();
    if count < config.star_points_min || count > config.star_points_max {
        tracing::debug!(
            vertices = count,
            min = config.star_points_min,
            max = config.star_points_max,
            "tip count out of range"
        );
        return false;
    }

    let features = StarFeatures::from_analysis(analysis);
    let accepted = features.accepts();
    tracing::debug!(
        vertices = features.vertex_count,
        self_intersecting = features.self_intersecting,
        angle_variance = features.angle_variance,
        radial_range_ratio = features.radial_range_ratio,
        peaks = features.peaks,
        valleys = features.valleys,
        accepted,
        "classified path"
    );
    accepted
}

fn angle_variance(gaps: &[f64]) -> f64 {
    match mean(gaps) {
        Some(avg) => gaps.iter().map(|g| (g - avg).abs()).sum::<f64>() / gaps.len() as f64,
        None => f64::INFINITY,
    }
}

fn radial_range_ratio(distances: &[f64]) -> f64 {
    let Some(avg) = mean(distances) else {
        return 0.0;
    };
    if avg < EPSILON {
        return 0.0;
    }
    let max = distances.iter().copied().fold(f64::MIN, f64::max);
    let min = distances.iter().copied().fold(f64::MAX, f64::min);
    (max - min) / avg
}

/// Count strict peaks and valleys in a circular radial profile.
///
/// A sample is a peak when it is strictly greater than every other sample
/// within `PEAK_WINDOW` positions on either side (wrapping), a valley when
/// strictly less than all of them.
fn peak_valley_counts(distances: &[f64]) -> (usize, usize) {
    let n = distances.len();
    let mut peaks = 0;
    let mut valleys = 0;

    for (i, &d) in distances.iter().enumerate() {
        let neighbors = (1..=PEAK_WINDOW)
            .flat_map(|k| [(i + n - k % n) % n, (i + k) % n])
            .filter(|&j| j != i);
        let mut is_peak = true;
        let mut is_valley = true;
        for j in neighbors {
            if d <= distances[j] {
                is_peak = false;
            }
            if d >= distances[j] {
                is_valley = false;
            }
        }
        if is_peak {
            peaks += 1;
        }
        if is_valley {
            valleys += 1;
        }
    }
    (peaks, valleys)
}
