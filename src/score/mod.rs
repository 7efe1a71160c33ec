//! Perfection scoring for paths already classified as stars.
//!
//! Five independent sub-scores, each in [0, 1], combined with fixed
//! weights that sum to 1: angular symmetry, radial symmetry, smoothness,
//! closure, and peak/valley alternation. All are centroid-relative ratios,
//! so the result does not change under translation or uniform scaling.

mod closure;
mod pattern;
mod smoothness;
mod symmetry;

use std::fmt;

use kurbo::Point;

use crate::analysis::Analysis;
use crate::config::StarConfig;

pub const ANGULAR_WEIGHT: f64 = 0.25;
pub const RADIAL_WEIGHT: f64 = 0.20;
pub const SMOOTHNESS_WEIGHT: f64 = 0.30;
pub const CLOSURE_WEIGHT: f64 = 0.10;
pub const PATTERN_WEIGHT: f64 = 0.15;

/// The five sub-scores behind a perfection value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Evenness of tip spacing around the centroid.
    pub angular: f64,
    /// Equality of tip distances from the centroid.
    pub radial: f64,
    /// Straightness of the stroke between samples.
    pub smoothness: f64,
    /// How close the end returns to the start.
    pub closure: f64,
    /// Observed vs expected peak/valley alternations.
    pub pattern: f64,
}

impl ScoreBreakdown {
    /// Weighted perfection score in [0, 1].
    pub fn total(&self) -> f64 {
        self.angular * ANGULAR_WEIGHT
            + self.radial * RADIAL_WEIGHT
            + self.smoothness * SMOOTHNESS_WEIGHT
            + self.closure * CLOSURE_WEIGHT
            + self.pattern * PATTERN_WEIGHT
    }
}

/// Compute all sub-scores from an analysis.
pub fn breakdown(analysis: &Analysis) -> ScoreBreakdown {
    let scores = ScoreBreakdown {
        angular: symmetry::angular(&analysis.vertex_gaps()),
        radial: symmetry::radial(&analysis.vertices),
        smoothness: smoothness::smoothness(&analysis.sampled),
        closure: closure::closure(&analysis.sampled, analysis.centroid),
        pattern: pattern::pattern(&analysis.polar, analysis.vertices.len()),
    };
    tracing::debug!(
        angular = scores.angular,
        radial = scores.radial,
        smoothness = scores.smoothness,
        closure = scores.closure,
        pattern = scores.pattern,
        total = scores.total(),
        "scored path"
    );
    scores
}

/// Perfection of a raw path, assumed to be star-like already.
///
/// Only meaningful after [`crate::is_star_like`] accepted the path.
/// An empty path scores 0.
pub fn perfection(path: &[Point], config: &StarConfig) -> f64 {
    Analysis::new(path, config.sample_rate)
        .map(|analysis| breakdown(&analysis).total())
        .unwrap_or(0.0)
}

impl fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = [
            ("Angular", self.angular, ANGULAR_WEIGHT),
            ("Radial", self.radial, RADIAL_WEIGHT),
            ("Smoothness", self.smoothness, SMOOTHNESS_WEIGHT),
            ("Closure", self.closure, CLOSURE_WEIGHT),
            ("Pattern", self.pattern, PATTERN_WEIGHT),
        ];
        for (name, score, weight) in rows {
            writeln!(f, "  {name:<12}{score:.3}  \u{00d7}{weight:.2}")?;
        }
        writeln!(f, "  {:<12}{:.3}", "Perfection", self.total())
    }
}
