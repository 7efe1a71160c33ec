//! starjudge: freehand pointer path → star classification and perfection score.
//!
//! Decides whether a hand-drawn stroke resembles a star polygon and, if so,
//! how close it is to a regular one. Works on noisy, variable-length input
//! with no known tip count, orientation, or scale, using only centroid-
//! relative geometry: no templates, no training.
//!
//! # Example
//!
//! ```
//! use starjudge::{judge, StarConfig};
//! use starjudge::kurbo::Point;
//!
//! let config = StarConfig::default();
//! let scribble: Vec<Point> = (0..40).map(|i| Point::new(i as f64, 0.0)).collect();
//! let verdict = judge(&scribble, &config);
//! assert!(!verdict.star_like);
//! assert_eq!(verdict.perfection(), None);
//! ```
//!
//! Every call is a pure computation over its input; nothing is cached or
//! shared between calls.

#![forbid(unsafe_code)]

mod analysis;
mod classify;
mod config;
mod geom;
mod polar;
mod sample;
mod topology;
mod vertices;

pub mod error;
pub mod input;
pub mod score;
pub mod session;

// Re-export kurbo so callers build paths from the same `Point` type.
pub use kurbo;

pub use analysis::Analysis;
pub use classify::{classify, is_star_like, StarFeatures};
pub use config::StarConfig;
pub use error::StarError;
pub use polar::PolarPoint;
pub use sample::downsample;
pub use score::{perfection, ScoreBreakdown};
pub use session::{Grade, Session};
pub use topology::has_self_intersections;

use kurbo::Point;
use rayon::prelude::*;

/// Outcome of judging one gesture.
///
/// `breakdown` is present exactly when `star_like` is true.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub star_like: bool,
    pub breakdown: Option<ScoreBreakdown>,
}

impl Verdict {
    /// A "not a star" verdict.
    pub fn rejected() -> Self {
        Self {
            star_like: false,
            breakdown: None,
        }
    }

    /// Perfection in [0, 1], or `None` when not star-like.
    pub fn perfection(&self) -> Option<f64> {
        self.breakdown.map(|b| b.total())
    }
}

/// Full pipeline: classify the path, then score it if it is a star.
///
/// The sampled points, polar set, and tips are derived once and shared
/// by both stages.
pub fn judge(path: &[Point], config: &StarConfig) -> Verdict {
    if path.len() < config.min_points {
        tracing::trace!(points = path.len(), min = config.min_points, "path too short");
        return Verdict::rejected();
    }
    let Some(analysis) = Analysis::new(path, config.sample_rate) else {
        return Verdict::rejected();
    };
    if !classify(&analysis, config) {
        return Verdict::rejected();
    }
    Verdict {
        star_like: true,
        breakdown: Some(score::breakdown(&analysis)),
    }
}

/// Judge independent paths in parallel. Output order matches input order.
pub fn judge_all(paths: &[Vec<Point>], config: &StarConfig) -> Vec<Verdict> {
    paths.par_iter().map(|path| judge(path, config)).collect()
}
