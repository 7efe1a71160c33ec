//! Per-invocation derived data shared by classification and scoring.

use kurbo::Point;

use crate::geom::centroid;
use crate::polar::{to_polar, PolarPoint};
use crate::sample::downsample;
use crate::vertices;

/// Everything derived from one raw path: sampled points, their centroid,
/// polar form, and detected tips. Built fresh for every call.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub sampled: Vec<Point>,
    pub centroid: Point,
    pub polar: Vec<PolarPoint>,
    pub vertices: Vec<PolarPoint>,
}

impl Analysis {
    /// Sample `path` with `stride` and derive the polar set and tips.
    ///
    /// Returns `None` when nothing survives sampling (empty path).
    pub fn new(path: &[Point], stride: usize) -> Option<Self> {
        let sampled = downsample(path, stride);
        if sampled.is_empty() {
            return None;
        }
        let centroid = centroid(&sampled);
        let polar = to_polar(&sampled, centroid);
        let vertices = vertices::detect(&polar);
        Some(Self {
            sampled,
            centroid,
            polar,
            vertices,
        })
    }

    /// Tip angle gaps in angular order (see [`vertices::angular_gaps`]).
    pub fn vertex_gaps(&self) -> Vec<f64> {
        vertices::angular_gaps(&self.vertices)
    }
}
