use serde::{Deserialize, Serialize};

use crate::error::StarError;

/// All analysis parameters in one struct.
/// Serializable (for saving presets) and adjustable at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarConfig {
    // -- Grading (consumed by the caller, not the core) --
    /// Perfection at or above this is a perfect star.
    pub perfect_threshold: f64,
    /// Perfection at or above this (but below perfect) is a good star.
    pub good_threshold: f64,

    // -- Classification --
    /// Paths with fewer raw points are never star-like.
    pub min_points: usize,
    /// Fewest detected tips a star may have.
    pub star_points_min: usize,
    /// Most detected tips a star may have.
    pub star_points_max: usize,

    // -- Sampling --
    /// Keep every Nth raw point (plus the last one) before analysis.
    /// Larger = faster and less jitter-sensitive, but coarser tips.
    pub sample_rate: usize,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            perfect_threshold: 0.85,
            good_threshold: 0.65,
            min_points: 12,
            star_points_min: 4,
            star_points_max: 12,
            sample_rate: 4,
        }
    }
}

impl StarConfig {
    /// Check the parameters are mutually consistent.
    pub fn validate(&self) -> Result<(), StarError> {
        if self.sample_rate == 0 {
            return Err(StarError::InvalidConfig("sample_rate must be at least 1".into()));
        }
        if self.star_points_min > self.star_points_max {
            return Err(StarError::InvalidConfig(format!(
                "star_points_min ({}) exceeds star_points_max ({})",
                self.star_points_min, self.star_points_max,
            )));
        }
        for (name, value) in [
            ("perfect_threshold", self.perfect_threshold),
            ("good_threshold", self.good_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(StarError::InvalidConfig(format!(
                    "{name} must lie in [0, 1], got {value}"
                )));
            }
        }
        if self.good_threshold > self.perfect_threshold {
            return Err(StarError::InvalidConfig(format!(
                "good_threshold ({}) exceeds perfect_threshold ({})",
                self.good_threshold, self.perfect_threshold,
            )));
        }
        Ok(())
    }
}
