//! Caller-side grading and attempt tallies.
//!
//! Nothing in the analysis core reads or writes this state; a front end
//! owns a [`Session`] and feeds it one [`Grade`] per finished gesture.

use std::fmt;

use crate::config::StarConfig;
use crate::Verdict;

/// User-facing category of one drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    NotAStar,
    Bad,
    Good,
    Perfect,
}

impl Grade {
    /// Map a verdict onto the configured thresholds.
    pub fn of(verdict: &Verdict, config: &StarConfig) -> Self {
        match verdict.perfection() {
            None => Grade::NotAStar,
            Some(p) if p >= config.perfect_threshold => Grade::Perfect,
            Some(p) if p >= config.good_threshold => Grade::Good,
            Some(_) => Grade::Bad,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Grade::NotAStar => "not a star",
            Grade::Bad => "bad star",
            Grade::Good => "good star",
            Grade::Perfect => "perfect star",
        };
        f.write_str(label)
    }
}

/// Running counters across gestures.
///
/// `attempts` counts drawings since the last perfect star and resets to 0
/// on a perfect one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    pub attempts: u32,
    pub perfect_stars: u32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, grade: Grade) {
        if grade == Grade::Perfect {
            self.perfect_stars += 1;
            self.attempts = 0;
        } else {
            self.attempts += 1;
        }
    }
}
