//! JSON path documents.
//!
//! A document is either one path or an array of paths. Points may be
//! written as `{"x": 1.0, "y": 2.0}` or as `[1.0, 2.0]`, mixed freely.

use std::fs;
use std::path::Path;

use kurbo::Point;
use serde::Deserialize;

use crate::error::StarError;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPoint {
    Object { x: f64, y: f64 },
    Pair([f64; 2]),
}

impl From<RawPoint> for Point {
    fn from(raw: RawPoint) -> Self {
        match raw {
            RawPoint::Object { x, y } => Point::new(x, y),
            RawPoint::Pair([x, y]) => Point::new(x, y),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Many(Vec<Vec<RawPoint>>),
    One(Vec<RawPoint>),
}

/// Parse a path document from a JSON string.
pub fn parse_paths(json: &str) -> Result<Vec<Vec<Point>>, StarError> {
    let paths: Vec<Vec<Point>> = match serde_json::from_str::<Document>(json)? {
        Document::Many(paths) => paths
            .into_iter()
            .map(|path| path.into_iter().map(Point::from).collect())
            .collect(),
        Document::One(path) => vec![path.into_iter().map(Point::from).collect()],
    };
    if paths.is_empty() {
        return Err(StarError::NoPaths);
    }
    Ok(paths)
}

/// Read and parse a path document from disk.
pub fn load_paths(file: &Path) -> Result<Vec<Vec<Point>>, StarError> {
    let json = fs::read_to_string(file)?;
    parse_paths(&json)
}
