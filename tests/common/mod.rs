//! Synthetic strokes shared by the integration tests.

#![allow(dead_code)]

use std::f64::consts::{FRAC_PI_2, PI};

use starjudge::kurbo::Point;

/// Alternating outer/inner corners of a regular star, first tip pointing up
/// (in y-down screen space).
pub fn star_corners(tips: usize, outer: f64, inner: f64, center: Point) -> Vec<Point> {
    (0..2 * tips)
        .map(|k| {
            let angle = -FRAC_PI_2 + PI * k as f64 / tips as f64;
            let radius = if k % 2 == 0 { outer } else { inner };
            Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

/// Straight strokes through `corners` with `steps` points per edge,
/// ending exactly on the last corner.
pub fn polyline(corners: &[Point], steps: usize) -> Vec<Point> {
    let mut points = Vec::with_capacity((corners.len() - 1) * steps + 1);
    for pair in corners.windows(2) {
        for s in 0..steps {
            points.push(pair[0].lerp(pair[1], s as f64 / steps as f64));
        }
    }
    points.extend(corners.last().copied());
    points
}

/// Closed outline of a regular star (start == end).
pub fn regular_star(tips: usize, outer: f64, inner: f64, center: Point, steps: usize) -> Vec<Point> {
    let mut corners = star_corners(tips, outer, inner, center);
    corners.push(corners[0]);
    polyline(&corners, steps)
}

/// Five tips on a circle (angles in degrees), drawn in pentagram stroke
/// order 0 → 2 → 4 → 1 → 3 → 0.
pub fn pentagram(tip_degrees: [f64; 5], radius: f64, center: Point, steps: usize) -> Vec<Point> {
    let tips: Vec<Point> = tip_degrees
        .iter()
        .map(|d| {
            let a = d.to_radians();
            Point::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect();
    let order: Vec<Point> = [0, 2, 4, 1, 3, 0].iter().map(|&i| tips[i]).collect();
    polyline(&order, steps)
}

/// A regular-ish star with displaced corners and a slight hand tremor.
pub fn wobbly_star(tips: usize, steps: usize) -> Vec<Point> {
    let mut corners: Vec<Point> = star_corners(tips, 100.0, 40.0, Point::new(150.0, 150.0))
        .into_iter()
        .enumerate()
        .map(|(k, p)| {
            let k = k as f64;
            Point::new(p.x + 3.0 * (1.7 * k + 0.3).sin(), p.y + 3.0 * (2.3 * k + 1.1).cos())
        })
        .collect();
    corners.push(corners[0]);
    polyline(&corners, steps)
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            let i = i as f64;
            Point::new(p.x + 0.3 * (0.37 * i).sin(), p.y + 0.3 * (0.53 * i).cos())
        })
        .collect()
}

/// A horizontal stroke traced back and forth three times.
pub fn back_and_forth_line() -> Vec<Point> {
    let mut points = Vec::new();
    for _ in 0..3 {
        points.extend((0..=50).map(|i| Point::new(50.0 + 4.0 * i as f64, 100.0)));
        points.extend((0..=50).rev().map(|i| Point::new(50.0 + 4.0 * i as f64, 100.0)));
    }
    points
}

/// Closed circle sampled at `n + 1` points.
pub fn circle(n: usize) -> Vec<Point> {
    (0..=n)
        .map(|i| {
            let a = 2.0 * PI * i as f64 / n as f64;
            Point::new(150.0 + 100.0 * a.cos(), 150.0 + 100.0 * a.sin())
        })
        .collect()
}
