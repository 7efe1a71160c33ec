mod common;

use common::*;
use proptest::prelude::*;
use starjudge::kurbo::Point;
use starjudge::{downsample, is_star_like, judge, perfection, Grade, StarConfig};

const CENTER: Point = Point::new(150.0, 150.0);

#[test]
fn regular_stars_reach_perfect_threshold() {
    let config = StarConfig::default();
    for tips in config.star_points_min..=config.star_points_max {
        let star = regular_star(tips, 100.0, 40.0, CENTER, 120);
        let verdict = judge(&star, &config);
        let score = verdict.perfection().expect("regular star rejected");
        assert!(score >= config.perfect_threshold, "{tips} tips scored {score:.3}");
        assert!(score <= 1.0);
        assert_eq!(Grade::of(&verdict, &config), Grade::Perfect);
    }
}

#[test]
fn five_point_star_without_sampling() {
    // Outer radius 100, inner 40, 16 points per edge, every point kept.
    let config = StarConfig {
        sample_rate: 1,
        ..StarConfig::default()
    };
    let star = regular_star(5, 100.0, 40.0, CENTER, 16);
    assert!(is_star_like(&star, &config));
    assert!(perfection(&star, &config) >= 0.7);
}

#[test]
fn perfect_sub_scores_for_regular_star() {
    let config = StarConfig::default();
    let verdict = judge(&regular_star(5, 100.0, 40.0, CENTER, 120), &config);
    let scores = verdict.breakdown.unwrap();
    assert!(scores.angular > 0.95, "{scores:?}");
    assert!(scores.radial > 0.95, "{scores:?}");
    assert_eq!(scores.closure, 1.0);
}

#[test]
fn hand_tremor_lowers_the_score() {
    let config = StarConfig::default();
    let clean = perfection(&regular_star(5, 100.0, 40.0, CENTER, 30), &config);
    let shaky = perfection(&wobbly_star(5, 30), &config);
    assert!(shaky < clean, "shaky {shaky:.3} vs clean {clean:.3}");
}

#[test]
fn open_stroke_loses_closure() {
    let config = StarConfig::default();
    let star = regular_star(5, 100.0, 40.0, CENTER, 120);
    // Stop drawing two edges short of the start.
    let open = &star[..star.len() - 240];
    let closed = judge(&star, &config).breakdown.unwrap();
    let verdict = judge(open, &config);
    if let Some(scores) = verdict.breakdown {
        assert!(scores.closure < closed.closure);
    }
}

fn transform(path: &[Point], scale: f64, dx: f64, dy: f64) -> Vec<Point> {
    path.iter()
        .map(|p| Point::new(p.x * scale + dx, p.y * scale + dy))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn short_paths_never_star_like(coords in prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 0..12)) {
        let path: Vec<Point> = coords.into_iter().map(|(x, y)| Point::new(x, y)).collect();
        let config = StarConfig::default();
        prop_assert!(!is_star_like(&path, &config));
        prop_assert_eq!(judge(&path, &config).breakdown, None);
    }

    #[test]
    fn resampling_at_stride_one_is_identity(
        coords in prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 0..200),
        stride in 1usize..10,
    ) {
        let path: Vec<Point> = coords.into_iter().map(|(x, y)| Point::new(x, y)).collect();
        let sampled = downsample(&path, stride);
        prop_assert!(sampled.len() <= path.len());
        prop_assert_eq!(downsample(&sampled, 1), sampled.clone());
        prop_assert_eq!(sampled.last(), path.last());
    }

    #[test]
    fn score_ignores_translation_and_scale(
        tips in prop::sample::select(vec![5usize, 7]),
        scale in 0.25f64..8.0,
        dx in -1e3f64..1e3,
        dy in -1e3f64..1e3,
    ) {
        let config = StarConfig::default();
        let star = wobbly_star(tips, 30);
        let moved = transform(&star, scale, dx, dy);

        let before = judge(&star, &config);
        let after = judge(&moved, &config);
        prop_assert!(before.star_like);
        prop_assert_eq!(after.star_like, before.star_like);
        let (a, b) = (before.perfection().unwrap(), after.perfection().unwrap());
        prop_assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
    }

    #[test]
    fn small_jitter_keeps_the_classification(
        jitter in prop::collection::vec((-0.5f64..0.5, -0.5f64..0.5), 1201),
    ) {
        let config = StarConfig::default();
        let star = regular_star(5, 100.0, 40.0, CENTER, 120);
        prop_assert_eq!(star.len(), jitter.len());
        let shaken: Vec<Point> = star
            .iter()
            .zip(&jitter)
            .map(|(p, (jx, jy))| Point::new(p.x + jx, p.y + jy))
            .collect();

        let verdict = judge(&shaken, &config);
        prop_assert!(verdict.star_like);
        let score = verdict.perfection().unwrap();
        prop_assert!((0.0..=1.0).contains(&score));
    }
}
