use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::test::{
    all_layouts, assert_pst_invariants, brute_force_3_sided, brute_force_4_sided, random_points,
    skewed_points, sorted, Rect,
};
use crate::{build, BuildStrategy, Point, PrioritySearchTree, PstError};

fn sample_points() -> Vec<Point> {
    vec![
        Point::new(-1.0, -1.0),
        Point::new(0.0, 0.0),
        Point::new(1.0, 5.0),
        Point::new(2.0, -2.0),
        Point::new(-3.0, 3.0),
    ]
}

#[test]
fn left_most_ne_on_sample() {
    for (strategy, tree) in all_layouts(&sample_points()) {
        assert_eq!(
            tree.left_most_ne(-2.0, -1.0).unwrap(),
            Point::new(-1.0, -1.0),
            "{:?}",
            strategy
        );
    }
}

#[test]
fn highest_3_sided_on_sample() {
    let points = vec![
        Point::new(1.0, 1.0),
        Point::new(2.0, 5.0),
        Point::new(3.0, 2.0),
        Point::new(4.0, 0.0),
    ];
    for (strategy, tree) in all_layouts(&points) {
        assert_eq!(
            tree.highest_3_sided(2.0, 4.0, 1.0).unwrap(),
            Point::new(2.0, 5.0),
            "{:?}",
            strategy
        );
        assert_eq!(
            tree.highest_3_sided(3.0, 4.0, 0.0).unwrap(),
            Point::new(3.0, 2.0),
            "{:?}",
            strategy
        );
    }
}

#[test]
fn empty_tree_errors() {
    for (strategy, tree) in all_layouts(&[]) {
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert!(tree.points().is_empty());
        assert_eq!(
            tree.enumerate_3_sided(0.0, 1.0, 0.0),
            Err(PstError::EmptyTree),
            "{:?}",
            strategy
        );
        assert_eq!(
            tree.enumerate_4_sided(0.0, 1.0, 0.0, 1.0),
            Err(PstError::EmptyTree)
        );
        assert_eq!(tree.min_x_in_range(0.0, 1.0, 0.0), Err(PstError::EmptyTree));
        assert_eq!(tree.max_y_in_range(0.0, 1.0, 0.0), Err(PstError::EmptyTree));
        assert_eq!(tree.left_most_ne(0.0, 0.0), Err(PstError::EmptyTree));
        assert_eq!(tree.highest_ne(0.0, 0.0), Err(PstError::EmptyTree));
        assert_eq!(
            tree.highest_3_sided(0.0, 1.0, 0.0),
            Err(PstError::EmptyTree)
        );
        assert_eq!(tree.min_x(), Err(PstError::EmptyTree));
        assert_eq!(tree.max_y(), Err(PstError::EmptyTree));
    }
}

#[test]
fn single_point() {
    let point = Point::new(3.0, 4.0);
    for (strategy, tree) in all_layouts(&[point]) {
        assert_eq!(tree.height(), 1);
        assert_eq!(
            tree.enumerate_3_sided(3.0, 3.0, 4.0).unwrap(),
            vec![point],
            "{:?}",
            strategy
        );
        assert!(tree.enumerate_3_sided(3.5, 9.0, 0.0).unwrap().is_empty());
        assert_eq!(tree.highest_ne(0.0, 0.0).unwrap(), point);
        assert_eq!(
            tree.left_most_ne(3.5, 0.0),
            Err(PstError::NoPointsInRange)
        );
    }
}

#[test]
fn no_points_in_range() {
    let points: Vec<Point> = (0..=10)
        .map(|i| Point::new(i as f64, (i * 7 % 11) as f64))
        .collect();
    let tree = build(points, BuildStrategy::ArrayRecursive).unwrap();
    assert_eq!(
        tree.min_x_in_range(100.0, 200.0, f64::NEG_INFINITY),
        Err(PstError::NoPointsInRange)
    );
    assert_eq!(
        tree.max_y_in_range(0.0, 10.0, 11.0),
        Err(PstError::NoPointsInRange)
    );
    assert_eq!(
        tree.highest_3_sided(-5.0, -1.0, 0.0),
        Err(PstError::NoPointsInRange)
    );
    assert_eq!(tree.enumerate_3_sided(100.0, 200.0, 0.0), Ok(vec![]));
}

#[test]
fn round_trip_through_unbounded_query() {
    let points = random_points(300, 3);
    for (strategy, tree) in all_layouts(&points) {
        let found = tree
            .enumerate_4_sided(
                f64::NEG_INFINITY,
                f64::INFINITY,
                f64::NEG_INFINITY,
                f64::INFINITY,
            )
            .unwrap();
        assert_eq!(sorted(found), sorted(points.clone()), "{:?}", strategy);
        assert_eq!(sorted(tree.points()), sorted(points.clone()));
    }
}

#[test]
fn queries_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(42);
    for seed in 0..8 {
        let n = rng.gen_range(1..400);
        let points = random_points(n, seed);
        let layouts = all_layouts(&points);

        for _ in 0..60 {
            let a = rng.gen_range(-30.0..600.0);
            let b = rng.gen_range(-30.0..600.0);
            let (min_x, max_x) = if a < b { (a, b) } else { (b, a) };
            let min_y = rng.gen_range(-15.0..300.0);
            let max_y = min_y + rng.gen_range(0.0..150.0);

            let expected_3 = brute_force_3_sided(&points, min_x, max_x, min_y);
            let expected_4 = brute_force_4_sided(&points, min_x, max_x, min_y, max_y);
            let highest = expected_3
                .iter()
                .copied()
                .max_by(|a, b| a.cmp_by_y(b))
                .ok_or(PstError::NoPointsInRange);
            let north_east: Vec<Point> = points
                .iter()
                .copied()
                .filter(|p| p.x() >= min_x && p.y() >= min_y)
                .collect();
            let left_most = north_east
                .iter()
                .copied()
                .min_by(|a, b| a.cmp_by_x(b))
                .ok_or(PstError::NoPointsInRange);
            let highest_ne = north_east
                .iter()
                .copied()
                .max_by(|a, b| a.cmp_by_y(b))
                .ok_or(PstError::NoPointsInRange);

            for (strategy, tree) in &layouts {
                let found = tree.enumerate_3_sided(min_x, max_x, min_y).unwrap();
                assert_eq!(sorted(found), expected_3, "{:?} 3-sided", strategy);
                let found = tree.enumerate_4_sided(min_x, max_x, min_y, max_y).unwrap();
                assert_eq!(sorted(found), expected_4, "{:?} 4-sided", strategy);
                assert_eq!(
                    tree.highest_3_sided(min_x, max_x, min_y),
                    highest,
                    "{:?} highest 3-sided",
                    strategy
                );
                assert_eq!(
                    tree.left_most_ne(min_x, min_y),
                    left_most,
                    "{:?} left-most NE",
                    strategy
                );
                assert_eq!(
                    tree.highest_ne(min_x, min_y),
                    highest_ne,
                    "{:?} highest NE",
                    strategy
                );
                assert_eq!(
                    tree.max_y_in_range(min_x, max_x, min_y),
                    highest.clone().map(|p| p.y()),
                    "{:?} max y in range",
                    strategy
                );
            }
        }
    }
}

#[test]
fn range_extremes_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(9);
    let points = random_points(250, 11);
    for strategy in [
        BuildStrategy::ArrayRecursive,
        BuildStrategy::ArrayIterative,
        BuildStrategy::Pointer,
    ] {
        let tree = build(points.clone(), strategy).unwrap();
        for _ in 0..100 {
            let min_x = rng.gen_range(-25.0..360.0);
            let max_x = min_x + rng.gen_range(0.0..120.0);
            let min_y = rng.gen_range(-12.0..180.0);
            let region = brute_force_3_sided(&points, min_x, max_x, min_y);

            let expect = |f: fn(&[Point]) -> Option<f64>| f(&region).ok_or(PstError::NoPointsInRange);
            assert_eq!(
                tree.min_x_in_range(min_x, max_x, min_y),
                expect(|r| r.first().map(|p| p.x()))
            );
            assert_eq!(
                tree.max_x_in_range(min_x, max_x, min_y),
                expect(|r| r.last().map(|p| p.x()))
            );
            assert_eq!(
                tree.min_y_in_range(min_x, max_x, min_y),
                expect(|r| r.iter().map(|p| p.y()).reduce(f64::min))
            );
            assert_eq!(
                tree.max_y_in_range(min_x, max_x, min_y),
                expect(|r| r.iter().map(|p| p.y()).reduce(f64::max))
            );
        }
    }
}

#[test]
fn whole_tree_extremes() {
    let points = random_points(120, 5);
    let min_x = points.iter().map(|p| p.x()).fold(f64::INFINITY, f64::min);
    let max_x = points.iter().map(|p| p.x()).fold(f64::NEG_INFINITY, f64::max);
    let min_y = points.iter().map(|p| p.y()).fold(f64::INFINITY, f64::min);
    let max_y = points.iter().map(|p| p.y()).fold(f64::NEG_INFINITY, f64::max);

    for (strategy, tree) in all_layouts(&points) {
        assert_eq!(tree.min_x(), Ok(min_x), "{:?}", strategy);
        assert_eq!(tree.max_x(), Ok(max_x), "{:?}", strategy);
        assert_eq!(tree.min_y(), Ok(min_y), "{:?}", strategy);
        assert_eq!(tree.max_y(), Ok(max_y), "{:?}", strategy);
    }
}

#[test]
fn queries_are_idempotent() {
    let points = random_points(200, 21);
    for (strategy, tree) in all_layouts(&points) {
        let first = tree.enumerate_3_sided(10.0, 200.0, 40.0).unwrap();
        let second = tree.enumerate_3_sided(10.0, 200.0, 40.0).unwrap();
        assert_eq!(first, second, "{:?}", strategy);
        assert_eq!(
            tree.left_most_ne(0.0, 0.0),
            tree.left_most_ne(0.0, 0.0)
        );
    }
}

#[test]
fn structure_holds_for_small_inputs() {
    for n in 0..=40 {
        let points = random_points(n, n as u64);
        for (_, tree) in all_layouts(&points) {
            assert_pst_invariants(&tree, &points);
        }
    }
}

#[test]
fn skewed_input_stays_queryable() {
    let points = skewed_points(40);
    for (strategy, tree) in all_layouts(&points) {
        assert_pst_invariants(&tree, &points);
        let found = tree.enumerate_3_sided(1.0, 1024.0, 0.0).unwrap();
        assert_eq!(found.len(), 11, "{:?}", strategy);
        assert_eq!(
            tree.left_most_ne(3.0, 0.0).unwrap(),
            Point::new(4.0, 2.0)
        );
    }
}

#[test]
fn very_skewed_input_needs_a_pointer_or_in_place_layout() {
    let points = skewed_points(500);
    for strategy in [BuildStrategy::ArrayRecursive, BuildStrategy::ArrayIterative] {
        assert_eq!(
            build(points.clone(), strategy).unwrap_err(),
            PstError::TooDeep,
            "{:?}",
            strategy
        );
    }

    let region = brute_force_3_sided(&points, 2f64.powi(100), 2f64.powi(400), 0.0);
    assert_eq!(region.len(), 301);
    for strategy in [BuildStrategy::Pointer, BuildStrategy::InPlace] {
        let tree = build(points.clone(), strategy).unwrap();
        let found = tree
            .enumerate_3_sided(2f64.powi(100), 2f64.powi(400), 0.0)
            .unwrap();
        assert_eq!(sorted(found), region, "{:?}", strategy);
        assert_eq!(tree.max_y(), Ok(499.0));
    }
}

#[test]
fn rect_query() {
    let points = random_points(150, 8);
    let rect = Rect {
        min: Point::new(0.0, 0.0),
        max: Point::new(100.0, 60.0),
    };
    let expected = brute_force_4_sided(&points, 0.0, 100.0, 0.0, 60.0);
    for (strategy, tree) in all_layouts(&points) {
        assert_eq!(
            sorted(tree.enumerate_rect(&rect).unwrap()),
            expected,
            "{:?}",
            strategy
        );
    }
}

#[test]
fn integer_coordinates() {
    let points: Vec<Point<i32>> = (0..50).map(|i| Point::new(i, (i * 17) % 50)).collect();
    for strategy in [
        BuildStrategy::ArrayRecursive,
        BuildStrategy::Pointer,
        BuildStrategy::InPlace,
    ] {
        let tree = build(points.clone(), strategy).unwrap();
        let mut found = tree.enumerate_3_sided(10, 20, 25).unwrap();
        found.sort_by(|a, b| a.cmp_by_x(b));
        let expected: Vec<Point<i32>> = points
            .iter()
            .copied()
            .filter(|p| p.in_3_sided(10, 20, 25))
            .collect();
        assert_eq!(found, expected, "{:?}", strategy);
        assert_eq!(tree.max_y(), Ok(49));
    }
}
