//! Fixtures and brute-force oracles shared by the layout tests.

mod queries;

use geo_traits::{CoordTrait, RectTrait};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::traversal::PstNode;
use crate::{build, BuildStrategy, Point, PrioritySearchTree, Pst};

pub(crate) const STRATEGIES: [BuildStrategy; 4] = [
    BuildStrategy::ArrayRecursive,
    BuildStrategy::ArrayIterative,
    BuildStrategy::Pointer,
    BuildStrategy::InPlace,
];

/// `n` points with pairwise distinct X and pairwise distinct Y.
pub(crate) fn random_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut xs: Vec<i32> = (0..n as i32).collect();
    let mut ys: Vec<i32> = (0..n as i32).collect();
    xs.shuffle(&mut rng);
    ys.shuffle(&mut rng);
    xs.into_iter()
        .zip(ys)
        .map(|(x, y)| Point::new(x as f64 * 1.5 - 20.0, y as f64 * 0.75 - 10.0))
        .collect()
}

/// Points whose X values double each time, which mean-X splitting turns into a deep tree.
pub(crate) fn skewed_points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| Point::new(2f64.powi(i as i32), i as f64))
        .collect()
}

pub(crate) fn all_layouts(points: &[Point]) -> Vec<(BuildStrategy, Pst)> {
    STRATEGIES
        .iter()
        .map(|&strategy| (strategy, build(points.to_vec(), strategy).unwrap()))
        .collect()
}

pub(crate) fn sorted(mut points: Vec<Point>) -> Vec<Point> {
    points.sort_by(|a, b| a.cmp_by_x(b));
    points
}

pub(crate) fn brute_force_3_sided(
    points: &[Point],
    min_x: f64,
    max_x: f64,
    min_y: f64,
) -> Vec<Point> {
    sorted(
        points
            .iter()
            .copied()
            .filter(|p| p.in_3_sided(min_x, max_x, min_y))
            .collect(),
    )
}

pub(crate) fn brute_force_4_sided(
    points: &[Point],
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
) -> Vec<Point> {
    sorted(
        points
            .iter()
            .copied()
            .filter(|p| p.in_box(min_x, max_x, min_y, max_y))
            .collect(),
    )
}

/// Check heap order, X separation of every pair of sibling subtrees and the cached medians, and
/// that the tree holds exactly `expected`.
pub(crate) fn assert_pst_invariants<T: PrioritySearchTree<f64>>(tree: &T, expected: &[Point]) {
    let found = tree.root().map(check_subtree).unwrap_or_default();
    assert_eq!(found.len(), tree.num_items(), "node count");
    assert_eq!(sorted(found), sorted(expected.to_vec()), "point set");
}

fn check_subtree<T: PstNode<f64>>(node: T) -> Vec<Point> {
    let left = node.left().map(check_subtree).unwrap_or_default();
    let right = node.right().map(check_subtree).unwrap_or_default();

    for child in left.iter().chain(&right) {
        assert!(
            child.y() <= node.y(),
            "{:?} sits below {:?}",
            child,
            node.point()
        );
    }

    let left_max = left.iter().map(|p| p.x()).fold(f64::NEG_INFINITY, f64::max);
    let right_min = right.iter().map(|p| p.x()).fold(f64::INFINITY, f64::min);
    assert!(left_max < right_min, "subtrees of {:?} overlap in x", node.point());

    if let Some(median) = node.median_x() {
        assert!(left_max <= median, "left of {:?} exceeds median", node.point());
        assert!(right_min > median, "right of {:?} below median", node.point());
    }

    let mut subtree = vec![node.point()];
    subtree.extend(left);
    subtree.extend(right);
    subtree
}

/// A plain rectangle for queries through `geo_traits`.
pub(crate) struct Rect {
    pub(crate) min: Point,
    pub(crate) max: Point,
}

impl RectTrait for Rect {
    type T = f64;
    type CoordType<'a>
        = Point
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn min(&self) -> Self::CoordType<'_> {
        self.min
    }

    fn max(&self) -> Self::CoordType<'_> {
        self.max
    }
}

#[test]
fn random_points_are_distinct() {
    let points = random_points(500, 7);
    let xs = sorted(points.clone());
    assert!(xs.windows(2).all(|w| w[0].x() < w[1].x()));
    let mut ys = points;
    ys.sort_by(|a, b| a.cmp_by_y(b));
    assert!(ys.windows(2).all(|w| w[0].y() < w[1].y()));
    assert_eq!(CoordTrait::x(&xs[0]), -20.0);
}
