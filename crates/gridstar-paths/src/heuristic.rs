use gridstar_core::Point;

use crate::moves::{CARDINAL_COST, DIAGONAL_COST};

/// Estimate of the remaining cost between two cells.
///
/// For the solver to return shortest paths the estimate must be admissible
/// (never above the true remaining cost); a consistent estimate also keeps
/// the number of re-queued cells low. The solver does not check either.
///
/// Any `Fn(Point, Point) -> f64` is a heuristic.
pub trait Heuristic {
    fn estimate(&self, from: Point, to: Point) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(Point, Point) -> f64,
{
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        self(from, to)
    }
}

/// Built-in distance metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Metric {
    /// Straight-line distance. Admissible and consistent.
    Euclidean,
    /// Exact 8-way distance on an open grid. Admissible, consistent, and
    /// the tightest of the built-ins.
    #[default]
    Octile,
    /// Number of king moves. Admissible; treats diagonals as cost 1.
    Chebyshev,
    /// Sum of axis distances. Over-estimates diagonal moves, so paths may
    /// be suboptimal.
    Manhattan,
    /// Always 0, turning the search into Dijkstra.
    Zero,
}

impl Heuristic for Metric {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        match self {
            Metric::Euclidean => euclidean(from, to),
            Metric::Octile => octile(from, to),
            Metric::Chebyshev => chebyshev(from, to) as f64,
            Metric::Manhattan => manhattan(from, to) as f64,
            Metric::Zero => 0.0,
        }
    }
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    dx.hypot(dy)
}

/// Cost of the cheapest 8-way walk between two points on an open grid.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    f64::from(hi - lo) * CARDINAL_COST + f64::from(lo) * DIAGONAL_COST
}
