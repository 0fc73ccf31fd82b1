use gridstar_core::{Point, Range};

use crate::error::PathError;
use crate::frontier::Frontier;
use crate::heuristic::Heuristic;
use crate::index::GridIndex;
use crate::state::SearchState;

/// Result of a search that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathOutcome {
    /// The output buffer now holds the path from start to goal.
    Found { cost: f64 },
    /// Start and goal are not connected; the output buffer is untouched.
    NoPath,
}

impl PathOutcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found { .. })
    }

    /// Path cost, if a path was found.
    #[inline]
    pub fn cost(&self) -> Option<f64> {
        match *self {
            PathOutcome::Found { cost } => Some(cost),
            PathOutcome::NoPath => None,
        }
    }
}

/// Counters from the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells popped and finalized.
    pub expanded: usize,
    /// Frontier insertions, including the start cell.
    pub pushed: usize,
    /// Pops discarded because the cell was already finalized.
    pub stale: usize,
}

// ---------------------------------------------------------------------------
// AstarSolver
// ---------------------------------------------------------------------------

/// Reusable A* solver for one fixed grid size.
///
/// `AstarSolver` owns its search state and frontier, both sized at
/// construction, so repeated queries allocate nothing: only the caller's
/// output buffer may grow. Searches take `&mut self`; to search from
/// several threads, give each thread its own solver. The obstacle slice
/// can be shared between them.
///
/// ```
/// use gridstar_core::Point;
/// use gridstar_paths::{AstarSolver, Metric};
///
/// let mut solver = AstarSolver::new(5, 5, Metric::Euclidean)?;
/// let open = vec![false; 25];
/// let mut path = Vec::new();
/// let outcome = solver.find_path(&open, Point::new(0, 0), Point::new(4, 4), &mut path)?;
/// assert!(outcome.is_found());
/// assert_eq!(path.len(), 5);
/// # Ok::<(), gridstar_paths::PathError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AstarSolver<H> {
    pub(crate) index: GridIndex,
    pub(crate) heuristic: H,
    pub(crate) state: SearchState,
    pub(crate) frontier: Frontier,
    pub(crate) stats: SearchStats,
}

impl<H: Heuristic> AstarSolver<H> {
    /// Create a solver for a `width` x `height` grid.
    pub fn new(width: i32, height: i32, heuristic: H) -> Result<Self, PathError> {
        let index = GridIndex::new(width, height)?;
        log::debug!(
            "[astar] solver {}x{}: {} cells, frontier capacity {}",
            width,
            height,
            index.len(),
            index.max_frontier_pushes()
        );
        Ok(Self {
            state: SearchState::new(index.len()),
            frontier: Frontier::with_capacity(index.max_frontier_pushes()),
            index,
            heuristic,
            stats: SearchStats::default(),
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.index.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.index.height()
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.index.range()
    }

    /// The coordinate/offset mapping obstacle slices must follow.
    #[inline]
    pub fn index(&self) -> &GridIndex {
        &self.index
    }

    #[inline]
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Counters from the most recent call to `find_path`.
    #[inline]
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Validate the inputs of a search before touching any state.
    pub(crate) fn check_query(
        &self,
        obstacles: &[bool],
        start: Point,
        goal: Point,
    ) -> Result<(), PathError> {
        if obstacles.len() != self.index.len() {
            return Err(PathError::GridSizeMismatch {
                expected: self.index.len(),
                actual: obstacles.len(),
            });
        }
        for point in [start, goal] {
            if !self.index.contains(point) {
                return Err(PathError::OutOfBounds {
                    point,
                    width: self.width(),
                    height: self.height(),
                });
            }
        }
        Ok(())
    }
}
