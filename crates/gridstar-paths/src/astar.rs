use gridstar_core::Point;

use crate::error::PathError;
use crate::heuristic::Heuristic;
use crate::moves::{CARDINAL_COST, DIAGONAL_COST};
use crate::solver::{AstarSolver, PathOutcome, SearchStats};

/// Step costs in the order of [`Point::neighbors_8`]: cardinal moves at even
/// indices, diagonal ones at odd indices.
const STEP_COSTS: [f64; 8] = [
    CARDINAL_COST,
    DIAGONAL_COST,
    CARDINAL_COST,
    DIAGONAL_COST,
    CARDINAL_COST,
    DIAGONAL_COST,
    CARDINAL_COST,
    DIAGONAL_COST,
];

impl<H: Heuristic> AstarSolver<H> {
    /// Compute the cheapest 8-way path from `start` to `goal`.
    ///
    /// `obstacles` holds one entry per cell in row-major order, `true`
    /// meaning blocked. On [`PathOutcome::Found`] `out` is cleared and
    /// filled with the path, both endpoints included; on
    /// [`PathOutcome::NoPath`] it is left as it was.
    ///
    /// Diagonal steps are allowed between two blocked cardinal cells. The
    /// start cell is never checked against `obstacles`; a blocked goal is
    /// unreachable unless it is also the start.
    pub fn find_path(
        &mut self,
        obstacles: &[bool],
        start: Point,
        goal: Point,
        out: &mut Vec<Point>,
    ) -> Result<PathOutcome, PathError> {
        self.check_query(obstacles, start, goal)?;
        log::trace!("[astar] find_path: start={start} goal={goal}");

        self.state.reset();
        self.frontier.clear();
        let mut stats = SearchStats::default();

        let start_idx = self.index.offset(start);
        let goal_idx = self.index.offset(goal);
        self.state.try_relax(start_idx, 0.0, start);
        self.frontier.push(start, self.heuristic.estimate(start, goal));
        stats.pushed += 1;

        let found = loop {
            let Ok(entry) = self.frontier.pop_min() else {
                break false;
            };
            let current = entry.point;
            let ci = self.index.offset(current);

            // Skip stale entries.
            if self.state.is_finalized(ci) {
                stats.stale += 1;
                continue;
            }
            self.state.finalize(ci);
            stats.expanded += 1;

            if ci == goal_idx {
                break true;
            }

            let Some(current_g) = self.state.cost(ci) else {
                continue;
            };
            for (np, step) in current.neighbors_8().into_iter().zip(STEP_COSTS) {
                let Some(ni) = self.index.checked_offset(np) else {
                    continue;
                };
                if obstacles[ni] || self.state.is_finalized(ni) {
                    continue;
                }
                let tentative_g = current_g + step;
                if self.state.try_relax(ni, tentative_g, current) {
                    self.frontier
                        .push(np, tentative_g + self.heuristic.estimate(np, goal));
                    stats.pushed += 1;
                }
            }
        };

        self.stats = stats;

        if !found {
            log::debug!(
                "[astar] no path {start} -> {goal}: expanded={} pushed={} stale={}",
                stats.expanded,
                stats.pushed,
                stats.stale
            );
            return Ok(PathOutcome::NoPath);
        }

        let cost = self.state.cost(goal_idx).unwrap_or(0.0);
        self.reconstruct(goal, out);
        log::debug!(
            "[astar] path {start} -> {goal}: {} cells, cost {cost:.3}, expanded={} pushed={} stale={}",
            out.len(),
            stats.expanded,
            stats.pushed,
            stats.stale
        );
        Ok(PathOutcome::Found { cost })
    }

    /// Write the parent chain ending at `goal` into `out`, start first.
    fn reconstruct(&self, goal: Point, out: &mut Vec<Point>) {
        out.clear();
        let mut current = goal;
        loop {
            out.push(current);
            let parent = self
                .state
                .parent(self.index.offset(current))
                .unwrap_or(current);
            if parent == current {
                break;
            }
            current = parent;
        }
        out.reverse();
    }
}
