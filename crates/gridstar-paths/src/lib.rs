//! Reusable A* shortest-path search on fixed-size 2D occupancy grids.
//!
//! [`AstarSolver`] is built once per grid size and heuristic and then
//! answers any number of queries. Each query passes the current obstacle
//! grid (one `bool` per cell, row-major, `true` = blocked) and a reusable
//! output buffer; the solver allocates nothing after construction.
//!
//! Movement is 8-connected: cardinal steps cost [`CARDINAL_COST`], diagonal
//! steps [`DIAGONAL_COST`]. Diagonal steps may pass between two blocked
//! cardinal cells.
//!
//! | Piece | Role |
//! |---|---|
//! | [`GridIndex`] | point ↔ row-major offset |
//! | [`SearchState`] | per-cell cost, parent, visited and closed marks |
//! | [`Frontier`] | min-priority open set with lazy deletion |
//! | [`AstarSolver`] | the search loop and path reconstruction |
//!
//! [`ObstacleMap`] builds obstacle grids from ASCII pictures.

mod astar;
mod error;
mod frontier;
mod heuristic;
mod index;
mod map;
pub mod moves;
mod solver;
mod state;

pub use error::{EmptyFrontier, MapError, PathError};
pub use frontier::{Frontier, FrontierEntry};
pub use heuristic::{Heuristic, Metric, chebyshev, euclidean, manhattan, octile};
pub use index::GridIndex;
pub use map::ObstacleMap;
pub use moves::{CARDINAL_COST, DIAGONAL_COST, path_cost, step_cost};
pub use solver::{AstarSolver, PathOutcome, SearchStats};
pub use state::SearchState;
