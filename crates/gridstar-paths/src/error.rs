use gridstar_core::Point;
use thiserror::Error;

/// Precondition failures reported by the solver.
///
/// "No path" is not an error: it is [`PathOutcome::NoPath`](crate::PathOutcome::NoPath).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A grid dimension was zero or negative, or the grid is too large.
    #[error("invalid grid dimensions {width}x{height}: both must be at least 1 and the grid addressable")]
    InvalidDimensions { width: i32, height: i32 },

    /// The obstacle slice does not have one entry per cell.
    #[error("obstacle grid has {actual} cells, expected {expected}")]
    GridSizeMismatch { expected: usize, actual: usize },

    /// A start or goal coordinate lies outside the grid.
    #[error("point {point} is outside the {width}x{height} grid")]
    OutOfBounds { point: Point, width: i32, height: i32 },
}

/// Errors that can occur when parsing an [`ObstacleMap`](crate::ObstacleMap).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map contains no cells")]
    Empty,

    /// Lines have inconsistent widths.
    #[error("map line {line} has width {found}, expected {expected}")]
    InconsistentSize {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A character other than `#`, `.`, `S` or `G` was found.
    #[error("map contains invalid rune \u{201c}{ch}\u{201d} at {pos}")]
    InvalidRune { ch: char, pos: Point },

    /// A start or goal marker appears more than once.
    #[error("marker '{marker}' appears twice, at {first} and {second}")]
    DuplicateMarker {
        marker: char,
        first: Point,
        second: Point,
    },

    /// The cell list does not cover `width` x `height`.
    #[error("map is {width}x{height} but has {found} cells")]
    CellCountMismatch { width: i32, height: i32, found: usize },

    /// A start or goal marker lies outside the map.
    #[error("marker '{marker}' at {pos} is outside the map")]
    MarkerOutOfBounds { marker: char, pos: Point },
}

/// Returned by [`Frontier::pop_min`](crate::Frontier::pop_min) once every
/// entry has been extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("frontier is empty")]
pub struct EmptyFrontier;
