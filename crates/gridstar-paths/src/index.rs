use gridstar_core::{Point, Range};

use crate::error::PathError;

/// Generous per-slot size of the solver's cell and heap records. Grids
/// whose buffers would exceed `isize::MAX` bytes at this size are rejected.
const SLOT_BYTES: usize = 32;

/// Bidirectional mapping between grid coordinates and row-major offsets.
///
/// Offsets are `y * width + x`, the same layout the obstacle slice passed to
/// [`AstarSolver::find_path`](crate::AstarSolver::find_path) must use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridIndex {
    rng: Range,
    width: usize,
    max_pushes: usize,
}

impl GridIndex {
    /// Create an index for a `width` x `height` grid anchored at the origin.
    ///
    /// Fails if either dimension is below 1, or if the grid is too large for
    /// its search buffers to be addressed.
    pub fn new(width: i32, height: i32) -> Result<Self, PathError> {
        let invalid = PathError::InvalidDimensions { width, height };
        if width < 1 || height < 1 {
            return Err(invalid);
        }
        let max_pushes = push_bound(width as usize, height as usize)
            .filter(|&n| n.checked_mul(SLOT_BYTES).is_some_and(|b| b <= isize::MAX as usize))
            .ok_or(invalid)?;
        Ok(Self {
            rng: Range::with_size(width, height),
            width: width as usize,
            max_pushes,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.rng.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.rng.height()
    }

    /// The grid rectangle.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.rng.len()
    }

    /// Always false: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.rng.contains(p)
    }

    /// Offset of an in-range point. Callers bounds-check first; use
    /// [`checked_offset`](Self::checked_offset) otherwise.
    #[inline]
    pub fn offset(&self, p: Point) -> usize {
        debug_assert!(self.contains(p), "{p} outside {}", self.rng);
        p.y as usize * self.width + p.x as usize
    }

    /// Offset of `p`, or `None` if it lies outside the grid.
    #[inline]
    pub fn checked_offset(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(self.offset(p))
    }

    /// Convert an offset back to a point.
    #[inline]
    pub fn point(&self, offset: usize) -> Point {
        debug_assert!(offset < self.len());
        Point::new((offset % self.width) as i32, (offset / self.width) as i32)
    }

    /// Upper bound on frontier pushes during one search: one for the start
    /// cell plus one per undirected 8-neighbour edge.
    #[inline]
    pub(crate) fn max_frontier_pushes(&self) -> usize {
        self.max_pushes
    }
}

/// `1 + horizontal + vertical + diagonal` edges of a `w` x `h` grid, or
/// `None` on overflow. Both dimensions are at least 1.
fn push_bound(w: usize, h: usize) -> Option<usize> {
    let horizontal = (w - 1).checked_mul(h)?;
    let vertical = w.checked_mul(h - 1)?;
    let diagonal = (w - 1).checked_mul(h - 1)?.checked_mul(2)?;
    horizontal
        .checked_add(vertical)?
        .checked_add(diagonal)?
        .checked_add(1)
}
