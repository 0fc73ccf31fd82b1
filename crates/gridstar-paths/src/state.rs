use gridstar_core::Point;

/// Per-cell working memory for one search.
///
/// `seen` and `closed` hold the generation at which the cell was visited or
/// finalized; a record from an older generation reads as untouched.
#[derive(Clone, Copy, Debug)]
struct CellRecord {
    cost: f64,
    parent: Point,
    seen: u32,
    closed: u32,
}

impl Default for CellRecord {
    fn default() -> Self {
        Self {
            cost: f64::INFINITY,
            parent: Point::ZERO,
            seen: 0,
            closed: 0,
        }
    }
}

/// Best-known costs, parents and closed-set membership for every cell.
///
/// Sized once at construction; [`reset`](Self::reset) bumps a generation
/// counter instead of touching every record, and only wipes the array when
/// that counter wraps.
#[derive(Clone, Debug)]
pub struct SearchState {
    cells: Vec<CellRecord>,
    generation: u32,
}

impl SearchState {
    /// Allocate records for `len` cells.
    pub fn new(len: usize) -> Self {
        Self {
            cells: vec![CellRecord::default(); len],
            generation: 1,
        }
    }

    /// Number of cell records.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Forget every visited and finalized cell.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Stamps from 2^32 searches ago would read as current again.
            self.cells.fill(CellRecord::default());
            self.generation = 1;
        }
    }

    /// Whether the cell was assigned a cost during the current search.
    #[inline]
    pub fn is_visited(&self, offset: usize) -> bool {
        self.cells[offset].seen == self.generation
    }

    /// Whether the cell has been popped and settled.
    #[inline]
    pub fn is_finalized(&self, offset: usize) -> bool {
        self.cells[offset].closed == self.generation
    }

    /// Best known cost, if the cell was visited.
    #[inline]
    pub fn cost(&self, offset: usize) -> Option<f64> {
        self.is_visited(offset).then(|| self.cells[offset].cost)
    }

    /// Predecessor on the best known path, if the cell was visited.
    #[inline]
    pub fn parent(&self, offset: usize) -> Option<Point> {
        self.is_visited(offset).then(|| self.cells[offset].parent)
    }

    /// Record `cost` and `parent` if the cell is unvisited or `cost` is a
    /// strict improvement. Returns whether the record changed.
    ///
    /// Must not be called on a finalized cell.
    #[inline]
    pub fn try_relax(&mut self, offset: usize, cost: f64, parent: Point) -> bool {
        debug_assert!(!self.is_finalized(offset));
        let generation = self.generation;
        let cell = &mut self.cells[offset];
        if cell.seen == generation && cost >= cell.cost {
            return false;
        }
        cell.cost = cost;
        cell.parent = parent;
        cell.seen = generation;
        true
    }

    /// Move the cell into the closed set.
    #[inline]
    pub fn finalize(&mut self, offset: usize) {
        self.cells[offset].closed = self.generation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relax_accepts_first_and_strictly_better_costs() {
        let mut st = SearchState::new(4);
        st.reset();
        assert!(!st.is_visited(2));
        assert_eq!(st.cost(2), None);

        assert!(st.try_relax(2, 5.0, Point::new(0, 0)));
        assert_eq!(st.cost(2), Some(5.0));
        assert!(!st.try_relax(2, 6.0, Point::new(1, 0)));
        assert!(st.try_relax(2, 4.5, Point::new(1, 1)));
        assert_eq!(st.parent(2), Some(Point::new(1, 1)));
    }

    #[test]
    fn equal_cost_keeps_first_parent() {
        let mut st = SearchState::new(1);
        st.reset();
        assert!(st.try_relax(0, 2.0, Point::new(1, 0)));
        assert!(!st.try_relax(0, 2.0, Point::new(0, 1)));
        assert_eq!(st.parent(0), Some(Point::new(1, 0)));
    }

    #[test]
    fn reset_forgets_previous_search() {
        let mut st = SearchState::new(3);
        st.reset();
        st.try_relax(1, 1.0, Point::ZERO);
        st.finalize(1);
        assert!(st.is_finalized(1));

        st.reset();
        assert!(!st.is_visited(1));
        assert!(!st.is_finalized(1));
        // A worse cost than last search's is accepted on a fresh record.
        assert!(st.try_relax(1, 9.0, Point::new(2, 0)));
        assert_eq!(st.cost(1), Some(9.0));
    }

    #[test]
    fn generation_wrap_wipes_records() {
        let mut st = SearchState::new(2);
        st.generation = u32::MAX;
        st.try_relax(0, 3.0, Point::ZERO);
        st.finalize(0);

        st.reset();
        assert_eq!(st.generation, 1);
        assert!(!st.is_visited(0));
        assert!(!st.is_finalized(0));
    }
}
