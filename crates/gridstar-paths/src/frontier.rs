use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridstar_core::Point;

use crate::error::EmptyFrontier;

/// A candidate cell with its estimated total cost `f = g + h`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrontierEntry {
    pub point: Point,
    pub priority: f64,
}

/// Heap node: the entry plus its insertion sequence number.
#[derive(Clone, Copy, Debug)]
struct Queued {
    entry: FrontierEntry,
    seq: u64,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority, then
        // earliest insertion, first.
        other
            .entry
            .priority
            .total_cmp(&self.entry.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Open set of an A* search: a min-priority queue over grid points.
///
/// The same point may be queued several times with different priorities;
/// the search discards the stale copies when they are popped. Equal
/// priorities come out in insertion order.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Queued>,
    next_seq: u64,
}

impl Frontier {
    /// Create a frontier that can hold `capacity` entries without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Queue `point` with the given priority.
    #[inline]
    pub fn push(&mut self, point: Point, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Queued {
            entry: FrontierEntry { point, priority },
            seq,
        });
    }

    /// Remove and return the lowest-priority entry.
    #[inline]
    pub fn pop_min(&mut self) -> Result<FrontierEntry, EmptyFrontier> {
        self.heap.pop().map(|q| q.entry).ok_or(EmptyFrontier)
    }

    /// Drop every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Entries the frontier can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }
}
