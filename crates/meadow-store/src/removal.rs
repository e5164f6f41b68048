//! Deferred row deletion.
//!
//! A `RemovalQueue` collects row indices marked during a frame.  Marking is
//! idempotent and membership is O(1), so every system can cheaply skip rows
//! that an earlier system already consumed.  At the barrier the queue is
//! drained exactly once, yielding in-range indices in strictly descending
//! order: erasing the largest index first keeps every smaller index in the
//! batch valid.

use rustc_hash::FxHashSet;

/// Row indices of one table pending deletion at the next barrier.
#[derive(Clone, Debug, Default)]
pub struct RemovalQueue {
    marked: FxHashSet<usize>,
}

impl RemovalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `row` for deletion.  Returns `false` if it was already marked.
    #[inline]
    pub fn mark(&mut self, row: usize) -> bool {
        self.marked.insert(row)
    }

    /// `true` if `row` is marked this frame.
    #[inline]
    pub fn contains(&self, row: usize) -> bool {
        self.marked.contains(&row)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.marked.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    /// Empty the queue, returning the marked rows below `row_count` in
    /// strictly descending order.  Out-of-range marks are discarded.
    pub fn drain_descending(&mut self, row_count: usize) -> Vec<usize> {
        let mut rows: Vec<usize> = self.marked.drain().filter(|&r| r < row_count).collect();
        rows.sort_unstable_by(|a, b| b.cmp(a));
        rows
    }
}

/// Order-preserving erase of `rows` (strictly descending) from `column`.
pub(crate) fn erase_rows<T>(column: &mut Vec<T>, rows: &[usize]) {
    for &row in rows {
        column.remove(row);
    }
}
