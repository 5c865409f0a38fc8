//! Splitting output rows into per-thread bands.

use std::ops::Range;

/// Half-open band of rows `[start, end)` assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub start: usize,
    pub end: usize,
}

impl RowRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn rows(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Splits rows `[0, n)` into `threads` contiguous bands.
///
/// Every band gets `n / threads` rows except the last, which also takes the
/// `n % threads` leftover rows. When `n < threads` all bands but the last
/// are empty.
///
/// ```
/// use rowmul::threaded::partition::{partition, RowRange};
///
/// assert_eq!(
///     partition(5, 3),
///     vec![RowRange::new(0, 1), RowRange::new(1, 2), RowRange::new(2, 5)]
/// );
/// ```
///
/// # Panics
///
/// Panics if `threads == 0`.
pub fn partition(n: usize, threads: usize) -> Vec<RowRange> {
    assert!(threads > 0, "thread count must be at least 1");
    let rows_per_thread = n / threads;

    (0..threads)
        .map(|tid| {
            let start = tid * rows_per_thread;
            let end = if tid == threads - 1 {
                n
            } else {
                (tid + 1) * rows_per_thread
            };
            RowRange::new(start, end)
        })
        .collect()
}
