//! Multi-threaded row-banded multiply.

use std::thread;

use tracing::{debug, debug_span};

use super::partition::{partition, RowRange};
use super::worker::compute_band;
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Upper bound on worker threads.
pub const MAX_THREADS: usize = 8;

/// Multi-threaded C = A × B with one worker per row band.
///
/// Rows are split with [`partition`], C is carved into matching disjoint
/// `&mut` bands, and each band is handed to its own scoped thread. A and B
/// are shared by reference. The call returns once every worker has joined.
///
/// Exactly `num_threads` threads are spawned, even when some bands are empty.
///
/// # Errors
///
/// [`Error::Spawn`] if the OS refuses a thread, [`Error::WorkerPanicked`] if
/// a worker panics. Workers that did start are always joined first.
///
/// # Panics
///
/// Panics if `num_threads` is outside `1..=MAX_THREADS` or `a` and `b`
/// differ in size.
pub fn matmul_row_band_mt(a: &Matrix, b: &Matrix, num_threads: usize) -> Result<Matrix> {
    assert!(
        (1..=MAX_THREADS).contains(&num_threads),
        "num_threads must be in 1..={}, got {}",
        MAX_THREADS,
        num_threads
    );
    assert_eq!(a.n(), b.n(), "A is {0}x{0}, B is {1}x{1}", a.n(), b.n());

    let n = a.n();
    let ranges = partition(n, num_threads);
    let mut c = Matrix::zeros(n);

    let bands = split_bands(c.as_mut_slice(), &ranges, n);
    fork_join(&ranges, bands, |range, band| compute_band(range, a, b, band))?;

    Ok(c)
}

/// Runs `work` on every (range, band) pair, each on its own scoped thread,
/// and returns once all of them have finished.
fn fork_join<F>(ranges: &[RowRange], bands: Vec<&mut [i32]>, work: F) -> Result<()>
where
    F: Fn(RowRange, &mut [i32]) + Sync,
{
    let work = &work;
    thread::scope(|s| -> Result<()> {
        let mut handles = Vec::with_capacity(ranges.len());
        for (tid, (range, band)) in ranges.iter().copied().zip(bands).enumerate() {
            let handle = thread::Builder::new()
                .name(format!("rowmul-{}", tid))
                .spawn_scoped(s, move || {
                    let _span = debug_span!("worker", tid, start = range.start, end = range.end)
                        .entered();
                    work(range, band);
                    debug!("band done");
                })
                .map_err(Error::Spawn)?;
            handles.push(handle);
        }

        // an unjoined panicked thread makes thread::scope itself panic, so join all
        let mut outcome = Ok(());
        for (tid, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() && outcome.is_ok() {
                outcome = Err(Error::WorkerPanicked(tid));
            }
        }
        outcome
    })
}

/// Cuts `c` into one mutable slice per range, in order.
fn split_bands<'c>(mut c: &'c mut [i32], ranges: &[RowRange], n: usize) -> Vec<&'c mut [i32]> {
    let mut bands = Vec::with_capacity(ranges.len());
    for range in ranges {
        let (band, rest) = std::mem::take(&mut c).split_at_mut(range.len() * n);
        bands.push(band);
        c = rest;
    }
    bands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::naive_ijk::matmul_naive_ijk;

    #[test]
    fn test_2x2_two_threads() {
        let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]);
        let b = Matrix::from_rows(&[vec![5, 6], vec![7, 8]]);
        let c = matmul_row_band_mt(&a, &b, 2).unwrap();
        assert_eq!(c, Matrix::from_rows(&[vec![19, 22], vec![43, 50]]));
    }

    #[test]
    fn test_split_bands_lengths() {
        let mut c = vec![0; 5 * 4];
        let ranges = partition(5, 3);
        let bands = split_bands(&mut c, &ranges, 4);
        let lens: Vec<_> = bands.iter().map(|b| b.len()).collect();
        assert_eq!(lens, vec![4, 4, 12]);
    }

    #[test]
    fn test_worker_panic_is_reported() {
        let ranges = partition(6, 3);
        let mut c = vec![0; 6 * 2];
        let bands = split_bands(&mut c, &ranges, 2);

        let result = fork_join(&ranges, bands, |range, band| {
            if range.start == 2 {
                panic!("band {:?} failed", range);
            }
            band.fill(1);
        });

        assert!(matches!(result, Err(Error::WorkerPanicked(1))), "{:?}", result);
        // the other workers still ran to completion
        assert_eq!(&c[..4], &[1; 4]);
        assert_eq!(&c[8..], &[1; 4]);
    }

    #[test]
    fn test_fork_join_runs_every_band() {
        let ranges = partition(5, 3);
        let mut c = vec![0; 5];
        let bands = split_bands(&mut c, &ranges, 1);

        fork_join(&ranges, bands, |range, band| {
            for (row, cell) in range.rows().zip(band.iter_mut()) {
                *cell = row as i32 * 10;
            }
        })
        .unwrap();

        assert_eq!(c, vec![0, 10, 20, 30, 40]);
    }

    #[test]
    fn test_more_threads_than_rows() {
        let a = Matrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
        let b = Matrix::from_rows(&[vec![9, 8, 7], vec![6, 5, 4], vec![3, 2, 1]]);
        let c = matmul_row_band_mt(&a, &b, 8).unwrap();
        assert_eq!(c, matmul_naive_ijk(&a, &b));
    }

    #[test]
    fn test_empty_matrix() {
        let c = matmul_row_band_mt(&Matrix::zeros(0), &Matrix::zeros(0), 4).unwrap();
        assert_eq!(c.n(), 0);
    }

    #[test]
    #[should_panic(expected = "num_threads must be in 1..=8")]
    fn test_rejects_nine_threads() {
        let m = Matrix::zeros(2);
        let _ = matmul_row_band_mt(&m, &m, 9);
    }
}
