//! Row-banded multi-threaded integer matrix multiplication.
//!
//! C = A × B for square `i32` matrices, with the rows of C split into
//! contiguous bands and each band computed by its own thread. The last
//! thread also takes whatever rows don't divide evenly. Arithmetic wraps on
//! overflow, so the threaded result always matches the sequential one
//! exactly.
//!
//! ## Usage
//!
//! ```
//! use rowmul::{multiply, multiply_parallel, Matrix};
//!
//! let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]);
//! let b = Matrix::from_rows(&[vec![5, 6], vec![7, 8]]);
//!
//! let c = multiply_parallel(&a, &b, 2).unwrap();
//! assert_eq!(c, Matrix::from_rows(&[vec![19, 22], vec![43, 50]]));
//! assert_eq!(c, multiply(&a, &b));
//! ```
//!
//! The `rowmul` binary wraps this with file I/O and timing:
//!
//! ```text
//! rowmul <numThreads> <N> <fileA> <fileB> <fileC>
//! ```

pub mod cli;
pub mod error;
pub mod matrix;
pub mod threaded;

pub use cli::{parse_config, run, Config, Invocation};
pub use error::{Error, Result};
pub use matrix::io::{load_matrix, save_matrix};
pub use matrix::naive_ijk::matmul_naive_ijk;
pub use matrix::Matrix;
pub use threaded::row_band_mt::MAX_THREADS;

/// Sequential C = A × B.
///
/// # Panics
///
/// Panics if `a` and `b` differ in size.
pub fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    matmul_naive_ijk(a, b)
}

/// Same as [`multiply`] but splits the rows of C across `num_threads`
/// threads.
///
/// # Errors
///
/// Returns [`Error::ThreadCount`] if `num_threads` is outside
/// `1..=MAX_THREADS`, and propagates spawn or worker failures.
///
/// # Panics
///
/// Panics if `a` and `b` differ in size.
pub fn multiply_parallel(a: &Matrix, b: &Matrix, num_threads: usize) -> Result<Matrix> {
    if !(1..=MAX_THREADS).contains(&num_threads) {
        return Err(Error::ThreadCount(i64::try_from(num_threads).unwrap_or(i64::MAX)));
    }
    threaded::row_band_mt::matmul_row_band_mt(a, b, num_threads)
}
