//! Per-thread inner-product loop.

use super::partition::RowRange;
use crate::matrix::Matrix;

/// Computes rows `range` of C = A × B into `band`.
///
/// `band` holds exactly those rows of C, row-major, so row `i` of C is
/// `band[(i - range.start) * n..][..n]`. An empty range does nothing.
/// Arithmetic wraps on overflow.
///
/// # Panics
///
/// Panics if `band` is not `range.len() * n` long or the range runs past N.
pub fn compute_band(range: RowRange, a: &Matrix, b: &Matrix, band: &mut [i32]) {
    let n = a.n();
    assert_eq!(band.len(), range.len() * n, "band does not match {:?}", range);
    if range.is_empty() {
        return;
    }
    assert!(range.end <= n, "{:?} is out of bounds for N={}", range, n);

    let b = b.as_slice();
    for (i, c_row) in range.rows().zip(band.chunks_exact_mut(n)) {
        let a_row = a.row(i);
        for (j, cell) in c_row.iter_mut().enumerate() {
            let mut sum = 0i32;
            for (k, &a_ik) in a_row.iter().enumerate() {
                sum = sum.wrapping_add(a_ik.wrapping_mul(b[k * n + j]));
            }
            *cell = sum;
        }
    }
}
