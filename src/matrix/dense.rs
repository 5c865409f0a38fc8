//! Square dense integer matrix.

use std::ops::{Index, IndexMut};

/// An N×N matrix of `i32`, stored row-major in one contiguous buffer.
///
/// Element `(i, j)` lives at `data[i * n + j]`, so a band of consecutive
/// rows is a contiguous sub-slice. The threaded multiply relies on that to
/// hand each worker a disjoint `&mut [i32]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    n: usize,
    data: Vec<i32>,
}

impl Matrix {
    /// N×N matrix of zeros.
    ///
    /// # Panics
    ///
    /// Panics if N×N overflows `usize`.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0; cells(n)],
        }
    }

    /// Wraps a row-major buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != n * n` or N×N overflows `usize`.
    pub fn from_vec(n: usize, data: Vec<i32>) -> Self {
        let expected = cells(n);
        assert_eq!(
            data.len(),
            expected,
            "expected {}x{}={} elements",
            n,
            n,
            expected
        );
        Self { n, data }
    }

    /// Builds a matrix from nested rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows don't form a square.
    pub fn from_rows(rows: &[Vec<i32>]) -> Self {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), n, "row {} has {} columns, expected {}", i, row.len(), n);
            data.extend_from_slice(row);
        }
        Self { n, data }
    }

    /// Dimension N.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }

    pub fn row(&self, i: usize) -> &[i32] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.data.chunks(self.n.max(1))
    }
}

fn cells(n: usize) -> usize {
    n.checked_mul(n)
        .unwrap_or_else(|| panic!("{}x{} matrix overflows usize", n, n))
}

impl Index<(usize, usize)> for Matrix {
    type Output = i32;

    fn index(&self, (i, j): (usize, usize)) -> &i32 {
        &self.data[i * self.n + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut i32 {
        &mut self.data[i * self.n + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexing_is_row_major() {
        let m = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]);
        assert_eq!(m[(0, 1)], 2);
        assert_eq!(m[(1, 0)], 3);
        assert_eq!(m.row(1), &[3, 4]);
        assert_eq!(m.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_index_mut() {
        let mut m = Matrix::zeros(3);
        m[(2, 1)] = 7;
        assert_eq!(m.as_slice()[2 * 3 + 1], 7);
    }

    #[test]
    fn test_rows_of_empty_matrix() {
        let m = Matrix::zeros(0);
        assert_eq!(m.rows().count(), 0);
    }

    #[test]
    #[should_panic(expected = "matrix overflows usize")]
    fn test_zeros_rejects_overflowing_dimension() {
        Matrix::zeros(usize::MAX);
    }

    #[test]
    #[should_panic(expected = "row 1 has 1 columns")]
    fn test_from_rows_rejects_ragged() {
        Matrix::from_rows(&[vec![1, 2], vec![3]]);
    }
}
