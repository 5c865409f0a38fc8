use super::Matrix;

/// Sequential matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple loop: every cell of C gets the inner product
/// of a row of A with a column of B. Arithmetic wraps on overflow, same as
/// the threaded version, so the two agree bit for bit.
///
/// Use this as a correctness baseline, not for performance.
///
/// # Panics
///
/// Panics if `a` and `b` have different dimensions.
pub fn matmul_naive_ijk(a: &Matrix, b: &Matrix) -> Matrix {
    assert_eq!(a.n(), b.n(), "A is {0}x{0}, B is {1}x{1}", a.n(), b.n());
    let n = a.n();
    let (a, b) = (a.as_slice(), b.as_slice());
    let mut c = vec![0i32; n * n];

    for i in 0..n {
        for j in 0..n {
            let mut sum = 0i32;
            for k in 0..n {
                sum = sum.wrapping_add(a[i * n + k].wrapping_mul(b[k * n + j]));
            }
            c[i * n + j] = sum;
        }
    }

    Matrix::from_vec(n, c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let a = Matrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
        let id = Matrix::from_rows(&[vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]);
        assert_eq!(matmul_naive_ijk(&a, &id), a);
        assert_eq!(matmul_naive_ijk(&id, &a), a);
    }

    #[test]
    fn test_wraps_on_overflow() {
        let a = Matrix::from_rows(&[vec![i32::MAX]]);
        let b = Matrix::from_rows(&[vec![2]]);
        assert_eq!(matmul_naive_ijk(&a, &b)[(0, 0)], -2);
    }
}
