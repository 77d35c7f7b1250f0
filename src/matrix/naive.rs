/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple loop with a local accumulator: for every
/// output cell, sum `a[i,k] * b[k,j]` over ascending `k` and write the sum.
/// The summation order is fixed on purpose. The Strassen variants fall back
/// to this kernel at or below their threshold, and two variants run with the
/// same threshold must produce bit-identical output, which only holds if the
/// base-case kernel always adds in the same order.
///
/// It overwrites `c` rather than accumulating into it.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, overwritten (C = A * B)
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub fn matmul_naive(a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(c.len(), m * n);

    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0;
            for p in 0..k {
                sum += a[i * k + p] * b[p * n + j];
            }
            c[i * n + j] = sum;
        }
    }
}
