//! Arbitrary-shape to power-of-two adapter.
//!
//! Strassen's recursion needs an exact midpoint split at every level, so the
//! engine only ever sees square buffers whose side is a power of two. This
//! adapter embeds an n₀×p₀ by p₀×m₀ product into the smallest such square,
//! runs the engine once, and trims the answer back out. The padding is pure
//! overhead in memory, never in correctness: the extra rows and columns are
//! zero and contribute nothing to the top-left n₀×m₀ block.

use crate::error::{MatmulError, Result};
use crate::matrix::Matrix;
use crate::strassen::strassen_recursive;

/// Multiply `a` by `b` through the Strassen engine, padding and trimming as
/// needed.
///
/// Fails with [`MatmulError::DimensionMismatch`] before allocating anything
/// if the shapes are incompatible. `parallel` grants fan-out to the single
/// engine call issued here; everything below it runs sequentially.
pub(crate) fn multiply_strassen(
    a: &Matrix,
    b: &Matrix,
    threshold: usize,
    parallel: bool,
) -> Result<Matrix> {
    if a.cols != b.rows {
        return Err(MatmulError::DimensionMismatch {
            a_rows: a.rows,
            a_cols: a.cols,
            b_rows: b.rows,
            b_cols: b.cols,
        });
    }

    let (n0, p0, m0) = (a.rows, a.cols, b.cols);

    // A product with an empty side is all zeros (or itself empty).
    if n0 == 0 || p0 == 0 || m0 == 0 {
        return Ok(Matrix::new(n0, m0));
    }

    let size = n0.max(p0).max(m0).next_power_of_two();

    // 1×1 times 1×1 needs no padding at all.
    if size == 1 {
        return Matrix::from_vec(1, 1, vec![a.data[0] * b.data[0]]);
    }

    // Threshold 0 would split a 1×1 frame forever.
    let threshold = threshold.max(1);

    let mut a_pad = vec![0.0; size * size];
    let mut b_pad = vec![0.0; size * size];
    for i in 0..n0 {
        a_pad[i * size..i * size + p0].copy_from_slice(&a.data[i * p0..(i + 1) * p0]);
    }
    for i in 0..p0 {
        b_pad[i * size..i * size + m0].copy_from_slice(&b.data[i * m0..(i + 1) * m0]);
    }

    let mut c_pad = vec![0.0; size * size];
    strassen_recursive(&a_pad, &b_pad, &mut c_pad, size, threshold, parallel);

    let mut c = Matrix::new(n0, m0);
    for i in 0..n0 {
        c.data[i * m0..(i + 1) * m0].copy_from_slice(&c_pad[i * size..i * size + m0]);
    }

    Ok(c)
}
