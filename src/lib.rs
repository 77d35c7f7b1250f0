//! Strassen's matrix multiplication in Rust, built from scratch.
//!
//! I built this to find out where Strassen's algorithm actually starts
//! paying off against a plain triple loop. The answer lives in the
//! threshold: pure recursion down to 1×1 is spectacularly slow, but cutting
//! over to the naive kernel at around 64 makes the seven-product
//! decomposition competitive, and running the seven top-level products on a
//! thread pool stacks a near-linear speedup on top.
//!
//! ## Usage
//!
//! ```
//! use strassen::{Matrix, hybrid_multiply, DEFAULT_THRESHOLD};
//!
//! let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
//! let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();
//!
//! let c = hybrid_multiply(&a, &b, DEFAULT_THRESHOLD).unwrap();
//! assert_eq!(c.data, vec![58.0, 64.0, 139.0, 154.0]);
//! ```
//!
//! For large matrices, use the parallel variant:
//!
//! ```
//! use strassen::{Matrix, parallel_multiply, DEFAULT_THRESHOLD};
//!
//! let a = Matrix::from_vec(100, 100, (0..10_000).map(|i| (i % 7) as f64).collect()).unwrap();
//! let b = Matrix::from_vec(100, 100, (0..10_000).map(|i| (i % 5) as f64).collect()).unwrap();
//!
//! let c = parallel_multiply(&a, &b, DEFAULT_THRESHOLD).unwrap();
//! assert_eq!((c.rows, c.cols), (100, 100));
//! ```
//!
//! ## What's inside
//!
//! - One recursive engine behind all three Strassen variants
//! - Power-of-two padding so any compatible shapes work
//! - Single-level rayon fork-join over the seven sub-products
//! - Naive i-j-k kernel as base case and correctness baseline

pub mod error;
pub mod matrix;
pub mod strassen;

pub use error::{MatmulError, Result};
pub use matrix::Matrix;

use crate::matrix::naive::matmul_naive;
use crate::strassen::padding::multiply_strassen;

/// Recursion cutoff used by callers that have no reason to tune it.
///
/// At or below this dimension the engine switches to the naive kernel.
pub const DEFAULT_THRESHOLD: usize = 64;

/// Strassen multiply with top-level parallelism: the seven outermost
/// sub-products run concurrently on the rayon pool.
///
/// The fastest variant for large matrices. Deeper recursion levels stay
/// sequential on purpose; seven tasks already fill the pool, and nested
/// fan-out on shrinking subproblems costs more than it returns. For the same
/// `threshold` the result is bit-identical to [`hybrid_multiply`].
///
/// # Errors
///
/// [`MatmulError::DimensionMismatch`] if `a.cols != b.rows`, before any
/// allocation.
pub fn parallel_multiply(a: &Matrix, b: &Matrix, threshold: usize) -> Result<Matrix> {
    multiply_strassen(a, b, threshold, true)
}

/// Sequential hybrid Strassen multiply: recurse above `threshold`, naive
/// kernel at or below it.
///
/// Reuses two scratch buffers across the seven sub-product computations of
/// each frame, which the strictly sequential schedule makes safe.
///
/// # Errors
///
/// [`MatmulError::DimensionMismatch`] if `a.cols != b.rows`, before any
/// allocation.
pub fn hybrid_multiply(a: &Matrix, b: &Matrix, threshold: usize) -> Result<Matrix> {
    multiply_strassen(a, b, threshold, false)
}

/// Classic Strassen recursion all the way down to 1×1 blocks.
///
/// Kept for demonstrating how much the recursion overhead costs without a
/// hybrid cutoff; use [`hybrid_multiply`] or [`parallel_multiply`] for real
/// work.
///
/// # Errors
///
/// [`MatmulError::DimensionMismatch`] if `a.cols != b.rows`, before any
/// allocation.
pub fn pure_recursive_multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    multiply_strassen(a, b, 1, false)
}

/// Plain triple-loop multiply, the baseline every Strassen variant is
/// checked against.
///
/// # Errors
///
/// [`MatmulError::DimensionMismatch`] if `a.cols != b.rows`, before any
/// allocation.
pub fn naive_multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.cols != b.rows {
        return Err(MatmulError::DimensionMismatch {
            a_rows: a.rows,
            a_cols: a.cols,
            b_rows: b.rows,
            b_cols: b.cols,
        });
    }

    let mut c = Matrix::new(a.rows, b.cols);
    matmul_naive(&a.data, &b.data, &mut c.data, a.rows, b.cols, a.cols);
    Ok(c)
}
