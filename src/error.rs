//! Error types for matrix construction and multiplication.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatmulError {
    /// A's column count does not equal B's row count. Raised before any
    /// buffer is allocated.
    #[error("Incompatible matrix dimensions: {a_rows}x{a_cols} * {b_rows}x{b_cols}")]
    DimensionMismatch {
        a_rows: usize,
        a_cols: usize,
        b_rows: usize,
        b_cols: usize,
    },
    /// Backing buffer length does not match rows * cols.
    #[error("data length {len} does not match matrix dimensions {rows}x{cols}")]
    BufferSize {
        len: usize,
        rows: usize,
        cols: usize,
    },
}

pub type Result<T> = std::result::Result<T, MatmulError>;
