//! The owned matrix buffer and the buffer-level operations on it.
//!
//! A [`Matrix`] is a contiguous row-major `Vec<f64>` with explicit row and
//! column counts. The Strassen engine never works on nested containers or
//! views; every quadrant and intermediate term is its own flat buffer, which
//! keeps addressing simple and rules out hidden aliasing between the seven
//! concurrent sub-products.

pub mod naive;
pub mod ops;

use crate::error::{MatmulError, Result};

/// A dense row-major matrix of `f64` values.
///
/// Invariant: `data.len() == rows * cols`. [`Matrix::from_vec`] enforces it;
/// the other constructors uphold it by building the buffer themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f64>,
}

impl Matrix {
    /// Create a zero-filled matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Create a matrix from a row-major buffer.
    ///
    /// Fails with [`MatmulError::BufferSize`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatmulError::BufferSize {
                len: data.len(),
                rows,
                cols,
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[row * self.cols + col])
    }
}
