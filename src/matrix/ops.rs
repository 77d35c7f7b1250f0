//! Elementwise add/subtract over equal-length flat buffers.
//!
//! These are the only arithmetic the Strassen recursion performs outside the
//! base-case kernel: forming the S-terms before each sub-product and chaining
//! the M-products into the output quadrants afterwards. The `*_into` forms
//! write into a disjoint destination; the `*_assign` forms update the
//! destination in place, which is how the combine step expresses chains like
//! C11 ← M1 + M4, C11 ← C11 − M5, C11 ← C11 + M7.

/// dst = a + b
pub fn add_into(dst: &mut [f64], a: &[f64], b: &[f64]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), dst.len());
    for i in 0..dst.len() {
        dst[i] = a[i] + b[i];
    }
}

/// dst = a - b
pub fn sub_into(dst: &mut [f64], a: &[f64], b: &[f64]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), dst.len());
    for i in 0..dst.len() {
        dst[i] = a[i] - b[i];
    }
}

/// dst += src
pub fn add_assign(dst: &mut [f64], src: &[f64]) {
    debug_assert_eq!(dst.len(), src.len());
    for i in 0..dst.len() {
        dst[i] += src[i];
    }
}

/// dst -= src
pub fn sub_assign(dst: &mut [f64], src: &[f64]) {
    debug_assert_eq!(dst.len(), src.len());
    for i in 0..dst.len() {
        dst[i] -= src[i];
    }
}
