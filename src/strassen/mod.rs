//! The recursive Strassen decomposition engine.
//!
//! One engine serves all three variants. A frame holds two square buffers of
//! power-of-two dimension `n` (the padding adapter guarantees that before the
//! first call). At or below the threshold it hands off to the naive kernel;
//! above it, it splits both inputs into quadrants by copy, forms the classic
//! ten S-terms, computes the seven M-products recursively, and recombines:
//!
//! ```text
//! M1 = (A11+A22)(B11+B22)    M5 = (A11+A12) B22
//! M2 = (A21+A22) B11         M6 = (A21−A11)(B11+B12)
//! M3 =  A11 (B12−B22)        M7 = (A12−A22)(B21+B22)
//! M4 =  A22 (B21−B11)
//!
//! C11 = M1+M4−M5+M7    C12 = M3+M5
//! C21 = M2+M4          C22 = M1+M3−M2+M6
//! ```
//!
//! The `fan_out` flag is the only concurrency control. When set, the seven
//! M-products run as one rayon fork-join over disjoint buffers; every
//! recursive call below that point passes `fan_out = false`, so parallelism
//! never nests deeper than one level. Seven in-flight tasks already saturate
//! a typical pool, and nested fan-out on shrinking subproblems costs more in
//! scheduling than it buys.

pub mod padding;

use crate::matrix::naive::matmul_naive;
use crate::matrix::ops::{add_assign, add_into, sub_assign, sub_into};

/// Compute `c = a * b` for square row-major buffers of dimension `n`.
///
/// `n` must be a power of two and `threshold` at least 1; the padding
/// adapter establishes both.
pub(crate) fn strassen_recursive(
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    n: usize,
    threshold: usize,
    fan_out: bool,
) {
    debug_assert!(n.is_power_of_two());
    debug_assert!(threshold >= 1);

    if n <= threshold {
        matmul_naive(a, b, c, n, n, n);
        return;
    }

    let mid = n / 2;
    let block = mid * mid;

    let (a11, a12, a21, a22) = split_quadrants(a, n, mid);
    let (b11, b12, b21, b22) = split_quadrants(b, n, mid);

    let (m1, m2, m3, m4, m5, m6, m7) = if fan_out {
        products_parallel(&a11, &a12, &a21, &a22, &b11, &b12, &b21, &b22, mid, threshold)
    } else {
        products_sequential(&a11, &a12, &a21, &a22, &b11, &b12, &b21, &b22, mid, threshold)
    };

    let mut c11 = vec![0.0; block];
    let mut c12 = vec![0.0; block];
    let mut c21 = vec![0.0; block];
    let mut c22 = vec![0.0; block];

    add_into(&mut c11, &m1, &m4);
    sub_assign(&mut c11, &m5);
    add_assign(&mut c11, &m7);

    add_into(&mut c12, &m3, &m5);

    add_into(&mut c21, &m2, &m4);

    add_into(&mut c22, &m1, &m3);
    sub_assign(&mut c22, &m2);
    add_assign(&mut c22, &m6);

    join_quadrants(c, &c11, &c12, &c21, &c22, n, mid);
}

/// The seven M-products, sequential path.
///
/// Runs M1..M7 in declared order and reuses two scratch buffers across all
/// seven S-term computations instead of allocating ten. Safe only because
/// nothing here runs concurrently; the parallel path must not share scratch.
#[allow(clippy::too_many_arguments)]
fn products_sequential(
    a11: &[f64],
    a12: &[f64],
    a21: &[f64],
    a22: &[f64],
    b11: &[f64],
    b12: &[f64],
    b21: &[f64],
    b22: &[f64],
    mid: usize,
    threshold: usize,
) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
    let block = mid * mid;

    let mut m1 = vec![0.0; block];
    let mut m2 = vec![0.0; block];
    let mut m3 = vec![0.0; block];
    let mut m4 = vec![0.0; block];
    let mut m5 = vec![0.0; block];
    let mut m6 = vec![0.0; block];
    let mut m7 = vec![0.0; block];

    let mut s1 = vec![0.0; block];
    let mut s2 = vec![0.0; block];

    add_into(&mut s1, a11, a22);
    add_into(&mut s2, b11, b22);
    strassen_recursive(&s1, &s2, &mut m1, mid, threshold, false);

    add_into(&mut s1, a21, a22);
    strassen_recursive(&s1, b11, &mut m2, mid, threshold, false);

    sub_into(&mut s1, b12, b22);
    strassen_recursive(a11, &s1, &mut m3, mid, threshold, false);

    sub_into(&mut s1, b21, b11);
    strassen_recursive(a22, &s1, &mut m4, mid, threshold, false);

    add_into(&mut s1, a11, a12);
    strassen_recursive(&s1, b22, &mut m5, mid, threshold, false);

    sub_into(&mut s1, a21, a11);
    add_into(&mut s2, b11, b12);
    strassen_recursive(&s1, &s2, &mut m6, mid, threshold, false);

    sub_into(&mut s1, a12, a22);
    add_into(&mut s2, b21, b22);
    strassen_recursive(&s1, &s2, &mut m7, mid, threshold, false);

    (m1, m2, m3, m4, m5, m6, m7)
}

/// The seven M-products as a single fork-join.
///
/// All ten S-terms get their own buffer here: each of the seven jobs owns
/// disjoint inputs and a disjoint output, so the jobs need no locks. The
/// nested joins put all seven on the pool at once; the outer join returning
/// is the barrier the combine step relies on. Every recursive call passes
/// `fan_out = false`.
#[allow(clippy::too_many_arguments)]
fn products_parallel(
    a11: &[f64],
    a12: &[f64],
    a21: &[f64],
    a22: &[f64],
    b11: &[f64],
    b12: &[f64],
    b21: &[f64],
    b22: &[f64],
    mid: usize,
    threshold: usize,
) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
    let block = mid * mid;

    let mut s1 = vec![0.0; block];
    let mut s2 = vec![0.0; block];
    let mut s3 = vec![0.0; block];
    let mut s4 = vec![0.0; block];
    let mut s5 = vec![0.0; block];
    let mut s6 = vec![0.0; block];
    let mut s7 = vec![0.0; block];
    let mut s8 = vec![0.0; block];
    let mut s9 = vec![0.0; block];
    let mut s10 = vec![0.0; block];

    add_into(&mut s1, a11, a22);
    add_into(&mut s2, b11, b22);
    add_into(&mut s3, a21, a22);
    sub_into(&mut s4, b12, b22);
    sub_into(&mut s5, b21, b11);
    add_into(&mut s6, a11, a12);
    sub_into(&mut s7, a21, a11);
    add_into(&mut s8, b11, b12);
    sub_into(&mut s9, a12, a22);
    add_into(&mut s10, b21, b22);

    let product = |x: &[f64], y: &[f64]| {
        let mut m = vec![0.0; block];
        strassen_recursive(x, y, &mut m, mid, threshold, false);
        m
    };

    let ((m1, m2), ((m3, m4), (m5, (m6, m7)))) = rayon::join(
        || rayon::join(|| product(&s1, &s2), || product(&s3, b11)),
        || {
            rayon::join(
                || rayon::join(|| product(a11, &s4), || product(a22, &s5)),
                || {
                    rayon::join(
                        || product(&s6, b22),
                        || rayon::join(|| product(&s7, &s8), || product(&s9, &s10)),
                    )
                },
            )
        },
    );

    (m1, m2, m3, m4, m5, m6, m7)
}

/// Copy the four `mid`×`mid` blocks of an `n`×`n` buffer into owned
/// quadrant buffers.
fn split_quadrants(src: &[f64], n: usize, mid: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
    let block = mid * mid;
    let mut q11 = vec![0.0; block];
    let mut q12 = vec![0.0; block];
    let mut q21 = vec![0.0; block];
    let mut q22 = vec![0.0; block];

    for i in 0..mid {
        for j in 0..mid {
            q11[i * mid + j] = src[i * n + j];
            q12[i * mid + j] = src[i * n + j + mid];
            q21[i * mid + j] = src[(i + mid) * n + j];
            q22[i * mid + j] = src[(i + mid) * n + j + mid];
        }
    }

    (q11, q12, q21, q22)
}

/// Reassemble an `n`×`n` buffer from four `mid`×`mid` quadrants.
fn join_quadrants(
    dst: &mut [f64],
    c11: &[f64],
    c12: &[f64],
    c21: &[f64],
    c22: &[f64],
    n: usize,
    mid: usize,
) {
    for i in 0..mid {
        for j in 0..mid {
            dst[i * n + j] = c11[i * mid + j];
            dst[i * n + j + mid] = c12[i * mid + j];
            dst[(i + mid) * n + j] = c21[i * mid + j];
            dst[(i + mid) * n + j + mid] = c22[i * mid + j];
        }
    }
}
