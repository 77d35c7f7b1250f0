use strassen::{
    DEFAULT_THRESHOLD, MatmulError, Matrix, hybrid_multiply, naive_multiply, parallel_multiply,
    pure_recursive_multiply,
};

fn fill(rows: usize, cols: usize, modulus: usize) -> Matrix {
    let data = (0..rows * cols).map(|i| (i % modulus) as f64).collect();
    Matrix::from_vec(rows, cols, data).unwrap()
}

fn assert_matrices_equal(expected: &Matrix, actual: &Matrix, name: &str) {
    assert_eq!(expected.rows, actual.rows, "{}: row count mismatch", name);
    assert_eq!(expected.cols, actual.cols, "{}: col count mismatch", name);
    for i in 0..expected.data.len() {
        assert!(
            (expected.data[i] - actual.data[i]).abs() < 1e-8,
            "{}: mismatch at index {}: expected {}, got {}",
            name,
            i,
            expected.data[i],
            actual.data[i]
        );
    }
}

// ============================================================
// Small matrix tests (edge case handling)
// ============================================================

#[test]
fn test_2x2_all_variants() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
    let expected = vec![19.0, 22.0, 43.0, 50.0];

    assert_eq!(naive_multiply(&a, &b).unwrap().data, expected);
    assert_eq!(pure_recursive_multiply(&a, &b).unwrap().data, expected);
    assert_eq!(hybrid_multiply(&a, &b, DEFAULT_THRESHOLD).unwrap().data, expected);
    assert_eq!(parallel_multiply(&a, &b, DEFAULT_THRESHOLD).unwrap().data, expected);
}

#[test]
fn test_2x3_times_3x2() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();
    let expected = vec![58.0, 64.0, 139.0, 154.0];

    assert_eq!(naive_multiply(&a, &b).unwrap().data, expected);
    assert_eq!(pure_recursive_multiply(&a, &b).unwrap().data, expected);
    assert_eq!(hybrid_multiply(&a, &b, 2).unwrap().data, expected);
    assert_eq!(parallel_multiply(&a, &b, 2).unwrap().data, expected);
}

#[test]
fn test_1x1_scalar_fast_path() {
    let a = Matrix::from_vec(1, 1, vec![3.0]).unwrap();
    let b = Matrix::from_vec(1, 1, vec![4.0]).unwrap();

    for c in [
        naive_multiply(&a, &b).unwrap(),
        pure_recursive_multiply(&a, &b).unwrap(),
        hybrid_multiply(&a, &b, DEFAULT_THRESHOLD).unwrap(),
        parallel_multiply(&a, &b, DEFAULT_THRESHOLD).unwrap(),
    ] {
        assert_eq!((c.rows, c.cols), (1, 1));
        assert_eq!(c.data, vec![12.0]);
    }
}

// ============================================================
// Padding round-trips
// ============================================================

#[test]
fn test_3x3_pads_invisibly() {
    // 3×3 gets padded to 4×4 internally; the caller sees a 3×3 result.
    let a = fill(3, 3, 10);
    let b = fill(3, 3, 7);
    let expected = naive_multiply(&a, &b).unwrap();

    for (name, c) in [
        ("pure", pure_recursive_multiply(&a, &b).unwrap()),
        ("hybrid", hybrid_multiply(&a, &b, 2).unwrap()),
        ("parallel", parallel_multiply(&a, &b, 2).unwrap()),
    ] {
        assert_eq!((c.rows, c.cols), (3, 3), "{}: wrong output shape", name);
        assert_matrices_equal(&expected, &c, name);
    }
}

#[test]
fn test_non_square_shapes() {
    let test_cases = [
        (32, 64, 48),  // wide result
        (64, 32, 48),  // tall result
        (100, 50, 75), // odd sizes
        (13, 17, 19),  // primes
        (1, 9, 5),     // single row
        (5, 9, 1),     // single column
    ];

    for (m, n, k) in test_cases {
        let a = fill(m, k, 10);
        let b = fill(k, n, 10);
        let expected = naive_multiply(&a, &b).unwrap();

        let name = format!("{}x{}x{}", m, n, k);
        assert_matrices_equal(
            &expected,
            &pure_recursive_multiply(&a, &b).unwrap(),
            &format!("pure_{}", name),
        );
        assert_matrices_equal(
            &expected,
            &hybrid_multiply(&a, &b, DEFAULT_THRESHOLD).unwrap(),
            &format!("hybrid_{}", name),
        );
        assert_matrices_equal(
            &expected,
            &parallel_multiply(&a, &b, DEFAULT_THRESHOLD).unwrap(),
            &format!("parallel_{}", name),
        );
    }
}

// ============================================================
// Threshold behavior
// ============================================================

#[test]
fn test_threshold_at_least_n_is_exactly_naive() {
    // With threshold >= padded size the engine is a single naive kernel
    // call, so the result must match the baseline bit for bit.
    let size = 32;
    let a = fill(size, size, 17);
    let b = fill(size, size, 13);
    let expected = naive_multiply(&a, &b).unwrap();

    assert_eq!(hybrid_multiply(&a, &b, size).unwrap().data, expected.data);
    assert_eq!(parallel_multiply(&a, &b, size).unwrap().data, expected.data);
}

#[test]
fn test_correctness_independent_of_threshold() {
    let size = 20;
    let a = fill(size, size, 17);
    let b = fill(size, size, 13);
    let expected = naive_multiply(&a, &b).unwrap();

    for threshold in [1, 2, DEFAULT_THRESHOLD, size] {
        assert_matrices_equal(
            &expected,
            &hybrid_multiply(&a, &b, threshold).unwrap(),
            &format!("hybrid_t{}", threshold),
        );
        assert_matrices_equal(
            &expected,
            &parallel_multiply(&a, &b, threshold).unwrap(),
            &format!("parallel_t{}", threshold),
        );
    }
}

#[test]
fn test_threshold_zero_is_clamped() {
    let a = fill(4, 4, 5);
    let b = fill(4, 4, 3);
    let expected = naive_multiply(&a, &b).unwrap();

    assert_matrices_equal(&expected, &hybrid_multiply(&a, &b, 0).unwrap(), "hybrid_t0");
}

// ============================================================
// Parallel / sequential agreement
// ============================================================

#[test]
fn test_parallel_matches_hybrid_bitwise() {
    // Fan-out only changes who runs the seven products, not the formulas or
    // the summation order inside the base kernel, so at equal threshold the
    // parallel and sequential schedules must agree bit for bit. Parallelism
    // is deliberately limited to the outermost call; deeper frames run
    // sequentially in both variants.
    for (size, threshold) in [(37, 8), (64, 8), (100, 16), (128, DEFAULT_THRESHOLD)] {
        let a = fill(size, size, 17);
        let b = fill(size, size, 13);

        let sequential = hybrid_multiply(&a, &b, threshold).unwrap();
        let parallel = parallel_multiply(&a, &b, threshold).unwrap();

        assert_eq!(
            sequential.data, parallel.data,
            "size {} threshold {}: schedules diverged",
            size, threshold
        );
    }
}

#[test]
fn test_pure_recursive_matches_naive() {
    let size = 8;
    let a = fill(size, size, 9);
    let b = fill(size, size, 11);

    let expected = naive_multiply(&a, &b).unwrap();
    assert_matrices_equal(&expected, &pure_recursive_multiply(&a, &b).unwrap(), "pure_8x8");
}

// ============================================================
// Error handling
// ============================================================

#[test]
fn test_dimension_mismatch_every_entry_point() {
    let a = fill(2, 3, 10);
    let b = fill(2, 2, 10);
    let expected = MatmulError::DimensionMismatch {
        a_rows: 2,
        a_cols: 3,
        b_rows: 2,
        b_cols: 2,
    };

    assert_eq!(naive_multiply(&a, &b).unwrap_err(), expected);
    assert_eq!(pure_recursive_multiply(&a, &b).unwrap_err(), expected);
    assert_eq!(hybrid_multiply(&a, &b, DEFAULT_THRESHOLD).unwrap_err(), expected);
    assert_eq!(parallel_multiply(&a, &b, DEFAULT_THRESHOLD).unwrap_err(), expected);

    assert!(
        expected.to_string().starts_with("Incompatible matrix dimensions"),
        "unexpected message: {}",
        expected
    );
}

#[test]
fn test_from_vec_rejects_bad_length() {
    let err = Matrix::from_vec(2, 3, vec![1.0; 5]).unwrap_err();
    assert_eq!(
        err,
        MatmulError::BufferSize {
            len: 5,
            rows: 2,
            cols: 3
        }
    );
}

#[test]
fn test_empty_matrix_product() {
    let a = Matrix::new(0, 4);
    let b = Matrix::new(4, 3);

    let c = hybrid_multiply(&a, &b, DEFAULT_THRESHOLD).unwrap();
    assert_eq!((c.rows, c.cols), (0, 3));
    assert!(c.data.is_empty());
}
