//! Benchmark runner comparing the multiply variants.

use std::time::Instant;
use strassen::{
    DEFAULT_THRESHOLD, Matrix, hybrid_multiply, naive_multiply, parallel_multiply,
    pure_recursive_multiply,
};

fn main() {
    println!("=== Strassen Matrix Multiplication Benchmark ===\n");

    let sizes = [128, 256, 512];
    let iterations = 3;

    println!(
        "Threads: {}, threshold: {}\n",
        rayon::current_num_threads(),
        DEFAULT_THRESHOLD
    );

    for &size in &sizes {
        println!("Matrix: {}×{}", size, size);
        println!("{}", "-".repeat(50));

        let a = fill_matrix(size, size, 100);
        let b = fill_matrix(size, size, 100);

        let mut results: Vec<(&str, (f64, f64))> = vec![
            ("Naive (i-j-k)", bench_fn(&a, &b, iterations, naive_multiply)),
            (
                "Hybrid (t=64)",
                bench_fn(&a, &b, iterations, |a, b| {
                    hybrid_multiply(a, b, DEFAULT_THRESHOLD)
                }),
            ),
            (
                "Parallel (t=64)",
                bench_fn(&a, &b, iterations, |a, b| {
                    parallel_multiply(a, b, DEFAULT_THRESHOLD)
                }),
            ),
        ];

        // Recursing to 1×1 is orders of magnitude slower; only worth
        // demonstrating once.
        if size == sizes[0] {
            results.push((
                "Pure recursive",
                bench_fn(&a, &b, iterations, pure_recursive_multiply),
            ));
        }

        let baseline_time = results[0].1.0;
        for (i, (name, (time_ms, gflops))) in results.iter().enumerate() {
            let speedup = baseline_time / time_ms;
            println!(
                "{}. {:16} {:8.2} ms  {:6.2} GFLOPS  ({:.1}×)",
                i + 1,
                name,
                time_ms,
                gflops,
                speedup
            );
        }
        println!();
    }
}

fn fill_matrix(rows: usize, cols: usize, modulus: usize) -> Matrix {
    let data = (0..rows * cols).map(|i| (i % modulus) as f64).collect();
    Matrix::from_vec(rows, cols, data).unwrap()
}

/// Benchmark one multiply variant, returning (avg ms, GFLOPS).
fn bench_fn<F>(a: &Matrix, b: &Matrix, iterations: usize, f: F) -> (f64, f64)
where
    F: Fn(&Matrix, &Matrix) -> strassen::Result<Matrix>,
{
    // Warmup
    f(a, b).unwrap();

    let mut total = 0.0;
    for _ in 0..iterations {
        let start = Instant::now();
        let c = f(a, b).unwrap();
        total += start.elapsed().as_secs_f64();
        std::hint::black_box(c);
    }

    let avg = total / iterations as f64;
    let flops = 2.0 * (a.rows * b.cols * a.cols) as f64;
    (avg * 1000.0, flops / avg / 1e9)
}
