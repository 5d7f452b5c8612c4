use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use numkit::diff::{central_difference, DEFAULT_STEP};
use numkit::linalg::{gauss_solve_in_place, gaussian_elimination};
use numkit::quad::{simpson, trapezoid, DEFAULT_SUBINTERVALS};
use numkit::root::{bisection, newton_raphson, RootSettings};
use numkit::DynMatrix;

// ---------------------------------------------------------------------------
// Helpers: diagonally dominant augmented systems
// ---------------------------------------------------------------------------

fn dominant_aug(n: usize) -> DynMatrix<f64> {
    DynMatrix::from_fn(n, n + 1, |i, j| {
        if j == n {
            (i + 1) as f64
        } else if i == j {
            (2 * n) as f64
        } else {
            1.0 / ((i + j + 1) as f64)
        }
    })
}

// ---------------------------------------------------------------------------
// Root finding
// ---------------------------------------------------------------------------

fn roots(c: &mut Criterion) {
    let mut g = c.benchmark_group("roots");
    let settings = RootSettings::default();

    g.bench_function("newton_raphson", |b| {
        b.iter(|| {
            newton_raphson(
                |x: f64| x * x - 4.0,
                |x: f64| 2.0 * x,
                black_box(1.0),
                &settings,
            )
        })
    });

    g.bench_function("bisection", |b| {
        b.iter(|| bisection(|x: f64| x * x - 4.0, black_box(0.0), black_box(5.0), &settings))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Quadrature and differentiation
// ---------------------------------------------------------------------------

fn quadrature(c: &mut Criterion) {
    let mut g = c.benchmark_group("quadrature_1000");

    g.bench_function("trapezoid", |b| {
        b.iter(|| trapezoid(|x: f64| x.sin(), 0.0, black_box(2.0), DEFAULT_SUBINTERVALS))
    });

    g.bench_function("simpson", |b| {
        b.iter(|| simpson(|x: f64| x.sin(), 0.0, black_box(2.0), DEFAULT_SUBINTERVALS))
    });

    g.finish();
}

fn differences(c: &mut Criterion) {
    c.bench_function("central_difference", |b| {
        b.iter(|| central_difference(|x: f64| x * x * x, black_box(2.0), DEFAULT_STEP))
    });
}

// ---------------------------------------------------------------------------
// Linear systems
// ---------------------------------------------------------------------------

fn linear(c: &mut Criterion) {
    let mut g = c.benchmark_group("gaussian_elimination");

    g.bench_function("array_3x4", |b| {
        let aug = [
            [2.0_f64, 1.0, -1.0, 8.0],
            [-3.0, -1.0, 2.0, -11.0],
            [-2.0, 1.0, 2.0, -3.0],
        ];
        b.iter(|| {
            let mut work = black_box(aug);
            let mut x = [0.0; 3];
            gauss_solve_in_place(&mut work, &mut x).map(|_| x)
        })
    });

    for n in [10usize, 50, 100] {
        let aug = dominant_aug(n);
        g.bench_function(format!("dyn_{n}"), |b| {
            b.iter(|| {
                let mut work = black_box(aug.clone());
                gaussian_elimination(&mut work)
            })
        });
    }

    g.finish();
}

criterion_group!(benches, roots, quadrature, differences, linear);
criterion_main!(benches);
