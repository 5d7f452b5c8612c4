//! # numkit
//!
//! Pure-Rust numerical methods over real floats, no-std compatible: scalar
//! root finding, composite quadrature, finite-difference derivatives, and
//! dense linear solves by Gaussian elimination.
//!
//! ## Quick start
//!
//! ```
//! use numkit::root::{bisection, newton_raphson, RootSettings};
//! use numkit::linalg::gaussian_elimination;
//!
//! // Root of x² - 4
//! let settings = RootSettings::default();
//! let r = newton_raphson(|x: f64| x * x - 4.0, |x| 2.0 * x, 1.0, &settings).unwrap();
//! assert!((r.x - 2.0).abs() < 1e-10);
//! let r = bisection(|x: f64| x * x - 4.0, 0.0, 5.0, &settings).unwrap();
//! assert!((r.x - 2.0).abs() < 1e-9);
//!
//! // Solve 2x + 3y = 7, 4x + y = 6
//! let mut aug = [[2.0_f64, 3.0, 7.0], [4.0, 1.0, 6.0]];
//! let x = gaussian_elimination(&mut aug).unwrap();
//! assert!((x[0] - 1.1).abs() < 1e-12 && (x[1] - 1.6).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`root`] - Newton-Raphson ([`root::newton_raphson`]) and bisection
//!   ([`root::bisection`]) with [`root::RootSettings`] (tolerance `1e-10`,
//!   100 iterations by default).
//!
//! - [`quad`] - composite trapezoidal ([`quad::trapezoid`]) and Simpson
//!   ([`quad::simpson`]) rules over equal subintervals.
//!
//! - [`diff`] - forward, backward, and central finite differences with a
//!   fixed step ([`diff::DEFAULT_STEP`] = `1e-8`).
//!
//! - [`linalg`] - Gaussian elimination with partial pivoting on an augmented
//!   matrix `[A | b]`. Works on fixed arrays without allocation.
//!
//! - [`dynmatrix`] - heap-allocated `DynMatrix<T>` with runtime dimensions
//!   (requires `alloc` feature, included with `std`).
//!
//! - [`traits`] - [`FloatScalar`] element trait and the [`MatrixRef`] /
//!   [`MatrixMut`] grid access traits.
//!
//! ## Scalar functions
//!
//! Every algorithm takes the function under study as a closure
//! `impl FnMut(T) -> T`, borrowed for one call. Functions are evaluated
//! synchronously, up to `O(n)` or `O(max_iter)` times, and must be
//! deterministic and side-effect free for repeatable results. Nothing in
//! the type system enforces this.
//!
//! ## Logging
//!
//! Algorithms emit [`tracing`] events: `trace` per iteration, `debug` on
//! convergence and on every error, `warn` when bisection returns a
//! best-effort midpoint. No subscriber is installed.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Implies `alloc`. Hardware FPU via system libm, `std::error::Error` impls |
//! | `alloc`   | via std  | `DynMatrix` and the `Vec`-returning solver |
//! | (none)    | baseline | Pure-Rust `libm` float fallback, always enabled on `num-traits` |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod diff;
#[cfg(feature = "alloc")]
pub mod dynmatrix;
pub mod linalg;
pub mod quad;
pub mod root;
pub mod traits;

#[cfg(feature = "alloc")]
pub use dynmatrix::{DimensionMismatch, DynMatrix};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
