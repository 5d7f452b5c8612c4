//! Composite Newton-Cotes quadrature over equal subintervals.
//!
//! - [`trapezoid`] - composite trapezoidal rule, `O(h²)` error.
//! - [`simpson`] - composite Simpson's rule, `O(h⁴)` error; exact for
//!   polynomials of degree ≤ 3. Requires an even subinterval count.
//!
//! Both rules evaluate `f` at the `n + 1` equally spaced nodes
//! `a + i·h`, `h = (b - a) / n`. Pass [`DEFAULT_SUBINTERVALS`] for the
//! conventional default of 1000.
//!
//! # Example
//!
//! ```
//! use numkit::quad::{simpson, trapezoid, DEFAULT_SUBINTERVALS};
//!
//! let t = trapezoid(|x: f64| x * x, 0.0, 2.0, DEFAULT_SUBINTERVALS);
//! let s = simpson(|x: f64| x * x, 0.0, 2.0, DEFAULT_SUBINTERVALS).unwrap();
//! assert!((t - 8.0 / 3.0).abs() < 1e-3);
//! assert!((s - 8.0 / 3.0).abs() < (t - 8.0 / 3.0).abs());
//! ```

mod simpson;
mod trapezoid;


pub use simpson::simpson;
pub use trapezoid::trapezoid;

/// Default number of subintervals.
pub const DEFAULT_SUBINTERVALS: usize = 1000;

/// Errors from quadrature rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadError {
    /// Simpson's rule was given an odd number of subintervals.
    InvalidSubdivisionCount,
}

impl core::fmt::Display for QuadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            QuadError::InvalidSubdivisionCount => {
                write!(f, "number of subintervals must be even")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QuadError {}
