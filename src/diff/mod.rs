//! Finite-difference derivative estimates for scalar functions.
//!
//! Fixed-step estimators of `f'(x)`:
//!
//! | Scheme | Formula | Truncation error |
//! |---|---|---|
//! | [`forward_difference`] | `(f(x+h) - f(x)) / h` | `O(h)` |
//! | [`backward_difference`] | `(f(x) - f(x-h)) / h` | `O(h)` |
//! | [`central_difference`] | `(f(x+h) - f(x-h)) / 2h` | `O(h²)` |
//!
//! No adaptive step sizing is performed. [`DEFAULT_STEP`] (`1e-8`) balances
//! truncation error against floating-point cancellation for `f64`; it is far
//! too small for `f32`, where a step near `1e-3` is appropriate.
//!
//! # Example
//!
//! ```
//! use numkit::diff::{central_difference, forward_difference, DEFAULT_STEP};
//!
//! let cube = |x: f64| x * x * x;
//! let c = central_difference(cube, 2.0, DEFAULT_STEP);
//! let f = forward_difference(cube, 2.0, DEFAULT_STEP);
//! assert!((c - 12.0).abs() < 1e-6);
//! assert!((c - 12.0).abs() <= (f - 12.0).abs());
//! ```


use crate::traits::FloatScalar;

/// Default step size for `f64`.
pub const DEFAULT_STEP: f64 = 1e-8;

/// Finite-difference scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difference {
    /// `(f(x+h) - f(x)) / h`
    Forward,
    /// `(f(x) - f(x-h)) / h`
    Backward,
    /// `(f(x+h) - f(x-h)) / 2h`
    Central,
}

impl Difference {
    /// Estimate `f'(x)` with step `h` using this scheme.
    ///
    /// ```
    /// use numkit::diff::{Difference, DEFAULT_STEP};
    ///
    /// let d = Difference::Central.derivative(|x: f64| x.sin(), 0.0, DEFAULT_STEP);
    /// assert!((d - 1.0).abs() < 1e-7);
    /// ```
    pub fn derivative<T: FloatScalar>(self, f: impl FnMut(T) -> T, x: T, h: T) -> T {
        match self {
            Difference::Forward => forward_difference(f, x, h),
            Difference::Backward => backward_difference(f, x, h),
            Difference::Central => central_difference(f, x, h),
        }
    }

    /// Order of the leading truncation error term in `h`.
    pub fn order(self) -> u32 {
        match self {
            Difference::Forward | Difference::Backward => 1,
            Difference::Central => 2,
        }
    }
}

/// Forward difference `(f(x+h) - f(x)) / h`.
pub fn forward_difference<T: FloatScalar>(mut f: impl FnMut(T) -> T, x: T, h: T) -> T {
    (f(x + h) - f(x)) / h
}

/// Backward difference `(f(x) - f(x-h)) / h`.
pub fn backward_difference<T: FloatScalar>(mut f: impl FnMut(T) -> T, x: T, h: T) -> T {
    (f(x) - f(x - h)) / h
}

/// Central difference `(f(x+h) - f(x-h)) / 2h`.
///
/// Second-order accurate: exact for quadratics up to rounding.
pub fn central_difference<T: FloatScalar>(mut f: impl FnMut(T) -> T, x: T, h: T) -> T {
    (f(x + h) - f(x - h)) / ((T::one() + T::one()) * h)
}
