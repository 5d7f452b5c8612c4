//! Scalar root finding.
//!
//! - [`newton_raphson`] - Newton's method with a user-supplied derivative.
//!   Fails with [`RootError::DidNotConverge`] when the iteration budget runs out.
//! - [`bisection`] - interval halving on a sign-change bracket. Never fails
//!   after a valid bracket is accepted: budget exhaustion returns the current
//!   midpoint with [`RootResult::converged`] set to `false`.
//!
//! Both algorithms test convergence against a single absolute tolerance
//! (see [`RootSettings`]). Newton-Raphson tests the step delta
//! `|x_{k+1} - x_k|`; bisection tests the residual `|f(c)|` or the bracket
//! width `|b - a|`, whichever is satisfied first.
//!
//! Scalar functions are evaluated synchronously and possibly many times. They
//! must be deterministic and free of side effects; bisection reuses cached
//! endpoint values and silently desynchronizes from an impure function.

mod bisection;
mod newton;


pub use bisection::bisection;
pub use newton::newton_raphson;

/// Default convergence tolerance for `f64`.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default iteration budget.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Errors from root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootError {
    /// `|f'(x)|` fell below the tolerance during Newton-Raphson.
    DerivativeTooSmall,
    /// Newton-Raphson step delta never dropped below the tolerance.
    DidNotConverge,
    /// `f(a)` and `f(b)` have the same sign.
    InvalidBracket,
}

impl core::fmt::Display for RootError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RootError::DerivativeTooSmall => write!(f, "derivative is too close to zero"),
            RootError::DidNotConverge => write!(f, "method failed to converge"),
            RootError::InvalidBracket => {
                write!(f, "function values at bracket endpoints must have opposite signs")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RootError {}

/// Settings for scalar root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct RootSettings<T> {
    /// Magnitude below which a step delta, residual, or bracket width counts
    /// as converged. Also the Newton-Raphson derivative floor.
    pub tol: T,
    /// Iteration budget.
    pub max_iter: usize,
}

impl Default for RootSettings<f64> {
    fn default() -> Self {
        Self {
            tol: DEFAULT_TOLERANCE,
            max_iter: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl Default for RootSettings<f32> {
    fn default() -> Self {
        Self {
            tol: 1e-5,
            max_iter: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Result of a scalar root-finding algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult<T> {
    /// Approximate root.
    pub x: T,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Number of function and derivative evaluations.
    pub evals: usize,
    /// `false` only when bisection ran out of iterations and returned its
    /// best-effort midpoint.
    pub converged: bool,
}
