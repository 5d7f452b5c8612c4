//! Dense linear systems by Gaussian elimination with partial pivoting.
//!
//! The solvers take an augmented matrix `[A | b]` of shape `n × (n+1)` through
//! the [`MatrixMut`](crate::traits::MatrixMut) trait, so fixed arrays
//! `[[T; N + 1]; N]` and [`DynMatrix`](crate::DynMatrix) both work.
//!
//! - [`gauss_solve_in_place`] - no-alloc; writes the solution into a slice.
//! - [`gaussian_elimination`] - returns the solution as a `Vec` (`alloc`).
//!
//! Both reduce the augmented matrix in place. On return (success or error)
//! the caller's matrix holds partially or fully eliminated rows in pivot
//! order; clone it first if the original system is needed afterwards.
//!
//! # Singularity threshold
//!
//! A pivot with magnitude below [`SINGULAR_PIVOT_TOL`] (`1e-10`) after row
//! selection is treated as zero. The test is absolute, not relative to the
//! scale of the matrix: a well-conditioned system whose entries are all
//! around `1e-11` is reported singular, and a badly scaled near-singular
//! system with large entries can slip through. Rescale such systems before
//! solving.

mod gauss;


pub use gauss::gauss_solve_in_place;
#[cfg(feature = "alloc")]
pub use gauss::gaussian_elimination;

/// Absolute pivot magnitude below which the system is treated as singular.
pub const SINGULAR_PIVOT_TOL: f64 = 1e-10;

/// Errors from linear system solvers.
///
/// ```
/// use numkit::linalg::{gaussian_elimination, LinalgError};
///
/// let mut singular = [[1.0_f64, 2.0, 3.0], [2.0, 4.0, 6.0]];
/// assert_eq!(gaussian_elimination(&mut singular).unwrap_err(), LinalgError::SingularMatrix);
///
/// let mut square = [[1.0_f64, 2.0], [3.0, 4.0]];
/// assert_eq!(gaussian_elimination(&mut square).unwrap_err(), LinalgError::NotAugmentedSquare);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// Column count is not row count + 1.
    NotAugmentedSquare,
    /// Pivot magnitude fell below [`SINGULAR_PIVOT_TOL`].
    SingularMatrix,
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::NotAugmentedSquare => write!(f, "matrix must be augmented (n x n+1)"),
            LinalgError::SingularMatrix => write!(f, "matrix is singular or nearly singular"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}
