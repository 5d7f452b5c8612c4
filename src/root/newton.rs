use crate::traits::FloatScalar;

use super::{RootError, RootResult, RootSettings};

/// Newton-Raphson method for scalar root finding.
///
/// Iterates `x_{k+1} = x_k - f(x_k) / f'(x_k)` from `x0` and returns
/// `x_{k+1}` as soon as `|x_{k+1} - x_k| < tol`. The residual `|f(x)|` is not
/// tested. Convergence is local: quadratic near a simple root, not guaranteed
/// from an arbitrary starting point.
///
/// # Arguments
///
/// * `f` - function whose root is sought
/// * `df` - derivative of `f`
/// * `x0` - initial guess
/// * `settings` - tolerance and iteration budget
///
/// # Errors
///
/// Returns [`RootError::DerivativeTooSmall`] if `|f'(x_k)| < tol` at any
/// iterate (including `x0`).
/// Returns [`RootError::DidNotConverge`] if `max_iter` steps elapse without
/// satisfying the step-delta test.
///
/// # Example
///
/// ```
/// use numkit::root::{newton_raphson, RootSettings};
///
/// let r = newton_raphson(|x: f64| x * x - 4.0, |x| 2.0 * x, 1.0, &RootSettings::default()).unwrap();
/// assert!((r.x - 2.0).abs() < 1e-10);
/// ```
pub fn newton_raphson<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    mut df: impl FnMut(T) -> T,
    x0: T,
    settings: &RootSettings<T>,
) -> Result<RootResult<T>, RootError> {
    let mut x = x0;
    let mut evals = 0usize;

    for iter in 0..settings.max_iter {
        let fx = f(x);
        let dfx = df(x);
        evals += 2;

        if dfx.abs() < settings.tol {
            tracing::debug!(iteration = iter, x = ?x, dfx = ?dfx, "newton-raphson: derivative too small");
            return Err(RootError::DerivativeTooSmall);
        }

        let x_new = x - fx / dfx;
        tracing::trace!(iteration = iter, x = ?x_new, step = ?(x_new - x), "newton-raphson step");

        if (x_new - x).abs() < settings.tol {
            tracing::debug!(iterations = iter + 1, root = ?x_new, "newton-raphson converged");
            return Ok(RootResult {
                x: x_new,
                iterations: iter + 1,
                evals,
                converged: true,
            });
        }

        x = x_new;
    }

    tracing::debug!(max_iter = settings.max_iter, x = ?x, "newton-raphson did not converge");
    Err(RootError::DidNotConverge)
}
