use crate::traits::FloatScalar;

use super::{RootError, RootResult, RootSettings};

/// Bisection method for bracketed root finding.
///
/// Repeatedly halves `[a, b]`, keeping the half whose endpoints still bracket
/// a sign change. Each step evaluates `f` once, at the midpoint `c`; the
/// retained endpoint's function value is cached rather than recomputed.
///
/// Returns the midpoint `c` as soon as `|f(c)| < tol` or `|b - a| < tol`.
/// If `max_iter` halvings elapse without either test passing, the current
/// midpoint is returned anyway with [`RootResult::converged`] set to `false`.
/// Unlike [`newton_raphson`](super::newton_raphson), exhaustion is not an
/// error: the root still lies within half the final bracket width.
///
/// # Errors
///
/// Returns [`RootError::InvalidBracket`] if `f(a) * f(b) > 0`.
///
/// # Zero at the left endpoint
///
/// A bracket with `f(a) == 0` or `f(b) == 0` passes the sign check, but
/// narrowing keeps `[a, c]` only when `f(a) * f(c) < 0`. With `f(a) == 0` that
/// product is zero, so every step keeps `[c, b]` and the search converges on
/// `b` (reported as `converged`) instead of the root at `a`. Check the
/// endpoints yourself when a root may sit exactly at `a`. A zero at `b` is
/// found normally.
///
/// # Example
///
/// ```
/// use numkit::root::{bisection, RootSettings};
///
/// let r = bisection(|x: f64| x * x - 4.0, 0.0, 5.0, &RootSettings::default()).unwrap();
/// assert!((r.x - 2.0).abs() < 1e-9);
/// assert!(r.converged);
/// ```
pub fn bisection<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    a: T,
    b: T,
    settings: &RootSettings<T>,
) -> Result<RootResult<T>, RootError> {
    let mut a = a;
    let mut b = b;
    let mut fa = f(a);
    let fb = f(b);
    let mut evals = 2usize;

    if fa * fb > T::zero() {
        tracing::debug!(a = ?a, b = ?b, fa = ?fa, fb = ?fb, "bisection: invalid bracket");
        return Err(RootError::InvalidBracket);
    }

    let two = T::one() + T::one();

    for iter in 0..settings.max_iter {
        let c = (a + b) / two;
        let fc = f(c);
        evals += 1;
        tracing::trace!(iteration = iter, a = ?a, b = ?b, c = ?c, fc = ?fc, "bisection step");

        if fc.abs() < settings.tol || (b - a).abs() < settings.tol {
            tracing::debug!(iterations = iter + 1, root = ?c, "bisection converged");
            return Ok(RootResult {
                x: c,
                iterations: iter + 1,
                evals,
                converged: true,
            });
        }

        if fa * fc < T::zero() {
            b = c;
        } else {
            a = c;
            fa = fc;
        }
    }

    let c = (a + b) / two;
    tracing::warn!(
        max_iter = settings.max_iter,
        midpoint = ?c,
        width = ?(b - a),
        "bisection exhausted its iteration budget, returning best-effort midpoint"
    );
    Ok(RootResult {
        x: c,
        iterations: settings.max_iter,
        evals,
        converged: false,
    })
}
