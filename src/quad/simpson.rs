use crate::traits::FloatScalar;

use super::QuadError;

/// Composite Simpson's rule over `n` equal subintervals of `[a, b]`.
///
/// Computes `h/3 · [f(a) + f(b) + Σ_{i=1}^{n-1} w_i·f(a + i·h)]` where
/// `w_i = 4` for odd `i` and `w_i = 2` for even `i`. Exact (up to rounding)
/// for polynomials of degree ≤ 3.
///
/// # Errors
///
/// Returns [`QuadError::InvalidSubdivisionCount`] if `n` is odd. The check
/// happens before `f` is evaluated. `n = 0` passes the check and yields a
/// non-finite result, as with [`trapezoid`](super::trapezoid).
///
/// # Example
///
/// ```
/// use numkit::quad::{simpson, QuadError};
///
/// let i = simpson(|x: f64| x * x * x, 0.0, 2.0, 2).unwrap();
/// assert!((i - 4.0).abs() < 1e-12);
///
/// assert_eq!(simpson(|x: f64| x, 0.0, 1.0, 999), Err(QuadError::InvalidSubdivisionCount));
/// ```
pub fn simpson<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    a: T,
    b: T,
    n: usize,
) -> Result<T, QuadError> {
    if n % 2 != 0 {
        tracing::debug!(n, "simpson: odd subinterval count");
        return Err(QuadError::InvalidSubdivisionCount);
    }

    let two = T::one() + T::one();
    let four = two + two;
    let h = (b - a) / T::from_count(n);
    let mut sum = f(a) + f(b);

    for i in 1..n {
        let x = a + T::from_count(i) * h;
        let w = if i % 2 == 0 { two } else { four };
        sum = sum + w * f(x);
    }

    tracing::trace!(n, h = ?h, "simpson");
    Ok(h * sum / (two + T::one()))
}
