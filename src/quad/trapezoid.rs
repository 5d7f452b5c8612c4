use crate::traits::FloatScalar;

/// Composite trapezoidal rule over `n` equal subintervals of `[a, b]`.
///
/// Computes `h · [½(f(a) + f(b)) + Σ_{i=1}^{n-1} f(a + i·h)]` with
/// `h = (b - a) / n`, using exactly `n + 1` evaluations of `f`.
///
/// `n` is not validated. `n = 0` gives an infinite or NaN step and therefore a
/// non-finite result; choosing a positive `n` is the caller's responsibility.
/// `b < a` yields the negated integral.
///
/// # Example
///
/// ```
/// use numkit::quad::trapezoid;
///
/// // Exact for linear functions
/// let i = trapezoid(|x: f64| 3.0 * x + 1.0, 0.0, 2.0, 4);
/// assert!((i - 8.0).abs() < 1e-12);
/// ```
pub fn trapezoid<T: FloatScalar>(mut f: impl FnMut(T) -> T, a: T, b: T, n: usize) -> T {
    let h = (b - a) / T::from_count(n);
    let half = T::one() / (T::one() + T::one());
    let mut sum = half * (f(a) + f(b));

    for i in 1..n {
        sum = sum + f(a + T::from_count(i) * h);
    }

    tracing::trace!(n, h = ?h, "trapezoid");
    h * sum
}
