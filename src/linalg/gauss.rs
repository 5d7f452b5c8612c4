use crate::linalg::{LinalgError, SINGULAR_PIVOT_TOL};
use crate::traits::{FloatScalar, MatrixMut};

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

/// Solve `Ax = b` from the augmented matrix `[A | b]`, in place.
///
/// Forward elimination with partial pivoting: for each column `i`, the row
/// among `i..n` with the largest `|a[k][i]|` is swapped into position `i`
/// (ties keep the topmost row). Rows below are reduced by
/// `factor = a[k][i] / a[i][i]` over columns `i..=n`. Back-substitution then
/// writes `x[i] = (a[i][n] - Σ_{j>i} a[i][j]·x[j]) / a[i][i]` from the last
/// row up.
///
/// `aug` is consumed as scratch space: on return it holds the reduced
/// upper-triangular system (or a partially reduced one on error).
///
/// # Errors
///
/// Returns [`LinalgError::NotAugmentedSquare`] unless `aug` is `n × (n+1)`.
/// Returns [`LinalgError::SingularMatrix`] if a selected pivot has magnitude
/// below [`SINGULAR_PIVOT_TOL`]. `x` is left untouched on error.
///
/// # Panics
///
/// Panics if `x.len()` differs from the number of rows.
///
/// # Example
///
/// ```
/// use numkit::linalg::gauss_solve_in_place;
///
/// // 2x + 3y = 7, 4x + y = 6
/// let mut aug = [[2.0_f64, 3.0, 7.0], [4.0, 1.0, 6.0]];
/// let mut x = [0.0; 2];
/// gauss_solve_in_place(&mut aug, &mut x).unwrap();
/// assert!((x[0] - 1.1).abs() < 1e-12);
/// assert!((x[1] - 1.6).abs() < 1e-12);
/// ```
pub fn gauss_solve_in_place<T: FloatScalar>(
    aug: &mut impl MatrixMut<T>,
    x: &mut [T],
) -> Result<(), LinalgError> {
    let n = aug.nrows();
    if aug.ncols() != n + 1 {
        tracing::debug!(rows = n, cols = aug.ncols(), "gaussian elimination: not augmented square");
        return Err(LinalgError::NotAugmentedSquare);
    }
    assert_eq!(n, x.len(), "solution slice length must match row count");

    let pivot_tol = T::from_f64(SINGULAR_PIVOT_TOL);

    for i in 0..n {
        // Partial pivoting: largest magnitude in column i at or below the diagonal
        let mut max_row = i;
        let mut max_val = aug.get(i, i).abs();
        for k in (i + 1)..n {
            let val = aug.get(k, i).abs();
            if val > max_val {
                max_val = val;
                max_row = k;
            }
        }

        if max_row != i {
            tracing::trace!(column = i, from = max_row, "swap pivot row");
            aug.swap_rows(i, max_row, i);
        }

        let pivot = *aug.get(i, i);
        if pivot.abs() < pivot_tol {
            tracing::debug!(column = i, pivot = ?pivot, "gaussian elimination: singular matrix");
            return Err(LinalgError::SingularMatrix);
        }

        for k in (i + 1)..n {
            let factor = *aug.get(k, i) / pivot;
            for j in i..=n {
                let v = *aug.get(i, j);
                let target = aug.get_mut(k, j);
                *target = *target - factor * v;
            }
        }
    }

    for i in (0..n).rev() {
        let mut sum = *aug.get(i, n);
        for j in (i + 1)..n {
            sum = sum - *aug.get(i, j) * x[j];
        }
        x[i] = sum / *aug.get(i, i);
    }

    tracing::debug!(n, "gaussian elimination solved");
    Ok(())
}

/// Solve `Ax = b` from the augmented matrix `[A | b]` and return `x`.
///
/// Allocating wrapper over [`gauss_solve_in_place`]; `aug` is reduced in
/// place in the same way.
///
/// # Errors
///
/// Same as [`gauss_solve_in_place`].
///
/// # Example
///
/// ```
/// use numkit::linalg::gaussian_elimination;
///
/// let mut aug = [
///     [2.0_f64, 1.0, -1.0, 8.0],
///     [-3.0, -1.0, 2.0, -11.0],
///     [-2.0, 1.0, 2.0, -3.0],
/// ];
/// let x = gaussian_elimination(&mut aug).unwrap(); // [2, 3, -1]
/// assert!((x[0] - 2.0).abs() < 1e-12);
/// assert!((x[1] - 3.0).abs() < 1e-12);
/// assert!((x[2] + 1.0).abs() < 1e-12);
/// ```
#[cfg(feature = "alloc")]
pub fn gaussian_elimination<T: FloatScalar>(
    aug: &mut impl MatrixMut<T>,
) -> Result<Vec<T>, LinalgError> {
    let mut x = vec![T::zero(); aug.nrows()];
    gauss_solve_in_place(aug, &mut x)?;
    Ok(x)
}
