use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::linalg::{gaussian_elimination, LinalgError};
use crate::traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};

/// Dimension mismatch error for fallible constructors.
///
/// Returned when building a `DynMatrix` from ragged rows, or when a
/// right-hand side does not match the coefficient matrix.
///
/// # Example
///
/// ```
/// use numkit::DynMatrix;
///
/// let ragged = vec![vec![1.0_f64, 2.0, 3.0], vec![4.0, 5.0]];
/// let err = DynMatrix::try_from(ragged).unwrap_err();
/// assert_eq!(err.expected, (2, 3));
/// assert_eq!(err.got, (2, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionMismatch {
    /// Expected `(rows, cols)`.
    pub expected: (usize, usize),
    /// Got `(rows, cols)`.
    pub got: (usize, usize),
}

impl core::fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "dimension mismatch: expected {}x{}, got {}x{}",
            self.expected.0, self.expected.1, self.got.0, self.got.1
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DimensionMismatch {}

/// Dynamically-sized heap-allocated matrix.
///
/// Column-major `Vec<T>` storage with runtime dimensions. Implements
/// [`MatrixRef`] and [`MatrixMut`], so the linear solvers accept it directly.
///
/// # Examples
///
/// ```
/// use numkit::DynMatrix;
///
/// let a = DynMatrix::from_rows(2, 3, &[2.0_f64, 3.0, 7.0, 4.0, 1.0, 6.0]);
/// assert_eq!(a[(0, 2)], 7.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynMatrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Create an `nrows x ncols` zero matrix.
    ///
    /// The `_zero` parameter is only used for type inference.
    pub fn zeros(nrows: usize, ncols: usize, _zero: T) -> Self {
        Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `row_major.len() != nrows * ncols`.
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self {
        assert_eq!(
            row_major.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            nrows,
            ncols,
        );
        let mut data = vec![T::zero(); nrows * ncols];
        for i in 0..nrows {
            for j in 0..ncols {
                data[j * nrows + i] = row_major[i * ncols + j];
            }
        }
        Self { data, nrows, ncols }
    }

    /// Build the augmented matrix `[A | b]` from coefficients and a right-hand side.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionMismatch`] if `rhs.len() != coeffs.nrows()`.
    ///
    /// ```
    /// use numkit::DynMatrix;
    ///
    /// let a = DynMatrix::from_rows(2, 2, &[2.0_f64, 3.0, 4.0, 1.0]);
    /// let aug = DynMatrix::augmented(&a, &[7.0, 6.0]).unwrap();
    /// assert_eq!(aug.ncols(), 3);
    /// assert_eq!(aug[(1, 2)], 6.0);
    /// ```
    pub fn augmented(coeffs: &DynMatrix<T>, rhs: &[T]) -> Result<Self, DimensionMismatch> {
        if rhs.len() != coeffs.nrows {
            return Err(DimensionMismatch {
                expected: (coeffs.nrows, 1),
                got: (rhs.len(), 1),
            });
        }
        let mut data = Vec::with_capacity(coeffs.data.len() + rhs.len());
        data.extend_from_slice(&coeffs.data);
        data.extend_from_slice(rhs);
        Ok(Self {
            data,
            nrows: coeffs.nrows,
            ncols: coeffs.ncols + 1,
        })
    }
}

impl<T> DynMatrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use numkit::DynMatrix;
    /// let m = DynMatrix::from_fn(3, 4, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 3)], 0.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for j in 0..ncols {
            for i in 0..nrows {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }
}

impl<T: FloatScalar> DynMatrix<T> {
    /// Solve the system this augmented matrix `[A | b]` represents.
    ///
    /// Runs [`gaussian_elimination`] on `self`, which is left reduced.
    ///
    /// ```
    /// use numkit::DynMatrix;
    ///
    /// let mut aug = DynMatrix::from_rows(2, 3, &[2.0_f64, 3.0, 7.0, 4.0, 1.0, 6.0]);
    /// let x = aug.solve_augmented().unwrap();
    /// assert!((x[0] - 1.1).abs() < 1e-12);
    /// assert!((x[1] - 1.6).abs() < 1e-12);
    /// ```
    pub fn solve_augmented(&mut self) -> Result<Vec<T>, LinalgError> {
        gaussian_elimination(self)
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for DynMatrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[col * self.nrows + row]
    }
}

impl<T> MatrixMut<T> for DynMatrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[col * self.nrows + row]
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for DynMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[col * self.nrows + row]
    }
}

impl<T> IndexMut<(usize, usize)> for DynMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[col * self.nrows + row]
    }
}

// ── Conversions: nested rows → DynMatrix ────────────────────────────

impl<T: Scalar> TryFrom<Vec<Vec<T>>> for DynMatrix<T> {
    type Error = DimensionMismatch;

    /// Build a matrix from a vector of rows.
    ///
    /// Fails if any row's length differs from the first row's.
    ///
    /// ```
    /// use numkit::DynMatrix;
    /// let m = DynMatrix::try_from(vec![vec![1.0_f64, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut m = Self::zeros(nrows, ncols, T::zero());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(DimensionMismatch {
                    expected: (nrows, ncols),
                    got: (nrows, row.len()),
                });
            }
            for (j, &v) in row.iter().enumerate() {
                m[(i, j)] = v;
            }
        }
        Ok(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros() {
        let m = DynMatrix::zeros(3, 4, 0.0_f64);
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 4);
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(m[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn from_rows() {
        let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m[(1, 2)], 6.0);
    }

    #[test]
    #[should_panic(expected = "slice length")]
    fn from_rows_wrong_length() {
        let _ = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn from_fn() {
        let m = DynMatrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
        assert_eq!(m[(0, 0)], 0.0);
        assert_eq!(m[(1, 1)], 4.0);
        assert_eq!(m[(2, 2)], 8.0);
    }

    #[test]
    fn augmented_appends_rhs_column() {
        let a = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
        let aug = DynMatrix::augmented(&a, &[5.0, 6.0]).unwrap();
        assert_eq!(aug.nrows(), 2);
        assert_eq!(aug.ncols(), 3);
        assert_eq!(aug[(0, 1)], 2.0);
        assert_eq!(aug[(0, 2)], 5.0);
        assert_eq!(aug[(1, 2)], 6.0);
    }

    #[test]
    fn augmented_wrong_rhs() {
        let a = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
        let err = DynMatrix::augmented(&a, &[5.0]).unwrap_err();
        assert_eq!(err.expected, (2, 1));
        assert_eq!(err.got, (1, 1));
    }

    #[test]
    fn try_from_rows() {
        let m = DynMatrix::try_from(vec![vec![1.0_f64, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        assert_eq!(m[(1, 2)], 6.0);
    }

    #[test]
    fn try_from_ragged() {
        let r = DynMatrix::try_from(vec![vec![1.0_f64, 2.0], vec![3.0]]);
        assert!(r.is_err());
    }

    #[test]
    fn try_from_empty() {
        let m = DynMatrix::try_from(Vec::<Vec<f64>>::new()).unwrap();
        assert_eq!(m.nrows(), 0);
        assert_eq!(m.ncols(), 0);
    }

    #[test]
    fn swap_rows_via_trait() {
        let mut m = DynMatrix::from_rows(2, 3, &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]);
        m.swap_rows(0, 1, 1);
        // Column 0 untouched, columns 1.. swapped
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 1)], 5.0);
        assert_eq!(m[(1, 2)], 3.0);
    }

    #[test]
    fn solve_augmented() {
        let mut aug = DynMatrix::from_rows(2, 3, &[2.0_f64, 3.0, 7.0, 4.0, 1.0, 6.0]);
        let x = aug.solve_augmented().unwrap();
        assert!((x[0] - 1.1).abs() < 1e-12);
        assert!((x[1] - 1.6).abs() < 1e-12);
    }

    #[cfg(feature = "std")]
    #[test]
    fn dimension_mismatch_display() {
        let e = DimensionMismatch { expected: (2, 3), got: (2, 2) };
        assert_eq!(e.to_string(), "dimension mismatch: expected 2x3, got 2x2");
    }
}
