use core::fmt::Debug;
use num_traits::{Float, Num, NumCast, One, Zero};

/// Trait for types that can be used as grid elements.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for real floating-point scalars (`f32`, `f64`).
///
/// Every algorithm in this crate is generic over `FloatScalar`. Scalar
/// functions passed to the algorithms are plain closures `FnMut(T) -> T`.
pub trait FloatScalar: Scalar + Float {
    /// Convert a subinterval or iteration count into `Self`.
    ///
    /// Exact for counts below 2^53 (`f64`) or 2^24 (`f32`).
    #[inline]
    fn from_count(n: usize) -> Self {
        <Self as NumCast>::from(n).unwrap_or_else(Self::nan)
    }

    /// Convert an `f64` constant into `Self`, rounding for `f32`.
    #[inline]
    fn from_f64(v: f64) -> Self {
        <Self as NumCast>::from(v).unwrap_or_else(Self::nan)
    }
}

impl<T: Scalar + Float> FloatScalar for T {}

/// Read-only access to a matrix-like grid.
///
/// Allows the solvers to operate generically over fixed arrays
/// `[[T; C]; R]` and heap-allocated `DynMatrix` values.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;
}

/// Mutable access to a matrix-like grid.
///
/// Extends `MatrixRef` with mutable element access, enabling
/// in-place algorithms (Gaussian elimination) to work generically.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;

    /// Swap rows `r1` and `r2`, touching only columns `col_start..ncols`.
    fn swap_rows(&mut self, r1: usize, r2: usize, col_start: usize)
    where
        T: Copy,
    {
        if r1 == r2 {
            return;
        }
        for j in col_start..self.ncols() {
            let tmp = *self.get(r1, j);
            *self.get_mut(r1, j) = *self.get(r2, j);
            *self.get_mut(r2, j) = tmp;
        }
    }
}

// Row-major fixed arrays: `[[2.0, 3.0, 7.0], [4.0, 1.0, 6.0]]`.
impl<T, const R: usize, const C: usize> MatrixRef<T> for [[T; C]; R] {
    #[inline]
    fn nrows(&self) -> usize {
        R
    }

    #[inline]
    fn ncols(&self) -> usize {
        C
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self[row][col]
    }
}

impl<T, const R: usize, const C: usize> MatrixMut<T> for [[T; C]; R] {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self[row][col]
    }
}
