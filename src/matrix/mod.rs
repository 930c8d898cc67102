pub mod aliases;
mod cofactor;
mod ops;
mod slice;
mod util;

use core::ops::{Index, IndexMut};

use crate::traits::Scalar;

/// Errors from the recoverable matrix entry points.
///
/// Out-of-range indices are normally a programmer error and panic; only the
/// `*_checked` accessors, `TryFrom<&[T]>` and [`Matrix::inverse`] report them
/// as values.
///
/// ```
/// use cofactor::{Matrix3, MatrixError};
///
/// let m = Matrix3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
/// assert_eq!(
///     m.get_checked(0, 3),
///     Err(MatrixError::IndexOutOfBounds { row: 0, col: 3, order: 3 })
/// );
/// assert_eq!(m.inverse().unwrap_err(), MatrixError::Singular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// `row` or `col` is not below the matrix order.
    IndexOutOfBounds { row: usize, col: usize, order: usize },
    /// A flat slice did not hold exactly N² elements.
    LengthMismatch { expected: usize, found: usize },
    /// The determinant is exactly zero.
    Singular,
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::IndexOutOfBounds { row, col, order } => write!(
                f,
                "index ({row}, {col}) out of bounds for {order}×{order} matrix"
            ),
            MatrixError::LengthMismatch { expected, found } => write!(
                f,
                "slice length {found} does not match the {expected} elements of the matrix"
            ),
            MatrixError::Singular => write!(f, "matrix is singular"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

/// Fixed-size square matrix of order `N`.
///
/// Storage is row-major: `data[row][col]`. The N² elements are contiguous, so
/// the element at `(row, col)` lives at flat index `col + row * N` of
/// [`as_slice`](Matrix::as_slice). Stack-allocated, no-std compatible, with
/// plain value semantics: copies never alias.
///
/// # Examples
///
/// ```
/// use cofactor::Matrix;
///
/// let mut a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a.get(0, 1), 2.0);
/// assert_eq!(a[(1, 0)], 3.0);
/// assert_eq!(a.determinant(), -2.0);
///
/// a.set(1, 1, 6.0);
/// assert_eq!(a.determinant(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T, const N: usize> {
    pub(crate) data: [[T; N]; N],
}

/// Panic unless `(row, col)` addresses an element of an N×N matrix.
///
/// Each axis is checked on its own; a flat-index check alone would accept
/// `(0, N)` as `(1, 0)`.
#[inline]
#[track_caller]
pub(crate) fn check_index<const N: usize>(row: usize, col: usize) {
    assert!(
        row < N && col < N,
        "index ({row}, {col}) out of bounds for {N}×{N} matrix"
    );
}

impl<T, const N: usize> Matrix<T, N> {
    /// Create a matrix from a row-major 2D array.
    ///
    /// The input is `[[row0], [row1], ...]` (N arrays of N elements each).
    #[inline]
    pub const fn new(rows: [[T; N]; N]) -> Self {
        Self { data: rows }
    }

    /// Matrix order (number of rows, equal to the number of columns).
    #[inline]
    pub const fn order(&self) -> usize {
        N
    }

    /// Number of rows.
    #[inline]
    pub const fn nrows(&self) -> usize {
        N
    }

    /// Number of columns.
    #[inline]
    pub const fn ncols(&self) -> usize {
        N
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N> {
    /// Create a matrix filled with zeros.
    pub fn zeros() -> Self {
        Self {
            data: [[T::zero(); N]; N],
        }
    }

    /// Create an identity matrix.
    pub fn eye() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = T::one();
        }
        m
    }
}

impl<T: Copy, const N: usize> Matrix<T, N> {
    /// Element at `(row, col)`.
    ///
    /// Panics if `row >= N` or `col >= N`.
    ///
    /// ```
    /// use cofactor::Matrix3;
    /// let m = Matrix3::from_row_major([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    /// assert_eq!(m.get(1, 2), 6.0);
    /// ```
    #[inline]
    #[track_caller]
    pub fn get(&self, row: usize, col: usize) -> T {
        check_index::<N>(row, col);
        self.data[row][col]
    }

    /// Overwrite the element at `(row, col)`. No other element changes.
    ///
    /// Panics if `row >= N` or `col >= N`.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        check_index::<N>(row, col);
        self.data[row][col] = value;
    }

    /// Element at `(row, col)`, or [`MatrixError::IndexOutOfBounds`].
    #[inline]
    pub fn get_checked(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        if row < N && col < N {
            Ok(self.data[row][col])
        } else {
            Err(MatrixError::IndexOutOfBounds { row, col, order: N })
        }
    }

    /// Overwrite `(row, col)`, or return [`MatrixError::IndexOutOfBounds`]
    /// and leave the matrix untouched.
    #[inline]
    pub fn set_checked(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        if row < N && col < N {
            self.data[row][col] = value;
            Ok(())
        } else {
            Err(MatrixError::IndexOutOfBounds { row, col, order: N })
        }
    }
}

// Index by (row, col) tuple
impl<T, const N: usize> Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        check_index::<N>(row, col);
        &self.data[row][col]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for Matrix<T, N> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        check_index::<N>(row, col);
        &mut self.data[row][col]
    }
}

pub use aliases::*;
