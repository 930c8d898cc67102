use crate::matrix::MatrixError;
use crate::traits::Scalar;
use crate::Matrix;

// ── Slice access ────────────────────────────────────────────────────

impl<T, const N: usize> Matrix<T, N> {
    /// View the entire matrix as a flat slice in row-major order.
    ///
    /// Element `(row, col)` is at index `col + row * N`.
    ///
    /// ```
    /// use cofactor::Matrix;
    /// let m = Matrix::new([[1, 2], [3, 4]]);
    /// assert_eq!(m.as_slice(), &[1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    /// View the entire matrix as a mutable flat slice in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    /// View row `i` as a slice. Rows are contiguous in memory.
    ///
    /// Panics if `i >= N`.
    #[inline]
    #[track_caller]
    pub fn row_slice(&self, i: usize) -> &[T] {
        assert!(i < N, "row {i} out of bounds for {N}×{N} matrix");
        &self.data[i]
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N> {
    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `slice.len() != N * N`. Use `Matrix::try_from(slice)` when the
    /// length comes from runtime data.
    ///
    /// ```
    /// use cofactor::Matrix;
    /// let m: Matrix<f64, 2> = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m[(0, 1)], 2.0);
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    #[track_caller]
    pub fn from_slice(slice: &[T]) -> Self {
        assert_eq!(
            slice.len(),
            N * N,
            "slice length {} does not match {}x{} matrix",
            slice.len(),
            N,
            N
        );
        let mut m = Self::zeros();
        m.as_mut_slice().copy_from_slice(slice);
        m
    }
}

impl<T: Scalar, const N: usize> TryFrom<&[T]> for Matrix<T, N> {
    type Error = MatrixError;

    fn try_from(slice: &[T]) -> Result<Self, MatrixError> {
        if slice.len() != N * N {
            return Err(MatrixError::LengthMismatch {
                expected: N * N,
                found: slice.len(),
            });
        }
        Ok(Self::from_slice(slice))
    }
}

// ── Flat row-major constructors ─────────────────────────────────────

/// Emit `from_row_major` / `to_row_major` for each order, with the N² array
/// length written out so a wrong element count is a type error.
macro_rules! impl_row_major {
    ($($n:literal => $len:literal),* $(,)?) => {
        $(
            impl<T: Copy> Matrix<T, $n> {
                #[doc = concat!(
                    "Create a ", stringify!($n), "×", stringify!($n),
                    " matrix from exactly ", stringify!($len),
                    " elements in row-major order."
                )]
                #[inline]
                pub fn from_row_major(values: [T; $len]) -> Self {
                    Self {
                        data: core::array::from_fn(|row| {
                            core::array::from_fn(|col| values[col + row * $n])
                        }),
                    }
                }

                /// Copy the elements out in row-major order.
                #[inline]
                pub fn to_row_major(&self) -> [T; $len] {
                    core::array::from_fn(|i| self.data[i / $n][i % $n])
                }
            }
        )*
    };
}

impl_row_major!(2 => 4, 3 => 9, 4 => 16, 5 => 25, 6 => 36, 7 => 49, 8 => 64);

// ── Iterators ───────────────────────────────────────────────────────

impl<T, const N: usize> Matrix<T, N> {
    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over all elements in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Iterate over rows, each as an array `&[T; N]`.
    #[inline]
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T; N]> {
        self.data.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Matrix<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Matrix<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
