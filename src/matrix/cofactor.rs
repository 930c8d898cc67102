use crate::matrix::{check_index, MatrixError};
use crate::traits::{Cofactors, Determinant, FloatScalar, Scalar, SignedScalar};
use crate::Matrix;

// ── Base case: order 2 ──────────────────────────────────────────────

impl<T: SignedScalar> Determinant<T> for Matrix<T, 2> {
    #[inline]
    fn determinant(&self) -> T {
        let [[a, b], [c, d]] = self.data;
        a * d - b * c
    }
}

// ── Recursive case: order N ≥ 3 ─────────────────────────────────────

/// Copy `src` into a matrix of order `K = N - 1`, skipping `row` and `col`.
///
/// Target row and column counters only advance on retained elements, so the
/// relative order of the surviving rows and columns is preserved.
#[track_caller]
fn delete_row_col<T: Scalar, const N: usize, const K: usize>(
    src: &Matrix<T, N>,
    row: usize,
    col: usize,
) -> Matrix<T, K> {
    const { assert!(K + 1 == N, "submatrix order must be one less than the source order") };
    check_index::<N>(row, col);

    let mut out = Matrix::<T, K>::zeros();
    let mut target_row = 0;
    for (source_row, src_row) in src.data.iter().enumerate() {
        if source_row == row {
            continue;
        }
        let mut target_col = 0;
        for (source_col, &value) in src_row.iter().enumerate() {
            if source_col == col {
                continue;
            }
            out.data[target_row][target_col] = value;
            target_col += 1;
        }
        target_row += 1;
    }
    out
}

/// Laplace expansion along row 0.
///
/// Each cofactor recurses one order down, so the cost is O(N!).
fn laplace_expansion<T: SignedScalar, const N: usize>(m: &Matrix<T, N>) -> T
where
    Matrix<T, N>: Cofactors<T>,
{
    let mut det = T::zero();
    for (col, &value) in m.data[0].iter().enumerate() {
        det = det + Cofactors::cofactor(m, 0, col) * value;
    }
    det
}

/// Wire order `$n` to order `$k = $n - 1` for submatrix extraction and the
/// recursive determinant.
macro_rules! impl_laplace {
    ($($n:literal => $k:literal),* $(,)?) => {
        $(
            impl<T: SignedScalar> Cofactors<T> for Matrix<T, $n> {
                type Submatrix = Matrix<T, $k>;

                #[inline]
                #[track_caller]
                fn submatrix(&self, row: usize, col: usize) -> Matrix<T, $k> {
                    delete_row_col(self, row, col)
                }
            }

            impl<T: SignedScalar> Determinant<T> for Matrix<T, $n> {
                #[inline]
                fn determinant(&self) -> T {
                    laplace_expansion(self)
                }
            }
        )*
    };
}

impl_laplace!(3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7);

// ── Inherent forwarding ─────────────────────────────────────────────

impl<T: SignedScalar, const N: usize> Matrix<T, N> {
    /// Determinant: closed form for order 2, Laplace expansion above.
    ///
    /// ```
    /// use cofactor::{Matrix2, Matrix3};
    /// assert_eq!(Matrix2::from_row_major([1.0, 2.0, 3.0, 4.0]).determinant(), -2.0);
    ///
    /// let m = Matrix3::new([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
    /// assert_eq!(m.determinant(), -306.0);
    /// ```
    #[inline]
    pub fn determinant(&self) -> T
    where
        Self: Determinant<T>,
    {
        Determinant::determinant(self)
    }

    /// Matrix of order N-1 with `row` and `col` deleted. Orders ≥ 3 only.
    ///
    /// Panics if `row >= N` or `col >= N`.
    ///
    /// ```
    /// use cofactor::Matrix;
    /// let m = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    /// assert_eq!(m.submatrix(1, 1), Matrix::new([[1, 3], [7, 9]]));
    /// ```
    #[inline]
    #[track_caller]
    pub fn submatrix(&self, row: usize, col: usize) -> <Self as Cofactors<T>>::Submatrix
    where
        Self: Cofactors<T>,
    {
        Cofactors::submatrix(self, row, col)
    }

    /// Determinant of [`submatrix(row, col)`](Matrix::submatrix).
    #[inline]
    #[track_caller]
    pub fn minor(&self, row: usize, col: usize) -> T
    where
        Self: Cofactors<T>,
    {
        Cofactors::minor(self, row, col)
    }

    /// Minor with sign `(-1)^(row + col)`.
    #[inline]
    #[track_caller]
    pub fn cofactor(&self, row: usize, col: usize) -> T
    where
        Self: Cofactors<T>,
    {
        Cofactors::cofactor(self, row, col)
    }

    /// Matrix of all cofactors, `C[(i, j)] = cofactor(i, j)`.
    pub fn cofactor_matrix(&self) -> Self
    where
        Self: Cofactors<T>,
    {
        let mut out = Self::zeros();
        for i in 0..N {
            for j in 0..N {
                out.data[i][j] = Cofactors::cofactor(self, i, j);
            }
        }
        out
    }

    /// Adjugate (classical adjoint): transpose of the cofactor matrix.
    ///
    /// Satisfies `A * adj(A) = det(A) * I`.
    pub fn adjugate(&self) -> Self
    where
        Self: Cofactors<T>,
    {
        self.cofactor_matrix().transpose()
    }
}

impl<T: FloatScalar, const N: usize> Matrix<T, N> {
    /// Inverse via the adjugate, `adj(A) / det(A)`.
    ///
    /// Returns [`MatrixError::Singular`] when the determinant is exactly zero.
    /// No pivoting is done, so nearly singular input yields large but finite
    /// entries rather than an error.
    ///
    /// ```
    /// use cofactor::Matrix3;
    /// let a = Matrix3::new([[2.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 8.0]]);
    /// let inv = a.inverse().unwrap();
    /// assert_eq!(inv[(1, 1)], 0.25);
    /// ```
    pub fn inverse(&self) -> Result<Self, MatrixError>
    where
        Self: Cofactors<T> + Determinant<T>,
    {
        let det = Determinant::determinant(self);
        if det == T::zero() {
            return Err(MatrixError::Singular);
        }
        Ok(self.adjugate() * (T::one() / det))
    }
}
