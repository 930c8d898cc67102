use core::fmt::Debug;
use core::ops::Neg;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, all integer types, and `Complex<f32>` / `Complex<f64>`
/// when the `complex` feature is enabled. Storage, indexing and arithmetic
/// only need `Scalar`; determinants need [`SignedScalar`].
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Matrix elements closed under negation.
///
/// Required by [`Determinant`] and [`Cofactors`]: a determinant or cofactor
/// can be negative even when every element is positive, so unsigned integers
/// are excluded at compile time rather than overflowing at run time.
/// Covers `f32`, `f64`, signed integers, and `Complex<f32>` / `Complex<f64>`.
///
/// ```compile_fail
/// use cofactor::Matrix;
/// let m: Matrix<u32, 2> = Matrix::new([[1, 2], [3, 4]]);
/// m.determinant();
/// ```
pub trait SignedScalar: Scalar + Neg<Output = Self> {}

impl<T: Scalar + Neg<Output = T>> SignedScalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by operations that divide by the determinant ([`inverse`]).
///
/// [`inverse`]: crate::Matrix::inverse
pub trait FloatScalar: SignedScalar + Float {}

impl<T: SignedScalar + Float> FloatScalar for T {}

/// Determinant of a square matrix.
///
/// Order 2 is computed in closed form. Every higher order is computed by
/// Laplace expansion along row 0, recursing through [`Cofactors::Submatrix`]
/// until it reaches order 2.
pub trait Determinant<T> {
    fn determinant(&self) -> T;
}

/// Order-lowering operations of a square matrix of order N ≥ 3.
///
/// `Submatrix` is the matrix of order N-1 obtained by deleting one row and one
/// column. Order 2 deliberately has no implementation: a 1×1 matrix is not
/// modelled, and the order 2 determinant does not need one.
pub trait Cofactors<T: SignedScalar> {
    /// Matrix of order N-1.
    type Submatrix: Determinant<T>;

    /// Delete `row` and `col`, keeping the relative order of everything else.
    ///
    /// Panics if `row` or `col` is not below N.
    fn submatrix(&self, row: usize, col: usize) -> Self::Submatrix;

    /// Determinant of [`submatrix(row, col)`](Cofactors::submatrix).
    #[inline]
    fn minor(&self, row: usize, col: usize) -> T {
        self.submatrix(row, col).determinant()
    }

    /// Signed minor: `+minor` when `row + col` is even, `-minor` otherwise.
    #[inline]
    fn cofactor(&self, row: usize, col: usize) -> T {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }
}
