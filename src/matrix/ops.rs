use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::{Scalar, SignedScalar};
use crate::Matrix;

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar, const N: usize> Add for Matrix<T, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Scalar, const N: usize> AddAssign for Matrix<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, &b) in self.iter_mut().zip(rhs.iter()) {
            *a = *a + b;
        }
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar, const N: usize> Sub for Matrix<T, N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const N: usize> SubAssign for Matrix<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, &b) in self.iter_mut().zip(rhs.iter()) {
            *a = *a - b;
        }
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: SignedScalar, const N: usize> Neg for Matrix<T, N> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for a in self.iter_mut() {
            *a = -*a;
        }
        self
    }
}

impl<T: SignedScalar, const N: usize> Neg for &Matrix<T, N> {
    type Output = Matrix<T, N>;

    fn neg(self) -> Matrix<T, N> {
        (*self).neg()
    }
}

// ── Matrix multiplication: (N×N) * (N×N) → (N×N) ───────────────────

impl<T: Scalar, const N: usize> Mul for Matrix<T, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::zeros();
        for i in 0..N {
            for j in 0..N {
                let mut sum = T::zero();
                for k in 0..N {
                    sum = sum + self.data[i][k] * rhs.data[k][j];
                }
                out.data[i][j] = sum;
            }
        }
        out
    }
}

impl<T: Scalar, const N: usize> Mul<&Matrix<T, N>> for &Matrix<T, N> {
    type Output = Matrix<T, N>;

    fn mul(self, rhs: &Matrix<T, N>) -> Matrix<T, N> {
        (*self) * (*rhs)
    }
}

// ── Scalar multiplication: matrix * scalar ──────────────────────────

impl<T: Scalar, const N: usize> Mul<T> for Matrix<T, N> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Matrix<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        for a in self.iter_mut() {
            *a = *a * rhs;
        }
    }
}

// ── Transpose / trace ───────────────────────────────────────────────

impl<T: Copy, const N: usize> Matrix<T, N> {
    /// Transpose. The determinant is invariant under it.
    ///
    /// ```
    /// use cofactor::Matrix;
    /// let m = Matrix::new([[1, 2], [3, 4]]);
    /// assert_eq!(m.transpose(), Matrix::new([[1, 3], [2, 4]]));
    /// ```
    pub fn transpose(&self) -> Self {
        let mut out = *self;
        for i in 0..N {
            for j in 0..N {
                out.data[j][i] = self.data[i][j];
            }
        }
        out
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N> {
    /// Sum of diagonal elements.
    pub fn trace(&self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self.data[i][i];
        }
        sum
    }
}
