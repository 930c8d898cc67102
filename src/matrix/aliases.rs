//! Pre-defined type aliases for every supported order.
//!
//! The element type defaults to `f64`, so `Matrix3` alone names a 3×3
//! double-precision matrix.

use crate::Matrix;

/// 2×2 matrix.
pub type Matrix2<T = f64> = Matrix<T, 2>;
/// 3×3 matrix.
pub type Matrix3<T = f64> = Matrix<T, 3>;
/// 4×4 matrix.
pub type Matrix4<T = f64> = Matrix<T, 4>;
/// 5×5 matrix.
pub type Matrix5<T = f64> = Matrix<T, 5>;
/// 6×6 matrix.
pub type Matrix6<T = f64> = Matrix<T, 6>;
/// 7×7 matrix.
pub type Matrix7<T = f64> = Matrix<T, 7>;
/// 8×8 matrix.
pub type Matrix8<T = f64> = Matrix<T, 8>;
