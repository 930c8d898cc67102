//! # cofactor
//!
//! Fixed-order square matrices with determinants computed by recursive
//! cofactor (Laplace) expansion. Pure Rust, no-std compatible, no heap
//! allocation.
//!
//! ## Quick start
//!
//! ```
//! use cofactor::{Matrix3, Matrix4};
//!
//! let a = Matrix3::from_row_major([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0]);
//! assert_eq!(a.determinant(), -3.0);
//!
//! // Delete row 0 and column 1, then take the signed determinant.
//! assert_eq!(a.submatrix(0, 1), cofactor::Matrix2::new([[4.0, 6.0], [7.0, 10.0]]));
//! assert_eq!(a.minor(0, 1), -2.0);
//! assert_eq!(a.cofactor(0, 1), 2.0);
//!
//! let b: Matrix4 = Matrix4::from_fn(|i, j| (i * 4 + j + 1) as f64);
//! assert_eq!(b.determinant(), 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — `Matrix<T, N>` with a const-generic order. Stack-allocated
//!   `[[T; N]; N]` row-major storage, so element `(row, col)` is at flat index
//!   `col + row * N`. Bounds-checked indexing, `submatrix` / `minor` /
//!   `cofactor` / `determinant`, adjugate and inverse, and element-wise
//!   arithmetic. Aliases `Matrix2` … `Matrix8` default to `f64` elements.
//!
//! - [`traits`] — Element and algorithm traits:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`SignedScalar`] — elements closed under negation, needed by
//!     determinants and cofactors (signed integers, floats, complex)
//!   - [`FloatScalar`] — real floats, needed by `inverse`
//!   - [`Determinant`] — closed form at order 2, Laplace expansion above
//!   - [`Cofactors`] — order-lowering `submatrix`, `minor`, `cofactor` (N ≥ 3)
//!
//! ## Orders
//!
//! Orders 2 through 8 are supported. Order 2 is the closed-form base case and
//! has no `submatrix`; every higher order is linked to the one below it at
//! compile time, so the recursion always terminates at order 2. Cost grows as
//! O(N!), which is why the supported range stops at 8.
//!
//! ## Index contract
//!
//! `get`, `set`, `Index`, `IndexMut` and `submatrix` panic when a row or
//! column is not below N. The checks are always on, in release builds too.
//! `get_checked` and `set_checked` are the recoverable alternatives.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Links std; `MatrixError` implements `std::error::Error` |
//! | `complex` | no       | `Complex<f32>` / `Complex<f64>` elements via `num-complex` |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod matrix;
pub mod traits;

pub use matrix::aliases::{Matrix2, Matrix3, Matrix4, Matrix5, Matrix6, Matrix7, Matrix8};
pub use matrix::{Matrix, MatrixError};
pub use traits::{Cofactors, Determinant, FloatScalar, Scalar, SignedScalar};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
