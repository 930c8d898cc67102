use core::fmt::{self, Write as _};

use crate::Matrix;

// ── Constructors ────────────────────────────────────────────────────

impl<T, const N: usize> Matrix<T, N> {
    /// Create a matrix by calling `f(row, col)` for each element, in row-major
    /// order.
    ///
    /// ```
    /// use cofactor::Matrix;
    /// let m: Matrix<f64, 3> = Matrix::from_fn(|i, j| {
    ///     if i == j { 1.0 } else { 0.0 }
    /// });
    /// assert_eq!(m, Matrix::eye());
    /// ```
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            data: core::array::from_fn(|i| core::array::from_fn(|j| f(i, j))),
        }
    }

    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use cofactor::Matrix;
    /// let m = Matrix::new([[1, 2], [3, 4]]);
    /// let r = m.map(|x| x as f64 / 2.0);
    /// assert_eq!(r[(1, 1)], 2.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U, N>
    where
        T: Copy,
    {
        Matrix::from_fn(|i, j| f(self.data[i][j]))
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display, const N: usize> fmt::Display for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Find max width per column for alignment
        let mut widths = [0usize; N];
        for row in &self.data {
            for (j, value) in row.iter().enumerate() {
                let w = WriteCounting::count(|wc| write!(wc, "{}", value));
                if w > widths[j] {
                    widths[j] = w;
                }
            }
        }

        for (i, row) in self.data.iter().enumerate() {
            write!(f, "│")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", value, width = widths[j])?;
            }
            write!(f, "│")?;
            if i + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Helper to count characters written, without allocating.
struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}
