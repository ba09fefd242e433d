use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::traits::Scalar;

use super::Matrix;

// ── Map ─────────────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Apply a function to every element, producing a new owned matrix.
    ///
    /// ```
    /// use spectris::Matrix;
    /// let m = Matrix::new([[1.0_f64, 4.0], [9.0, 16.0]]);
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r.get(0, 0), 1.0);
    /// assert_eq!(r.get(1, 1), 4.0);
    /// ```
    pub fn map<U: Scalar>(&self, f: impl Fn(T) -> U) -> Matrix<U> {
        Matrix::from_fn(self.nrows(), self.ncols(), |i, j| f(self.get(i, j)))
    }
}

// ── Rendering ───────────────────────────────────────────────────────

impl<T: Scalar + fmt::Display> Matrix<T> {
    /// Human-readable bracketed dump with a fixed number of decimal places.
    ///
    /// Entries are right-aligned to the widest rendered entry of the whole
    /// matrix, rows are separated by newlines:
    ///
    /// ```
    /// use spectris::Matrix;
    /// let m = Matrix::new([[1.0_f64, -2.5], [30.0, 4.0]]);
    /// let s = m.format_with(1);
    /// assert_eq!(s, "[ 1.0, -2.5,\n 30.0,  4.0]");
    /// ```
    pub fn format_with(&self, precision: usize) -> String {
        let mut width = 0;
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                let len = format!("{:.*}", precision, self.get(i, j)).len();
                width = width.max(len);
            }
        }
        let mut out = String::from("[");
        for i in 0..self.nrows() {
            if i != 0 {
                out.push(' ');
            }
            for j in 0..self.ncols() {
                out.push_str(&format!("{:>w$.p$}", self.get(i, j), w = width, p = precision));
                if i + 1 < self.nrows() || j + 1 < self.ncols() {
                    out.push(',');
                    if j + 1 < self.ncols() {
                        out.push(' ');
                    }
                }
            }
            if i + 1 < self.nrows() {
                out.push('\n');
            }
        }
        out.push(']');
        out
    }

    /// Nested-list rendering for symbolic-math interchange:
    /// `{{a,b},{c,d}}`.
    ///
    /// ```
    /// use spectris::Matrix;
    /// let m = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.to_wolfram_string(0), "{{1,2},{3,4}}");
    /// ```
    pub fn to_wolfram_string(&self, precision: usize) -> String {
        let mut out = String::from("{");
        for i in 0..self.nrows() {
            out.push('{');
            for j in 0..self.ncols() {
                out.push_str(&format!("{:.*}", precision, self.get(i, j)));
                if j + 1 < self.ncols() {
                    out.push(',');
                }
            }
            out.push('}');
            if i + 1 < self.nrows() {
                out.push(',');
            }
        }
        out.push('}');
        out
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Matrix<T> {
    /// [`format_with`](Matrix::format_with) at 6 decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(6))
    }
}
