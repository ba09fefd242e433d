mod norm;
mod ops;
#[cfg(feature = "random")]
pub mod random;
mod util;
mod view;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt;

use num_complex::Complex;

use crate::error::MatrixError;
use crate::traits::{FloatScalar, Scalar};

/// Dense, dynamically-sized matrix with shared-storage views.
///
/// Row-major storage lives behind a reference-counted buffer. A `Matrix` is
/// a descriptor over that buffer: a logical window of `rows x cols` at
/// `(offset_i, offset_j)`. [`submatrix`](Matrix::submatrix),
/// [`row`](Matrix::row) and [`col`](Matrix::col) return *views* — new
/// descriptors over the *same* buffer — so mutation through a view is
/// visible through the parent at the translated coordinates. Everything
/// else ([`Clone`], arithmetic results, [`transpose`](Matrix::transpose))
/// allocates fresh storage.
///
/// The buffer is shared through [`Rc`], so a `Matrix` is not `Send`: all
/// mutation is single-threaded by construction and no locking is performed.
///
/// # Examples
///
/// ```
/// use spectris::Matrix;
///
/// let mut a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
/// let mut top = a.row(0);
/// top.set(0, 1, 9.0);
/// assert_eq!(a.get(0, 1), 9.0); // the view wrote into a's storage
///
/// let b = a.clone();            // deep copy
/// a.set(0, 0, -1.0);
/// assert_eq!(b.get(0, 0), 1.0);
/// ```
pub struct Matrix<T> {
    data: Rc<[Cell<T>]>,
    buf_rows: usize,
    buf_cols: usize,
    rows: usize,
    cols: usize,
    offset_i: usize,
    offset_j: usize,
}

/// Single-precision real matrix.
pub type Matrixf32 = Matrix<f32>;
/// Double-precision real matrix.
pub type Matrixf64 = Matrix<f64>;
/// Single-precision complex matrix.
pub type Matrixz32 = Matrix<Complex<f32>>;
/// Double-precision complex matrix.
pub type Matrixz64 = Matrix<Complex<f64>>;

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    fn alloc(rows: usize, cols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        // The range is empty when either dimension is zero, so `cols` is
        // never a zero divisor here.
        let data: Rc<[Cell<T>]> = (0..rows * cols)
            .map(|k| Cell::new(f(k / cols, k % cols)))
            .collect();
        Self {
            data,
            buf_rows: rows,
            buf_cols: cols,
            rows,
            cols,
            offset_i: 0,
            offset_j: 0,
        }
    }

    /// Create a `rows x cols` matrix of zeros.
    ///
    /// ```
    /// use spectris::Matrix;
    /// let m: Matrix<f64> = Matrix::zeros(2, 3);
    /// assert_eq!(m.size(), (2, 3));
    /// assert_eq!(m.get(1, 2), 0.0);
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::alloc(rows, cols, |_, _| T::zero())
    }

    /// Create a matrix filled with a given value.
    ///
    /// ```
    /// use spectris::Matrix;
    /// let m = Matrix::fill(2, 3, 7.0_f64);
    /// assert_eq!(m.get(0, 0), 7.0);
    /// assert_eq!(m.get(1, 2), 7.0);
    /// ```
    pub fn fill(rows: usize, cols: usize, value: T) -> Self {
        Self::alloc(rows, cols, |_, _| value)
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use spectris::Matrix;
    /// let id: Matrix<f64> = Matrix::eye(3);
    /// assert_eq!(id.get(0, 0), 1.0);
    /// assert_eq!(id.get(0, 1), 0.0);
    /// assert_eq!(id.get(2, 2), 1.0);
    /// ```
    pub fn eye(n: usize) -> Self {
        Self::alloc(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Create a matrix from a nested array literal, row by row.
    ///
    /// ```
    /// use spectris::Matrix;
    /// let m = Matrix::new([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// assert_eq!(m.size(), (2, 3));
    /// assert_eq!(m.get(1, 0), 4.0);
    /// ```
    pub fn new<const M: usize, const N: usize>(rows: [[T; N]; M]) -> Self {
        Self::alloc(M, N, |i, j| rows[i][j])
    }

    /// Create a matrix from nested row slices.
    ///
    /// Unlike [`Matrix::new`], the rows are not statically sized, so this
    /// reports [`MatrixError::InvalidArgument`] if the rows have
    /// inconsistent lengths.
    ///
    /// ```
    /// use spectris::Matrix;
    /// let m = Matrix::from_nested(&[&[1.0_f64, 2.0][..], &[3.0, 4.0]]).unwrap();
    /// assert_eq!(m.get(1, 1), 4.0);
    ///
    /// let ragged = Matrix::from_nested(&[&[1.0_f64, 2.0][..], &[3.0]]);
    /// assert!(ragged.is_err());
    /// ```
    pub fn from_nested(rows: &[&[T]]) -> Result<Self, MatrixError> {
        let n = rows.len();
        let m = rows.first().map_or(0, |r| r.len());
        for row in rows {
            if row.len() != m {
                return Err(MatrixError::InvalidArgument(
                    "all rows must have the same length",
                ));
            }
        }
        Ok(Self::alloc(n, m, |i, j| rows[i][j]))
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use spectris::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m.get(0, 0), 1.0);
    /// assert_eq!(m.get(0, 1), 0.0);
    /// ```
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        Self::alloc(rows, cols, f)
    }
}

// ── Shape queries ───────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Number of rows of the logical window.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns of the logical window.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)` of the logical window.
    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Whether the matrix is a single row.
    #[inline]
    pub fn is_row_vector(&self) -> bool {
        self.rows == 1
    }

    /// Whether the matrix is a single column.
    #[inline]
    pub fn is_col_vector(&self) -> bool {
        self.cols == 1
    }

    /// Whether the matrix is a row or column vector.
    #[inline]
    pub fn is_vector(&self) -> bool {
        self.is_row_vector() || self.is_col_vector()
    }

    /// Whether this matrix is a view into a larger buffer rather than a
    /// whole buffer of its own.
    pub fn is_view(&self) -> bool {
        !(self.rows == self.buf_rows
            && self.cols == self.buf_cols
            && self.offset_i == 0
            && self.offset_j == 0)
    }

    #[inline]
    fn buf_index(&self, i: usize, j: usize) -> usize {
        (i + self.offset_i) * self.buf_cols + self.offset_j + j
    }
}

// ── Element access ──────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Read the element at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if the index is outside the logical window. Use
    /// [`at`](Matrix::at) for a fallible variant.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(
            i < self.rows && j < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            i,
            j,
            self.rows,
            self.cols,
        );
        self.data[self.buf_index(i, j)].get()
    }

    /// Write the element at `(i, j)`.
    ///
    /// Writing through a view writes into the parent's storage.
    ///
    /// # Panics
    ///
    /// Panics if the index is outside the logical window. Use
    /// [`set_at`](Matrix::set_at) for a fallible variant.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        assert!(
            i < self.rows && j < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            i,
            j,
            self.rows,
            self.cols,
        );
        self.data[self.buf_index(i, j)].set(value);
    }

    /// Fallible element read.
    ///
    /// ```
    /// use spectris::{Matrix, MatrixError};
    /// let m = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.at(1, 1), Ok(4.0));
    /// assert_eq!(
    ///     m.at(1, 2),
    ///     Err(MatrixError::Index { index: (1, 2), size: (2, 2) })
    /// );
    /// ```
    pub fn at(&self, i: usize, j: usize) -> Result<T, MatrixError> {
        if i < self.rows && j < self.cols {
            Ok(self.data[self.buf_index(i, j)].get())
        } else {
            Err(MatrixError::Index {
                index: (i, j),
                size: self.size(),
            })
        }
    }

    /// Fallible element write.
    pub fn set_at(&mut self, i: usize, j: usize, value: T) -> Result<(), MatrixError> {
        if i < self.rows && j < self.cols {
            self.data[self.buf_index(i, j)].set(value);
            Ok(())
        } else {
            Err(MatrixError::Index {
                index: (i, j),
                size: self.size(),
            })
        }
    }

    /// Length of a vector-shaped matrix.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is neither a row nor a column vector.
    #[inline]
    pub fn vec_len(&self) -> usize {
        assert!(
            self.is_vector(),
            "matrix of size {}x{} is not a vector",
            self.rows,
            self.cols,
        );
        self.rows * self.cols
    }

    /// Single-index read, permitted only on row and column vectors.
    ///
    /// ```
    /// use spectris::Matrix;
    /// let v = Matrix::new([[1.0_f64], [2.0], [3.0]]);
    /// assert_eq!(v.vec_get(2), 3.0);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not vector-shaped, or if `i` is out of
    /// bounds. Use [`vec_at`](Matrix::vec_at) for a fallible variant.
    #[inline]
    pub fn vec_get(&self, i: usize) -> T {
        assert!(
            self.is_vector(),
            "single-index access on matrix of size {}x{}",
            self.rows,
            self.cols,
        );
        if self.is_row_vector() {
            self.get(0, i)
        } else {
            self.get(i, 0)
        }
    }

    /// Single-index write, permitted only on row and column vectors.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not vector-shaped, or if `i` is out of
    /// bounds.
    #[inline]
    pub fn vec_set(&mut self, i: usize, value: T) {
        assert!(
            self.is_vector(),
            "single-index access on matrix of size {}x{}",
            self.rows,
            self.cols,
        );
        if self.is_row_vector() {
            self.set(0, i, value);
        } else {
            self.set(i, 0, value);
        }
    }

    /// Fallible single-index read.
    ///
    /// Reports [`MatrixError::NotVector`] on a non-vector matrix and
    /// [`MatrixError::Index`] on an out-of-bounds index.
    ///
    /// ```
    /// use spectris::{Matrix, MatrixError};
    /// let m = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
    /// assert_eq!(
    ///     m.vec_at(0),
    ///     Err(MatrixError::NotVector { rows: 2, cols: 2 })
    /// );
    /// ```
    pub fn vec_at(&self, i: usize) -> Result<T, MatrixError> {
        if !self.is_vector() {
            return Err(MatrixError::NotVector {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.is_row_vector() {
            self.at(0, i)
        } else {
            self.at(i, 0)
        }
    }
}

// ── Whole-matrix operations ─────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Copy every element of `other` into the current window, element by
    /// element, leaving the storage binding untouched.
    ///
    /// This is the write half of the view mechanism: assigning through a
    /// view overwrites the parent's storage in the overlapping region.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    pub fn assign(&mut self, other: &Matrix<T>) {
        assert_eq!(
            self.size(),
            other.size(),
            "dimension mismatch: {}x{} vs {}x{}",
            self.rows,
            self.cols,
            other.rows,
            other.cols,
        );
        for i in 0..self.rows {
            for j in 0..self.cols {
                self.set(i, j, other.get(i, j));
            }
        }
    }

    /// Swap the storage bindings of two matrices without copying elements.
    pub fn swap_with(&mut self, other: &mut Matrix<T>) {
        core::mem::swap(self, other);
    }

    /// Swap two rows of the logical window in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            for j in 0..self.cols {
                let tmp = self.get(a, j);
                self.set(a, j, self.get(b, j));
                self.set(b, j, tmp);
            }
        }
    }

    /// Transpose: `(M x N) → (N x M)`. Always a new owned matrix, never a
    /// view of the original storage.
    ///
    /// ```
    /// use spectris::Matrix;
    /// let a = Matrix::new([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// let t = a.transpose();
    /// assert_eq!(t.size(), (3, 2));
    /// assert_eq!(t.get(1, 0), 2.0);
    /// ```
    pub fn transpose(&self) -> Self {
        Self::alloc(self.cols, self.rows, |i, j| self.get(j, i))
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Element-wise lift into the complex scalar domain (imaginary part
    /// zero).
    ///
    /// ```
    /// use spectris::{Complex, Matrix};
    /// let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
    /// let c = a.to_complex();
    /// assert_eq!(c.get(1, 0), Complex::new(3.0, 0.0));
    /// ```
    pub fn to_complex(&self) -> Matrix<Complex<T>> {
        Matrix::from_fn(self.rows, self.cols, |i, j| {
            Complex::new(self.get(i, j), T::zero())
        })
    }
}

// ── Clone / Debug ───────────────────────────────────────────────────

impl<T: Scalar> Clone for Matrix<T> {
    /// Deep copy of the logical window into fresh storage.
    ///
    /// A clone never shares the buffer, even when `self` is a view.
    fn clone(&self) -> Self {
        Self::alloc(self.rows, self.cols, |i, j| self.get(i, j))
    }
}

impl<T: Scalar> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix {}x{} ", self.rows, self.cols)?;
        f.debug_list()
            .entries((0..self.rows).map(|i| {
                (0..self.cols).map(|j| self.get(i, j)).collect::<Vec<_>>()
            }))
            .finish()
    }
}
