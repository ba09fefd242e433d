use core::ops::{Bound, RangeBounds};

use super::Matrix;

/// Resolve a range bound against an axis length, returning `(start, len)`.
fn resolve(bounds: impl RangeBounds<usize>, len: usize) -> (usize, usize) {
    let start = match bounds.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s + 1,
        Bound::Unbounded => 0,
    };
    let end = match bounds.end_bound() {
        Bound::Included(&e) => e + 1,
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    assert!(
        start <= end && end <= len,
        "range {}..{} out of bounds for axis of length {}",
        start,
        end,
        len,
    );
    (start, end - start)
}

impl<T> Matrix<T> {
    /// A rectangular view of this matrix sharing its storage.
    ///
    /// An open upper bound means "to the end" of the axis. Views of views
    /// compose: the offsets accumulate into the same backing buffer, and
    /// writing through the view writes into the parent's storage.
    ///
    /// ```
    /// use spectris::Matrix;
    ///
    /// let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
    /// let mut b = m.submatrix(1.., 1..);
    /// assert_eq!(b.size(), (2, 2));
    /// assert_eq!(b.get(0, 0), 4.0);
    ///
    /// b.set(1, 1, -1.0);
    /// assert_eq!(m.get(2, 2), -1.0);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if either range extends beyond the logical window.
    pub fn submatrix(
        &self,
        rows: impl RangeBounds<usize>,
        cols: impl RangeBounds<usize>,
    ) -> Matrix<T> {
        let (i, n) = resolve(rows, self.rows);
        let (j, m) = resolve(cols, self.cols);
        Matrix {
            data: self.data.clone(),
            buf_rows: self.buf_rows,
            buf_cols: self.buf_cols,
            rows: n,
            cols: m,
            offset_i: self.offset_i + i,
            offset_j: self.offset_j + j,
        }
    }

    /// Row `i` as a `1 x ncols` view sharing this matrix's storage.
    pub fn row(&self, i: usize) -> Matrix<T> {
        self.submatrix(i..=i, ..)
    }

    /// Column `j` as an `nrows x 1` view sharing this matrix's storage.
    pub fn col(&self, j: usize) -> Matrix<T> {
        self.submatrix(.., j..=j)
    }
}
