//! Error taxonomy shared by the matrix container and the solvers.

/// Errors from matrix construction, access, and the direct solvers.
///
/// Shape, index, and argument violations are detected eagerly at the call
/// site and are never retried internally. Iterative non-convergence is *not*
/// an error: the power-iteration family signals it through
/// [`crate::PowerOutcome::iterations`]` == None` so the dispatcher can fall
/// back to another variant.
///
/// ```
/// use spectris::{Matrix, MatrixError};
///
/// let m = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
/// assert_eq!(
///     m.at(2, 0),
///     Err(MatrixError::Index { index: (2, 0), size: (2, 2) })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the attempted operation.
    Shape {
        /// `(rows, cols)` of the left operand.
        lhs: (usize, usize),
        /// `(rows, cols)` of the right operand.
        rhs: (usize, usize),
    },
    /// A square matrix is required.
    NotSquare {
        /// Actual row count.
        rows: usize,
        /// Actual column count.
        cols: usize,
    },
    /// A row- or column-vector-shaped matrix is required.
    NotVector {
        /// Actual row count.
        rows: usize,
        /// Actual column count.
        cols: usize,
    },
    /// Element access outside the logical window.
    Index {
        /// The offending `(row, col)` index.
        index: (usize, usize),
        /// `(rows, cols)` of the matrix.
        size: (usize, usize),
    },
    /// Malformed argument: ragged literal rows, zero leading quadratic
    /// coefficient.
    InvalidArgument(&'static str),
    /// The least-squares normal-equations matrix is not invertible within
    /// the given epsilon.
    SingularSystem,
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::Shape { lhs, rhs } => write!(
                f,
                "dimension mismatch: {}x{} vs {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            MatrixError::NotSquare { rows, cols } => {
                write!(f, "matrix of size {}x{} is not square", rows, cols)
            }
            MatrixError::NotVector { rows, cols } => {
                write!(f, "matrix of size {}x{} is not a vector", rows, cols)
            }
            MatrixError::Index { index, size } => write!(
                f,
                "index ({}, {}) out of bounds for {}x{} matrix",
                index.0, index.1, size.0, size.1
            ),
            MatrixError::InvalidArgument(what) => write!(f, "invalid argument: {}", what),
            MatrixError::SingularSystem => {
                write!(f, "normal-equations matrix is singular")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}
