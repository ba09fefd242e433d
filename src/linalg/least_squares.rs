use crate::error::MatrixError;
use crate::traits::LinalgScalar;
use crate::Matrix;

/// Solve an overdetermined linear system in the minimal-L2-norm sense.
///
/// Given a design matrix `l` (n x k, n ≥ k) and a target column vector `r`
/// (n x 1), returns the coefficient vector `c` (k x 1) minimizing
/// `‖l·c − r‖₂`, by solving the normal equations `lᵀl·c = lᵀr` with
/// Gaussian elimination under partial pivoting. The solve is direct — no
/// iteration limit applies — and is exact for consistent systems.
///
/// ```
/// use spectris::{least_squares, Matrix};
///
/// // Overdetermined but consistent: r = l * [2, -1]
/// let l = Matrix::new([[1.0_f64, 0.0], [0.0, 1.0], [1.0, 1.0]]);
/// let r = Matrix::new([[2.0_f64], [-1.0], [1.0]]);
/// let c = least_squares(&l, &r, 1e-12).unwrap();
/// assert!((c.vec_get(0) - 2.0).abs() < 1e-10);
/// assert!((c.vec_get(1) + 1.0).abs() < 1e-10);
/// ```
///
/// # Errors
///
/// [`MatrixError::Shape`] if `r` is not a column vector of matching height
/// or the system is underdetermined; [`MatrixError::SingularSystem`] if the
/// normal-equations matrix is not invertible within `eps` (rank-deficient
/// `l`), judged by the modulus of the best available pivot.
pub fn least_squares<T: LinalgScalar>(
    l: &Matrix<T>,
    r: &Matrix<T>,
    eps: T::Real,
) -> Result<Matrix<T>, MatrixError> {
    if !r.is_col_vector() || r.nrows() != l.nrows() || l.nrows() < l.ncols() {
        return Err(MatrixError::Shape {
            lhs: l.size(),
            rhs: r.size(),
        });
    }
    let lt = l.transpose();
    let gram = &lt * l;
    let rhs = &lt * r;
    solve_square(gram, rhs, eps)
}

/// Gaussian elimination with partial pivoting on a square system, consuming
/// its inputs as scratch space.
fn solve_square<T: LinalgScalar>(
    mut a: Matrix<T>,
    mut b: Matrix<T>,
    eps: T::Real,
) -> Result<Matrix<T>, MatrixError> {
    let n = a.nrows();

    for col in 0..n {
        // Pivot row: largest modulus in this column
        let mut max_row = col;
        let mut max_val = a.get(col, col).modulus();
        for row in (col + 1)..n {
            let val = a.get(row, col).modulus();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }
        if max_val < eps {
            return Err(MatrixError::SingularSystem);
        }
        if max_row != col {
            a.swap_rows(col, max_row);
            b.swap_rows(col, max_row);
        }

        let pivot = a.get(col, col);
        for row in (col + 1)..n {
            let factor = a.get(row, col) / pivot;
            for j in col..n {
                a.set(row, j, a.get(row, j) - factor * a.get(col, j));
            }
            b.vec_set(row, b.vec_get(row) - factor * b.vec_get(col));
        }
    }

    // Back substitution
    let mut x: Matrix<T> = Matrix::zeros(n, 1);
    for i in (0..n).rev() {
        let mut sum = b.vec_get(i);
        for j in (i + 1)..n {
            sum = sum - a.get(i, j) * x.vec_get(j);
        }
        x.vec_set(i, sum / a.get(i, i));
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn square_consistent_system() {
        let l = Matrix::new([[2.0_f64, 1.0], [1.0, 3.0]]);
        let c_true = Matrix::new([[1.0_f64], [-2.0]]);
        let r = &l * &c_true;
        let c = least_squares(&l, &r, EPS).unwrap();
        assert!(c.approx_eq(&c_true, 1e-10));
    }

    #[test]
    fn overdetermined_consistent_system() {
        let l = Matrix::new([
            [1.0_f64, 1.0],
            [1.0, 2.0],
            [1.0, 3.0],
            [1.0, 4.0],
        ]);
        let c_true = Matrix::new([[0.5_f64], [3.0]]);
        let r = &l * &c_true;
        let c = least_squares(&l, &r, EPS).unwrap();
        assert!(c.approx_eq(&c_true, 1e-10));
    }

    #[test]
    fn inconsistent_system_minimizes_residual() {
        // Fit a line through (0,0), (1,1), (2,1): least squares slope 0.5,
        // intercept 1/6.
        let l = Matrix::new([[1.0_f64, 0.0], [1.0, 1.0], [1.0, 2.0]]);
        let r = Matrix::new([[0.0_f64], [1.0], [1.0]]);
        let c = least_squares(&l, &r, EPS).unwrap();
        assert!((c.vec_get(0) - 1.0 / 6.0).abs() < 1e-10);
        assert!((c.vec_get(1) - 0.5).abs() < 1e-10);
    }

    #[test]
    fn rank_deficient_is_singular() {
        // Second column is a multiple of the first
        let l = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0], [3.0, 6.0]]);
        let r = Matrix::new([[1.0_f64], [2.0], [3.0]]);
        assert_eq!(least_squares(&l, &r, EPS), Err(MatrixError::SingularSystem));
    }

    #[test]
    fn shape_violations() {
        let l = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        let bad_r = Matrix::new([[1.0_f64], [2.0], [3.0]]);
        assert!(matches!(
            least_squares(&l, &bad_r, EPS),
            Err(MatrixError::Shape { .. })
        ));

        // Underdetermined: more columns than rows
        let wide = Matrix::new([[1.0_f64, 2.0, 3.0]]);
        let r = Matrix::new([[1.0_f64]]);
        assert!(matches!(
            least_squares(&wide, &r, EPS),
            Err(MatrixError::Shape { .. })
        ));

        let row_r = Matrix::new([[1.0_f64, 2.0]]);
        assert!(matches!(
            least_squares(&l, &row_r, EPS),
            Err(MatrixError::Shape { .. })
        ));
    }
}
