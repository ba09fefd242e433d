use num_traits::{One, Zero};

use crate::traits::LinalgScalar;

use super::Matrix;

impl<T: LinalgScalar> Matrix<T> {
    /// Euclidean (L2) norm of a vector-shaped matrix: the square root of
    /// the sum of squared entry moduli.
    ///
    /// ```
    /// use spectris::Matrix;
    /// let v = Matrix::new([[3.0_f64], [4.0]]);
    /// assert!((v.norm() - 5.0).abs() < 1e-12);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the matrix is neither a row nor a column vector.
    pub fn norm(&self) -> T::Real {
        assert!(
            self.is_vector(),
            "norm of matrix of size {}x{} — expected a vector",
            self.nrows(),
            self.ncols(),
        );
        let mut sum = <T::Real as Zero>::zero();
        for i in 0..self.vec_len() {
            let m = self.vec_get(i).modulus();
            sum = sum + m * m;
        }
        sum.lsqrt()
    }

    /// A unit-norm owned copy pointing in the same direction.
    ///
    /// Entries become infinite or NaN if the norm is zero.
    ///
    /// ```
    /// use spectris::Matrix;
    /// let v = Matrix::new([[3.0_f64], [4.0]]);
    /// let u = v.normalize();
    /// assert!((u.norm() - 1.0).abs() < 1e-12);
    /// assert!((u.vec_get(0) - 0.6).abs() < 1e-12);
    /// ```
    pub fn normalize(&self) -> Self {
        let inv = <T::Real as One>::one() / self.norm();
        self.map(|x| x * T::from_real(inv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn norm_real() {
        let v = Matrix::new([[3.0_f64], [4.0]]);
        assert!((v.norm() - 5.0).abs() < 1e-12);

        let r = Matrix::new([[1.0_f64, -2.0, 2.0]]);
        assert!((r.norm() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn norm_complex_uses_modulus() {
        let v = Matrix::new([[Complex::new(3.0_f64, 4.0)], [Complex::new(0.0, 0.0)]]);
        assert!((v.norm() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn norm_through_view() {
        let m = Matrix::new([[3.0_f64, 0.0], [4.0, 1.0]]);
        assert!((m.col(0).norm() - 5.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "expected a vector")]
    fn norm_non_vector() {
        let m: Matrix<f64> = Matrix::zeros(2, 2);
        let _ = m.norm();
    }

    #[test]
    fn normalize() {
        let v = Matrix::new([[3.0_f64], [4.0]]);
        let u = v.normalize();
        assert!((u.norm() - 1.0).abs() < 1e-12);
        assert!((u.vec_get(1) - 0.8).abs() < 1e-12);
    }
}
