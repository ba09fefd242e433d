use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_complex::Complex;

use crate::traits::{LinalgScalar, Scalar};

use super::Matrix;

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.size(),
            rhs.size(),
            "dimension mismatch: {}x{} + {}x{}",
            self.nrows(),
            self.ncols(),
            rhs.nrows(),
            rhs.ncols(),
        );
        Matrix::from_fn(self.nrows(), self.ncols(), |i, j| {
            self.get(i, j) + rhs.get(i, j)
        })
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self + rhs
    }
}

impl<T: Scalar> Add<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        self + &rhs
    }
}

impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    /// In-place addition through the current view: when `self` is a view,
    /// the parent's storage is updated in the overlapping region.
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(
            self.size(),
            rhs.size(),
            "dimension mismatch: {}x{} += {}x{}",
            self.nrows(),
            self.ncols(),
            rhs.nrows(),
            rhs.ncols(),
        );
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                self.set(i, j, self.get(i, j) + rhs.get(i, j));
            }
        }
    }
}

impl<T: Scalar> AddAssign for Matrix<T> {
    fn add_assign(&mut self, rhs: Matrix<T>) {
        self.add_assign(&rhs);
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.size(),
            rhs.size(),
            "dimension mismatch: {}x{} - {}x{}",
            self.nrows(),
            self.ncols(),
            rhs.nrows(),
            rhs.ncols(),
        );
        Matrix::from_fn(self.nrows(), self.ncols(), |i, j| {
            self.get(i, j) - rhs.get(i, j)
        })
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self - rhs
    }
}

impl<T: Scalar> Sub<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        self - &rhs
    }
}

impl<T: Scalar> SubAssign<&Matrix<T>> for Matrix<T> {
    /// In-place subtraction through the current view.
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(
            self.size(),
            rhs.size(),
            "dimension mismatch: {}x{} -= {}x{}",
            self.nrows(),
            self.ncols(),
            rhs.nrows(),
            rhs.ncols(),
        );
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                self.set(i, j, self.get(i, j) - rhs.get(i, j));
            }
        }
    }
}

impl<T: Scalar> SubAssign for Matrix<T> {
    fn sub_assign(&mut self, rhs: Matrix<T>) {
        self.sub_assign(&rhs);
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        Matrix::from_fn(self.nrows(), self.ncols(), |i, j| {
            T::zero() - self.get(i, j)
        })
    }
}

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Matrix<T>;
    fn neg(self) -> Matrix<T> {
        -&self
    }
}

// ── Matrix multiplication: (M x N) * (N x P) → (M x P) ─────────────

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.ncols(),
            rhs.nrows(),
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows(),
            self.ncols(),
            rhs.nrows(),
            rhs.ncols(),
        );
        let m = self.nrows();
        let n = self.ncols();
        let p = rhs.ncols();
        let mut out = Matrix::zeros(m, p);
        for i in 0..m {
            for k in 0..n {
                let a_ik = self.get(i, k);
                for j in 0..p {
                    out.set(i, j, out.get(i, j) + a_ik * rhs.get(k, j));
                }
            }
        }
        out
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        self * &rhs
    }
}

// ── Scalar multiplication / division ────────────────────────────────

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        Matrix::from_fn(self.nrows(), self.ncols(), |i, j| self.get(i, j) * rhs)
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: T) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    /// In-place scalar multiplication through the current view.
    fn mul_assign(&mut self, rhs: T) {
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                self.set(i, j, self.get(i, j) * rhs);
            }
        }
    }
}

impl<T: Scalar> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: T) -> Matrix<T> {
        Matrix::from_fn(self.nrows(), self.ncols(), |i, j| self.get(i, j) / rhs)
    }
}

impl<T: Scalar> Div<T> for Matrix<T> {
    type Output = Matrix<T>;
    fn div(self, rhs: T) -> Matrix<T> {
        &self / rhs
    }
}

impl<T: Scalar> DivAssign<T> for Matrix<T> {
    /// In-place scalar division through the current view.
    fn div_assign(&mut self, rhs: T) {
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                self.set(i, j, self.get(i, j) / rhs);
            }
        }
    }
}

// ── scalar * matrix (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(
    f32,
    f64,
    i8,
    i16,
    i32,
    i64,
    i128,
    u8,
    u16,
    u32,
    u64,
    u128,
    Complex<f32>,
    Complex<f64>
);

// ── Scalar product ──────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Scalar product of two vector-shaped matrices: `Σ aᵢ·bᵢ`.
    ///
    /// No conjugation is applied to either operand, so for complex vectors
    /// this is the bilinear product, not the Hermitian inner product.
    ///
    /// ```
    /// use spectris::Matrix;
    /// let a = Matrix::new([[1.0_f64, 2.0, 3.0]]);
    /// let b = Matrix::new([[4.0_f64], [5.0], [6.0]]);
    /// assert_eq!(a.scalar_product(&b), 32.0);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if either operand is not vector-shaped or the lengths differ.
    pub fn scalar_product(&self, rhs: &Matrix<T>) -> T {
        assert!(
            self.is_vector() && rhs.is_vector(),
            "scalar product requires vectors, got {}x{} and {}x{}",
            self.nrows(),
            self.ncols(),
            rhs.nrows(),
            rhs.ncols(),
        );
        assert_eq!(
            self.vec_len(),
            rhs.vec_len(),
            "dimension mismatch: vectors of length {} and {}",
            self.vec_len(),
            rhs.vec_len(),
        );
        let mut sum = T::zero();
        for i in 0..self.vec_len() {
            sum = sum + self.vec_get(i) * rhs.vec_get(i);
        }
        sum
    }
}

// ── Equality within epsilon ─────────────────────────────────────────

impl<T: LinalgScalar> Matrix<T> {
    /// Whether two matrices have the same shape and every pair of entries
    /// differs by at most `eps` in modulus.
    ///
    /// A NaN entry on either side forces inequality, so a matrix containing
    /// NaN is unequal even to itself. `Matrix` intentionally does not
    /// implement `PartialEq`: equality is always relative to an explicit
    /// tolerance.
    ///
    /// ```
    /// use spectris::Matrix;
    /// let a = Matrix::new([[1.0_f64, 2.0]]);
    /// let b = Matrix::new([[1.0_f64 + 1e-12, 2.0]]);
    /// assert!(a.approx_eq(&b, 1e-9));
    /// assert!(!a.approx_eq(&b, 1e-15));
    ///
    /// let nan = Matrix::new([[f64::NAN]]);
    /// assert!(!nan.approx_eq(&nan, 1.0));
    /// ```
    pub fn approx_eq(&self, rhs: &Matrix<T>, eps: T::Real) -> bool {
        if self.size() != rhs.size() {
            return false;
        }
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                let a = self.get(i, j);
                let b = rhs.get(i, j);
                // NaN never compares equal to itself
                if a != a || b != b {
                    return false;
                }
                if (a - b).modulus() > eps {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub() {
        let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0_f64, 6.0], [7.0, 8.0]]);

        let c = &a + &b;
        assert_eq!(c.get(0, 0), 6.0);
        assert_eq!(c.get(1, 1), 12.0);

        let d = &b - &a;
        assert_eq!(d.get(0, 0), 4.0);
        assert_eq!(d.get(1, 1), 4.0);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn add_shape_mismatch() {
        let a: Matrix<f64> = Matrix::zeros(2, 2);
        let b: Matrix<f64> = Matrix::zeros(2, 3);
        let _ = &a + &b;
    }

    #[test]
    fn add_assign_through_view() {
        let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
        let mut window = m.submatrix(1.., 1..);
        window += &Matrix::fill(2, 2, 10.0);
        assert_eq!(m.get(1, 1), 14.0);
        assert_eq!(m.get(2, 2), 18.0);
        assert_eq!(m.get(0, 0), 0.0); // outside the window untouched
    }

    #[test]
    fn sub_assign() {
        let mut a = Matrix::new([[5.0_f64, 6.0]]);
        a -= &Matrix::new([[1.0_f64, 2.0]]);
        assert_eq!(a.get(0, 0), 4.0);
        assert_eq!(a.get(0, 1), 4.0);
    }

    #[test]
    fn neg() {
        let a = Matrix::new([[1.0_f64, -2.0]]);
        let b = -&a;
        assert_eq!(b.get(0, 0), -1.0);
        assert_eq!(b.get(0, 1), 2.0);
    }

    #[test]
    fn matrix_multiply() {
        let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0_f64, 6.0], [7.0, 8.0]]);
        let c = &a * &b;
        assert_eq!(c.get(0, 0), 19.0);
        assert_eq!(c.get(0, 1), 22.0);
        assert_eq!(c.get(1, 0), 43.0);
        assert_eq!(c.get(1, 1), 50.0);
    }

    #[test]
    fn matrix_multiply_non_square() {
        let a = Matrix::new([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Matrix::new([[7.0_f64, 8.0], [9.0, 10.0], [11.0, 12.0]]);
        let c = &a * &b;
        assert_eq!(c.size(), (2, 2));
        assert_eq!(c.get(0, 0), 58.0);
        assert_eq!(c.get(0, 1), 64.0);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn multiply_shape_mismatch() {
        let a: Matrix<f64> = Matrix::zeros(2, 3);
        let b: Matrix<f64> = Matrix::zeros(2, 2);
        let _ = &a * &b;
    }

    #[test]
    fn multiply_views() {
        let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
        let left = m.submatrix(..2, ..2);
        let right = m.submatrix(1.., 1..);
        let c = &left * &right;
        // [[0,1],[3,4]] * [[4,5],[7,8]]
        assert_eq!(c.get(0, 0), 7.0);
        assert_eq!(c.get(1, 1), 47.0);
    }

    #[test]
    fn identity_multiply() {
        let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        let id: Matrix<f64> = Matrix::eye(2);
        assert!((&a * &id).approx_eq(&a, 0.0));
        assert!((&id * &a).approx_eq(&a, 0.0));
    }

    #[test]
    fn scalar_multiply_divide() {
        let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        let b = &a * 3.0;
        assert_eq!(b.get(0, 0), 3.0);
        assert_eq!(b.get(1, 1), 12.0);

        let c = 3.0 * &a;
        assert!(c.approx_eq(&b, 0.0));

        let d = &b / 3.0;
        assert!(d.approx_eq(&a, 1e-15));
    }

    #[test]
    fn scalar_assign_through_view() {
        let m = Matrix::fill(2, 2, 2.0_f64);
        let mut c = m.col(0);
        c *= 5.0;
        assert_eq!(m.get(0, 0), 10.0);
        assert_eq!(m.get(0, 1), 2.0);
        c /= 10.0;
        assert_eq!(m.get(1, 0), 1.0);
    }

    #[test]
    fn scalar_product() {
        let a = Matrix::new([[1.0_f64, 2.0, 3.0]]);
        let b = Matrix::new([[4.0_f64, 5.0, 6.0]]);
        assert_eq!(a.scalar_product(&b), 32.0);
        // row against column is fine
        assert_eq!(a.scalar_product(&b.transpose()), 32.0);
    }

    #[test]
    #[should_panic(expected = "requires vectors")]
    fn scalar_product_non_vector() {
        let a: Matrix<f64> = Matrix::zeros(2, 2);
        let b: Matrix<f64> = Matrix::zeros(2, 2);
        let _ = a.scalar_product(&b);
    }

    #[test]
    fn approx_eq_tolerance() {
        let a = Matrix::new([[1.0_f64, 2.0]]);
        let b = Matrix::new([[1.0_f64 + 5e-10, 2.0 - 5e-10]]);
        assert!(a.approx_eq(&b, 1e-9));
        assert!(b.approx_eq(&a, 1e-9)); // symmetric
        assert!(a.approx_eq(&a, 0.0)); // reflexive
        assert!(!a.approx_eq(&b, 1e-12));
    }

    #[test]
    fn approx_eq_nan_and_shape() {
        let a = Matrix::new([[f64::NAN, 1.0]]);
        assert!(!a.approx_eq(&a, f64::INFINITY));

        let b = Matrix::new([[1.0_f64], [2.0]]);
        let c = Matrix::new([[1.0_f64, 2.0]]);
        assert!(!b.approx_eq(&c, 1.0));
    }

    #[test]
    fn complex_ops() {
        use num_complex::Complex;
        type C = Complex<f64>;
        let a = Matrix::new([[C::new(1.0, 1.0), C::new(0.0, -1.0)]]);
        let b = &a * C::new(0.0, 1.0);
        assert_eq!(b.get(0, 0), C::new(-1.0, 1.0));
        assert_eq!(b.get(0, 1), C::new(1.0, 0.0));

        let c = C::new(0.0, 1.0) * &a;
        assert!(c.approx_eq(&b, 0.0));
    }
}
