use num_complex::Complex;

use crate::error::MatrixError;
use crate::traits::FloatScalar;

/// Roots of `a·x² + b·x + c = 0` for real coefficients, as a pair of
/// complex values.
///
/// A non-negative discriminant yields two real-valued roots
/// `(−b ± √disc) / 2a`; a negative discriminant yields a genuine conjugate
/// pair, the `+i` root first.
///
/// ```
/// use spectris::solve_quadratic;
///
/// let (r1, r2) = solve_quadratic(1.0_f64, -3.0, 2.0).unwrap();
/// assert!((r1.re - 2.0).abs() < 1e-12 && r1.im == 0.0);
/// assert!((r2.re - 1.0).abs() < 1e-12 && r2.im == 0.0);
///
/// let (i1, i2) = solve_quadratic(1.0_f64, 0.0, 1.0).unwrap();
/// assert!((i1.im - 1.0).abs() < 1e-12);
/// assert!((i2.im + 1.0).abs() < 1e-12);
/// ```
///
/// # Errors
///
/// [`MatrixError::InvalidArgument`] if `a == 0` (the equation is not a
/// quadratic).
pub fn solve_quadratic<T: FloatScalar>(
    a: T,
    b: T,
    c: T,
) -> Result<(Complex<T>, Complex<T>), MatrixError> {
    if a == T::zero() {
        return Err(MatrixError::InvalidArgument(
            "leading quadratic coefficient must be nonzero",
        ));
    }
    let two = T::one() + T::one();
    let four = two * two;
    let disc = b * b - four * a * c;
    let two_a = two * a;
    if disc >= T::zero() {
        let s = disc.sqrt();
        Ok((
            Complex::new((-b + s) / two_a, T::zero()),
            Complex::new((-b - s) / two_a, T::zero()),
        ))
    } else {
        let re = -b / two_a;
        let im = (-disc).sqrt() / two_a;
        Ok((Complex::new(re, im), Complex::new(re, -im)))
    }
}
