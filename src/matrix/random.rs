//! Random matrix factories.
//!
//! The generator lives in thread-local storage so concurrent callers get
//! independent, reproducible streams; [`reseed`] forces a known state for
//! deterministic test fixtures.

use core::cell::RefCell;

use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use num_traits::NumCast;

use crate::traits::{FloatScalar, Scalar};

use super::Matrix;

std::thread_local! {
    static GEN: RefCell<StdRng> = RefCell::new(StdRng::from_entropy());
}

/// Reseed this thread's generator to a known state.
pub fn reseed(seed: u64) {
    GEN.with(|g| *g.borrow_mut() = StdRng::seed_from_u64(seed));
}

impl<T: Scalar + SampleUniform> Matrix<T> {
    /// A `rows x cols` matrix with entries drawn uniformly from
    /// `[min, max)`.
    ///
    /// ```
    /// use spectris::matrix::random::reseed;
    /// use spectris::Matrix;
    ///
    /// reseed(42);
    /// let a: Matrix<f64> = Matrix::random(2, 3, -1.0, 1.0);
    /// reseed(42);
    /// let b: Matrix<f64> = Matrix::random(2, 3, -1.0, 1.0);
    /// assert!(a.approx_eq(&b, 0.0));
    /// ```
    pub fn random(rows: usize, cols: usize, min: T, max: T) -> Self {
        let dist = Uniform::new(min, max);
        GEN.with(|g| Matrix::from_fn(rows, cols, |_, _| dist.sample(&mut *g.borrow_mut())))
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// A `rows x cols` matrix of uniform integers from `[min, max]`,
    /// stored as floats — handy for well-conditioned test fixtures.
    ///
    /// ```
    /// use spectris::matrix::random::reseed;
    /// use spectris::Matrix;
    ///
    /// reseed(7);
    /// let m: Matrix<f64> = Matrix::random_ints(3, 3, 0, 9);
    /// let x = m.get(0, 0);
    /// assert!(x >= 0.0 && x <= 9.0 && x.fract() == 0.0);
    /// ```
    pub fn random_ints(rows: usize, cols: usize, min: i32, max: i32) -> Self {
        let dist = Uniform::new_inclusive(min, max);
        GEN.with(|g| {
            Matrix::from_fn(rows, cols, |_, _| {
                // i32 → float is exact
                T::from(dist.sample(&mut *g.borrow_mut())).unwrap_or_else(T::zero)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reseed_is_reproducible() {
        reseed(123);
        let a: Matrix<f64> = Matrix::random(4, 4, 0.0, 10.0);
        reseed(123);
        let b: Matrix<f64> = Matrix::random(4, 4, 0.0, 10.0);
        assert!(a.approx_eq(&b, 0.0));
    }

    #[test]
    fn random_respects_bounds() {
        reseed(5);
        let m: Matrix<f64> = Matrix::random(10, 10, -2.0, 3.0);
        for i in 0..10 {
            for j in 0..10 {
                let x = m.get(i, j);
                assert!((-2.0..3.0).contains(&x));
            }
        }
    }

    #[test]
    fn random_ints_are_integral() {
        reseed(9);
        let m: Matrix<f64> = Matrix::random_ints(5, 5, -3, 3);
        for i in 0..5 {
            for j in 0..5 {
                let x = m.get(i, j);
                assert!(x.fract() == 0.0 && (-3.0..=3.0).contains(&x));
            }
        }
    }
}
