//! Complex-conjugate pair via quadratic deflation.
//!
//! The iterate runs in the complex scalar domain. Each step fits the monic
//! quadratic `x² + c₁x + c₀` whose roots annihilate the dominant pair —
//! the coefficients come from a least-squares solve against the real parts
//! of `u`, `A·u` and `−A²·u` — and the two roots are the step's eigenvalue
//! estimates. This handles genuinely complex-conjugate dominant pairs the
//! mirror-pair variant cannot represent, at a higher per-iteration cost,
//! and serves as the dispatcher's guaranteed fallback.

use alloc::vec::Vec;

use num_complex::Complex;
use num_traits::{One, Zero};

use crate::error::MatrixError;
use crate::linalg::{least_squares, solve_quadratic};
use crate::traits::FloatScalar;
use crate::Matrix;

use super::{Eigenpair, PowerOutcome};

/// Complex-pair iteration from the first coordinate vector.
///
/// Convergence is judged on both root estimates jointly: the step
/// difference is `max(|Δr₁|, |Δr₂|)`. A singular least-squares step is a
/// hard error ([`MatrixError::SingularSystem`]); everything else that goes
/// wrong is soft and surfaces as `iterations == None`.
pub(super) fn complex_pair<T: FloatScalar>(
    a: &Matrix<T>,
    eps: T,
    max_iters: usize,
    lookback: usize,
) -> Result<PowerOutcome<T>, MatrixError> {
    let n = a.nrows();
    let ca = a.to_complex();
    let ca2 = (a * a).to_complex();

    let mut y: Matrix<Complex<T>> = Matrix::zeros(n, 1);
    y.vec_set(0, Complex::one());
    let mut u = y.normalize();

    let mut r1: Complex<T> = Complex::zero();
    let mut r2: Complex<T> = Complex::zero();

    let lookback = lookback.max(1);
    let mut iterations = None;
    let mut diffs: Vec<T> = Vec::with_capacity(max_iters);
    for iter in 0..max_iters {
        y.assign(&(&ca * &u));
        u = y.normalize();

        let au = &ca * &u;
        let design = Matrix::from_fn(n, 2, |i, j| {
            if j == 0 {
                u.vec_get(i).re
            } else {
                au.vec_get(i).re
            }
        });
        let neg_a2u = -(&ca2 * &u);
        let target = Matrix::from_fn(n, 1, |i, _| neg_a2u.vec_get(i).re);

        let coeff = least_squares(&design, &target, eps)?;
        let (p1, p2) = solve_quadratic(T::one(), coeff.vec_get(1), coeff.vec_get(0))?;

        let diff = (p1 - r1).norm().max((p2 - r2).norm());
        r1 = p1;
        r2 = p2;
        diffs.push(diff);
        if diff < eps {
            iterations = Some(iter + 1);
            break;
        }
        if diffs.len() >= lookback {
            let earlier = diffs[diffs.len() - lookback];
            if diff >= earlier || (diff - earlier).abs() <= eps {
                break;
            }
        }
    }

    // Recover the eigenvectors by combining A·u and A²·u with the
    // converged roots. Degenerate candidates (including the NaN fallout of
    // a zero root) fail the norm cutoff and are dropped.
    let u1 = &ca * &u;
    let u2 = &ca2 * &u;
    let v1 = &u2 - &(&u1 * r2);
    let v2 = &u1 - &(&u2 / r1);

    let mut pairs = Vec::new();
    if v1.norm() > eps {
        pairs.push(Eigenpair {
            value: r1,
            vector: v1,
        });
    }
    if v2.norm() > eps {
        pairs.push(Eigenpair {
            value: r2,
            vector: v2,
        });
    }

    Ok(PowerOutcome { pairs, iterations })
}
