//! Dominant real eigenvalue by classic power iteration.

use alloc::vec::Vec;

use crate::traits::FloatScalar;
use crate::Matrix;

/// One update step: `y = A·u`, renormalize, re-estimate the Rayleigh
/// quotient `uᵀ·A·u`.
fn rayleigh_step<T: FloatScalar>(a: &Matrix<T>, u: &mut Matrix<T>) -> T {
    let y = a * &*u;
    *u = y.normalize();
    u.scalar_product(&(a * &*u))
}

/// Power iteration from the first coordinate vector.
///
/// Returns the last eigenvalue estimate, the final iterate (the normalized
/// eigenvector when converged), and the number of iterations spent —
/// `None` when the run hit its cap, was judged oscillating, or the iterate
/// collapsed below `eps`. A capped run reports `None` even though it still
/// returns its last estimate: a stale value is never presented as
/// converged.
pub(super) fn dominant<T: FloatScalar>(
    a: &Matrix<T>,
    eps: T,
    max_iters: usize,
    lookback: usize,
) -> (T, Matrix<T>, Option<usize>) {
    let n = a.nrows();
    let mut u: Matrix<T> = Matrix::zeros(n, 1);
    u.vec_set(0, T::one());
    let mut lambda = u.scalar_product(&(a * &u));

    let lookback = lookback.max(1);
    let mut iterations = None;
    let mut diffs: Vec<T> = Vec::with_capacity(max_iters);
    for iter in 0..max_iters {
        let prev = lambda;
        lambda = rayleigh_step(a, &mut u);
        let diff = (lambda - prev).abs();
        diffs.push(diff);
        if diff < eps {
            iterations = Some(iter + 1);
            break;
        }
        if diffs.len() >= lookback {
            let earlier = diffs[diffs.len() - lookback];
            // No better than `lookback` iterations ago: oscillating.
            if diff >= earlier || (diff - earlier).abs() <= eps {
                break;
            }
        }
    }
    if u.norm() < eps {
        iterations = None;
    }
    (lambda, u, iterations)
}
