//! Equal-magnitude ±λ real pair via the squared matrix.
//!
//! Iterating on `A²` strips the sign of the dominant pair, so the Rayleigh
//! quotient converges to `λ²` whenever the spectrum is dominated by a real
//! `{+λ, −λ}` pair. The two eigenvectors are then disentangled from the
//! converged iterate by combining `A·u` and `A²·u`.

use alloc::vec::Vec;

use num_complex::Complex;

use crate::traits::FloatScalar;
use crate::Matrix;

use super::{Eigenpair, PowerOutcome};

/// Mirror-pair iteration.
///
/// `y` is the raw (unnormalized) iterate; it is updated in place so a
/// follow-up call warm-starts where this one left off — the dispatcher
/// relies on that for its probe/full-precision pairing. `eps` doubles as
/// the convergence tolerance and the degenerate-eigenvector cutoff.
pub(super) fn mirror_pair<T: FloatScalar>(
    a: &Matrix<T>,
    y: &mut Matrix<T>,
    eps: T,
    max_iters: usize,
    lookback: usize,
) -> PowerOutcome<T> {
    let a2 = a * a;
    let mut u = y.normalize();
    let mut mu = u.scalar_product(&(&a2 * &u));
    let mut lambda = mu.abs().sqrt();

    let lookback = lookback.max(1);
    let mut iterations = None;
    let mut diffs: Vec<T> = Vec::with_capacity(max_iters);
    for iter in 0..max_iters {
        let prev = lambda;
        y.assign(&(&a2 * &u));
        u = y.normalize();
        mu = u.scalar_product(&(&a2 * &u));
        lambda = mu.abs().sqrt();
        let diff = (lambda - prev).abs();
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

    // The quotient of A² converges to +λ² for a real mirror pair but to
    // −λ² for an imaginary one. A non-positive quotient therefore means
    // this variant cannot represent the dominant pair.
    if mu <= eps {
        iterations = None;
    }

    let two = T::one() + T::one();
    let au = a * &u;
    let a2u = &a2 * &u;
    let v_plus = &(&(&au * lambda) + &a2u) / (two * lambda * lambda);
    let v_minus = &(&a2u - &(&au * lambda)) / (two * lambda * lambda);

    // A candidate must be non-degenerate and must actually satisfy
    // A·v ≈ λ·v: when the dominant eigenvalue is isolated rather than a
    // mirror pair, the quotient still converges but one recovered vector is
    // a subdominant-direction artifact. The iterate error at convergence is
    // O(√eps), which sets the residual scale.
    let accept = |lam: T, v: &Matrix<T>| {
        let nv = v.norm();
        nv > eps && (&(a * v) - &(v * lam)).norm() <= eps.sqrt() * (T::one() + lam.abs()) * nv
    };

    let mut pairs = Vec::new();
    if accept(lambda, &v_plus) {
        pairs.push(Eigenpair {
            value: Complex::new(lambda, T::zero()),
            vector: v_plus.to_complex(),
        });
    }
    if accept(-lambda, &v_minus) {
        pairs.push(Eigenpair {
            value: Complex::new(-lambda, T::zero()),
            vector: v_minus.to_complex(),
        });
    }
    if pairs.is_empty() {
        iterations = None;
    }

    PowerOutcome { pairs, iterations }
}
