//! Power-iteration eigenvalue extraction.
//!
//! Three iterative variants, one dispatcher:
//!
//! - [`PowerMethod::Dominant`] — classic power iteration with a Rayleigh
//!   quotient estimate; one dominant *real* eigenvalue.
//! - [`PowerMethod::MirrorPair`] — iterates on `A²` to strip sign
//!   information and recovers an equal-magnitude `±λ` real pair.
//! - [`PowerMethod::ComplexPair`] — iterates in the complex domain and
//!   deflates through a fitted quadratic; handles genuinely
//!   complex-conjugate dominant pairs, at a higher per-iteration cost.
//!
//! [`power_eigen`] picks among them: unless a method is forced it probes
//! the mirror-pair variant at a loose tolerance, trusts a full-precision
//! pass only if the probe converged with a non-empty result, and otherwise
//! falls back to the complex-pair variant as the method of last resort.
//!
//! All variants share one convergence idiom: track the absolute differences
//! between successive estimates; converge when the latest difference drops
//! below `eps`; give up when a difference recorded
//! [`PowerSettings::lookback`] iterations earlier shows no improvement
//! (oscillation), or when the iteration cap is exhausted. Giving up is not
//! an error — the outcome carries `iterations == None` alongside whatever
//! the run last computed, which is what lets the dispatcher probe cheaply
//! before committing.

mod complex_pair;
mod dominant;
mod mirror_pair;


use alloc::vec;
use alloc::vec::Vec;

use num_complex::Complex;

use crate::error::MatrixError;
use crate::traits::FloatScalar;
use crate::Matrix;

/// An eigenvalue with its (column-shaped) eigenvector.
#[derive(Debug, Clone)]
pub struct Eigenpair<T: FloatScalar> {
    /// The eigenvalue. Real eigenvalues carry a zero imaginary part.
    pub value: Complex<T>,
    /// The eigenvector, not normalized.
    pub vector: Matrix<Complex<T>>,
}

/// Forced-method selector for [`power_eigen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerMethod {
    /// Dominant real eigenvalue by classic power iteration.
    Dominant,
    /// Equal-magnitude ±λ real pair via the squared matrix.
    MirrorPair,
    /// Complex-conjugate pair via quadratic deflation.
    ComplexPair,
}

/// Settings for [`power_eigen`].
///
/// There is no process-wide tolerance state: every convergence check reads
/// `eps` from here, so test suites can vary tolerances without global side
/// effects.
#[derive(Debug, Clone, Copy)]
pub struct PowerSettings<T> {
    /// Convergence tolerance on successive estimates; also the cutoff below
    /// which a recovered eigenvector is considered degenerate and dropped.
    pub eps: T,
    /// Loose tolerance for the dispatcher's cheap mirror-pair probe.
    pub probe_eps: T,
    /// Iteration cap for a full-precision run.
    pub max_iters: usize,
    /// Iteration budget for the dispatcher's probe run.
    pub probe_iters: usize,
    /// How many iterations back to look when testing for oscillation.
    pub lookback: usize,
    /// Run exactly this variant instead of dispatching.
    pub method: Option<PowerMethod>,
}

impl Default for PowerSettings<f64> {
    fn default() -> Self {
        Self {
            eps: f64::EPSILON,
            probe_eps: 0.1,
            max_iters: 100,
            probe_iters: 10,
            lookback: 5,
            method: None,
        }
    }
}

impl Default for PowerSettings<f32> {
    fn default() -> Self {
        Self {
            eps: f32::EPSILON,
            probe_eps: 0.1,
            max_iters: 100,
            probe_iters: 10,
            lookback: 5,
            method: None,
        }
    }
}

/// Result of a [`power_eigen`] run.
#[derive(Debug, Clone)]
pub struct PowerOutcome<T: FloatScalar> {
    /// Zero, one, or two eigenpairs, dominant first.
    pub pairs: Vec<Eigenpair<T>>,
    /// Iterations actually spent, or `None` if the run hit its cap, was
    /// judged oscillating, or produced only degenerate eigenvectors. The
    /// `pairs` of a `None` outcome are best-effort and may be empty.
    pub iterations: Option<usize>,
}

/// Start vector for the mirror-pair iteration: a graded ramp `1, 2, …, n`.
///
/// The ramp has a nonzero projection on both members of an axis-aligned
/// ±λ eigenvector pair, which a coordinate basis vector does not.
fn ramp_start<T: FloatScalar>(n: usize) -> Matrix<T> {
    let mut y: Matrix<T> = Matrix::zeros(n, 1);
    let mut v = T::zero();
    for i in 0..n {
        v = v + T::one();
        y.vec_set(i, v);
    }
    y
}

/// Extract dominant eigenpairs of a square real matrix by power iteration.
///
/// Returns an ordered list of zero, one, or two `(eigenvalue, eigenvector)`
/// pairs together with the iteration count actually used. Convergence
/// failure is soft: the outcome carries `iterations == None` and whatever
/// pairs survived, never an `Err`. Errors are reserved for hard argument
/// violations (non-square input, a singular least-squares step in the
/// complex-pair variant).
///
/// Unless [`PowerSettings::method`] forces a variant, the dispatcher first
/// probes the mirror-pair variant at [`PowerSettings::probe_eps`]; if the
/// probe converges with a non-empty pair set, a full-precision mirror-pair
/// pass is trusted (its iterate warm-starts from the probe, and the
/// reported iteration count is the sum of both passes). Anything else falls
/// back to the complex-pair variant, whose outcome — converged or not — is
/// final.
///
/// ```
/// use spectris::{power_eigen, Matrix, PowerSettings};
///
/// // Mirror spectrum {+5, -5}: resolved by the cheap variant.
/// let a = Matrix::new([[5.0_f64, 0.0], [0.0, -5.0]]);
/// let settings = PowerSettings { eps: 1e-10, ..Default::default() };
/// let out = power_eigen(&a, &settings).unwrap();
/// assert!(out.iterations.is_some());
/// assert_eq!(out.pairs.len(), 2);
/// assert!((out.pairs[0].value.re - 5.0).abs() < 1e-8);
/// assert!((out.pairs[1].value.re + 5.0).abs() < 1e-8);
/// ```
pub fn power_eigen<T: FloatScalar>(
    a: &Matrix<T>,
    settings: &PowerSettings<T>,
) -> Result<PowerOutcome<T>, MatrixError> {
    if !a.is_square() {
        return Err(MatrixError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }

    if let Some(method) = settings.method {
        return match method {
            PowerMethod::Dominant => {
                let (value, vector, iterations) =
                    dominant::dominant(a, settings.eps, settings.max_iters, settings.lookback);
                Ok(PowerOutcome {
                    pairs: vec![Eigenpair {
                        value: Complex::new(value, T::zero()),
                        vector: vector.to_complex(),
                    }],
                    iterations,
                })
            }
            PowerMethod::MirrorPair => {
                let mut y = ramp_start(a.nrows());
                Ok(mirror_pair::mirror_pair(
                    a,
                    &mut y,
                    settings.eps,
                    settings.max_iters,
                    settings.lookback,
                ))
            }
            PowerMethod::ComplexPair => complex_pair::complex_pair(
                a,
                settings.eps,
                settings.max_iters,
                settings.lookback,
            ),
        };
    }

    // Cheap probe: is the spectrum dominated by a same-magnitude real pair?
    let mut y = ramp_start(a.nrows());
    let probe = mirror_pair::mirror_pair(
        a,
        &mut y,
        settings.probe_eps,
        settings.probe_iters,
        settings.lookback,
    );
    if let Some(probe_iters) = probe.iterations {
        if !probe.pairs.is_empty() {
            // Full-precision pass, warm-started from the probe's iterate.
            let full = mirror_pair::mirror_pair(
                a,
                &mut y,
                settings.eps,
                settings.max_iters,
                settings.lookback,
            );
            if let Some(full_iters) = full.iterations {
                if !full.pairs.is_empty() {
                    return Ok(PowerOutcome {
                        pairs: full.pairs,
                        iterations: Some(probe_iters + full_iters),
                    });
                }
            }
        }
    }

    // Method of last resort: its outcome is final even when non-convergent.
    complex_pair::complex_pair(a, settings.eps, settings.max_iters, settings.lookback)
}
