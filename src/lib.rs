//! # spectris
//!
//! Dense real and complex matrices with shared-storage views, plus a family
//! of power-iteration algorithms that extract dominant eigenvalues and
//! eigenvectors — including equal-magnitude and complex-conjugate pairs —
//! without a full diagonalization.
//!
//! ## Quick start
//!
//! ```
//! use spectris::{power_eigen, Matrix, PowerSettings};
//!
//! let a = Matrix::new([[2.0_f64, 0.0], [0.0, 1.0]]);
//! let settings = PowerSettings { eps: 1e-10, ..Default::default() };
//!
//! let out = power_eigen(&a, &settings).unwrap();
//! assert!(out.iterations.is_some());
//! assert!((out.pairs[0].value.re - 2.0).abs() < 1e-8);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — heap-allocated `Matrix<T>` with runtime dimensions.
//!   Row-major storage behind a reference-counted buffer, so
//!   [`Matrix::submatrix`], [`Matrix::row`] and [`Matrix::col`] are true
//!   views: writing through a view writes into the parent's storage.
//!   Owned copies ([`Clone`], arithmetic results, [`Matrix::transpose`])
//!   always allocate fresh storage.
//!
//! - [`eigen`] — the power-iteration family: dominant real eigenvalue,
//!   equal-magnitude ±λ pair via the squared matrix, and complex-conjugate
//!   pair via quadratic deflation, with a dispatcher ([`power_eigen`]) that
//!   probes the cheap variant before falling back to the general one.
//!   Convergence failure is reported through
//!   [`PowerOutcome::iterations`]` == None`, never as an error.
//!
//! - [`linalg`] — direct support solvers: minimal-norm least squares
//!   ([`least_squares`]) and quadratic roots over the complex numbers
//!   ([`solve_quadratic`]).
//!
//! - [`traits`] — element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`)
//!   - [`LinalgScalar`] — real floats and complex numbers, used by norms
//!     and the iterative solvers
//!
//! ## Tolerances
//!
//! There is no process-wide epsilon: every comparison and convergence check
//! takes its tolerance explicitly, either as a parameter
//! ([`Matrix::approx_eq`], [`least_squares`]) or through a settings struct
//! ([`PowerSettings`]). Display precision is threaded the same way
//! ([`Matrix::format_with`], [`Matrix::to_wolfram_string`]).
//!
//! ## Threading
//!
//! Matrix buffers are shared through [`alloc::rc::Rc`] and are not `Send`:
//! all mutation is single-threaded by construction, and the algorithms are
//! pure functions of their inputs and settings. The random factories (the
//! only stateful helpers) keep their generator in thread-local storage.
//!
//! ## Cargo features
//!
//! | Feature  | Default  | Description |
//! |----------|----------|-------------|
//! | `std`    | yes      | Hardware FPU via system libm |
//! | `libm`   | no       | Pure-Rust software float fallback for `no_std` |
//! | `random` | yes      | `Matrix::random` / `Matrix::random_ints` (requires `std`) |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod eigen;
pub mod error;
pub mod linalg;
pub mod matrix;
pub mod traits;

pub use eigen::{power_eigen, Eigenpair, PowerMethod, PowerOutcome, PowerSettings};
pub use error::MatrixError;
pub use linalg::{least_squares, solve_quadratic};
pub use matrix::{Matrix, Matrixf32, Matrixf64, Matrixz32, Matrixz64};
pub use traits::{FloatScalar, LinalgScalar, Scalar};

pub use num_complex::Complex;
