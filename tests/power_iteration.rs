//! End-to-end exercises of the public API: container semantics, support
//! solvers, and the eigen dispatcher on representative spectra.

use spectris::{
    least_squares, power_eigen, solve_quadratic, Complex, Eigenpair, Matrix, MatrixError,
    PowerMethod, PowerSettings,
};

const TOL: f64 = 1e-8;

fn settings(eps: f64) -> PowerSettings<f64> {
    PowerSettings {
        eps,
        ..Default::default()
    }
}

fn residual(a: &Matrix<f64>, pair: &Eigenpair<f64>) -> f64 {
    let ca = a.to_complex();
    let av = &ca * &pair.vector;
    let lv = &pair.vector * pair.value;
    (&av - &lv).norm() / pair.vector.norm()
}

// ── Container ───────────────────────────────────────────────────────

#[test]
fn views_share_storage_with_parent() {
    let m = Matrix::from_fn(4, 4, |i, j| (i * 4 + j) as f64);
    let mut window = m.submatrix(1..3, 1..3);
    window.set(0, 0, -1.0);
    window += &Matrix::fill(2, 2, 100.0);
    assert_eq!(m.get(1, 1), 99.0);
    assert_eq!(m.get(2, 2), 110.0);
    assert_eq!(m.get(0, 0), 0.0);

    // An owned copy detaches from the buffer.
    let mut copy = window.clone();
    copy.set(0, 0, 7.0);
    assert_eq!(m.get(1, 1), 99.0);
}

#[test]
fn transpose_round_trip_within_eps() {
    let a = Matrix::new([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let tt = a.transpose().transpose();
    assert!(a.approx_eq(&tt, 1e-15));

    let mut t = a.transpose();
    t.set(0, 0, -9.0);
    assert_eq!(a.get(0, 0), 1.0);
}

#[test]
fn equality_is_epsilon_tolerant_and_nan_hostile() {
    let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
    let b = &a + &Matrix::fill(2, 2, 1e-12);
    assert!(a.approx_eq(&b, 1e-9));
    assert!(b.approx_eq(&a, 1e-9));
    assert!(!a.approx_eq(&b, 1e-14));

    let nan = Matrix::new([[1.0_f64, f64::NAN]]);
    assert!(!nan.approx_eq(&nan, f64::INFINITY));
}

// ── Support solvers ─────────────────────────────────────────────────

#[test]
fn least_squares_recovers_consistent_coefficients() {
    let l = Matrix::new([
        [1.0_f64, 2.0],
        [3.0, 4.0],
        [5.0, 6.0],
        [7.0, 9.0],
    ]);
    let c_true = Matrix::new([[-1.5_f64], [2.25]]);
    let r = &l * &c_true;
    let c = least_squares(&l, &r, 1e-12).unwrap();
    assert!(c.approx_eq(&c_true, 1e-9));
}

#[test]
fn quadratic_solver_contract() {
    let (r1, r2) = solve_quadratic(1.0_f64, -3.0, 2.0).unwrap();
    let mut roots = [r1.re, r2.re];
    roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert!((roots[0] - 1.0).abs() < 1e-12);
    assert!((roots[1] - 2.0).abs() < 1e-12);

    let (i1, i2) = solve_quadratic(1.0_f64, 0.0, 1.0).unwrap();
    assert!((i1 - Complex::new(0.0, 1.0)).norm() < 1e-12);
    assert!((i2 - Complex::new(0.0, -1.0)).norm() < 1e-12);

    assert_eq!(
        solve_quadratic(0.0_f64, 1.0, 1.0),
        Err(MatrixError::InvalidArgument(
            "leading quadratic coefficient must be nonzero"
        ))
    );
}

// ── Eigen dispatcher ────────────────────────────────────────────────

#[test]
fn identity_has_unit_dominant_eigenvalue() {
    for n in 1..=5 {
        let a: Matrix<f64> = Matrix::eye(n);
        let s = PowerSettings {
            method: Some(PowerMethod::Dominant),
            ..settings(1e-10)
        };
        let out = power_eigen(&a, &s).unwrap();
        assert!(out.iterations.is_some());
        assert!((out.pairs[0].value.re - 1.0).abs() < TOL);
        assert!(residual(&a, &out.pairs[0]) < TOL);
    }
}

#[test]
fn mirror_spectrum_yields_both_signs() {
    let a = Matrix::new([[5.0_f64, 0.0], [0.0, -5.0]]);
    let out = power_eigen(&a, &settings(1e-10)).unwrap();
    assert!(out.iterations.is_some());
    assert_eq!(out.pairs.len(), 2);

    let values: Vec<f64> = out.pairs.iter().map(|p| p.value.re).collect();
    assert!(values.iter().any(|v| (v - 5.0).abs() < TOL));
    assert!(values.iter().any(|v| (v + 5.0).abs() < TOL));
    for pair in &out.pairs {
        assert_eq!(pair.value.im, 0.0);
        assert!(residual(&a, pair) < TOL);
    }
}

#[test]
fn rotation_matrix_yields_conjugate_pair() {
    let a = Matrix::new([[0.0_f64, -1.0], [1.0, 0.0]]);
    let out = power_eigen(&a, &settings(1e-10)).unwrap();
    assert!(out.iterations.is_some());
    assert_eq!(out.pairs.len(), 2);

    let (r1, r2) = (out.pairs[0].value, out.pairs[1].value);
    assert!((r1.norm() - 1.0).abs() < TOL);
    assert!((r2.norm() - 1.0).abs() < TOL);
    assert!((r1.conj() - r2).norm() < TOL);
    for pair in &out.pairs {
        assert!(residual(&a, pair) < TOL);
    }
}

#[test]
fn larger_mirror_spectrum_through_views() {
    // Embed a ±4 mirror pair as the dominant part of a 3x3 matrix built
    // through view assignment.
    let m: Matrix<f64> = Matrix::zeros(3, 3);
    let mut top = m.submatrix(..2, ..2);
    top.assign(&Matrix::new([[0.0_f64, 4.0], [4.0, 0.0]]));
    let mut corner = m.submatrix(2.., 2..);
    corner.set(0, 0, 1.0);

    let out = power_eigen(&m, &settings(1e-10)).unwrap();
    assert!(out.iterations.is_some());
    assert_eq!(out.pairs.len(), 2);
    let values: Vec<f64> = out.pairs.iter().map(|p| p.value.re).collect();
    assert!(values.iter().any(|v| (v - 4.0).abs() < TOL));
    assert!(values.iter().any(|v| (v + 4.0).abs() < TOL));
    // The subdominant direction leaks into the recovered vectors at the
    // O(√eps) iterate-error scale.
    for pair in &out.pairs {
        assert!(residual(&m, pair) < 1e-4);
    }
}

#[test]
fn zero_iteration_budget_reports_sentinel() {
    let a = Matrix::new([[2.0_f64, 1.0], [1.0, 3.0]]);
    let s = PowerSettings {
        max_iters: 0,
        probe_iters: 0,
        ..settings(1e-10)
    };
    let out = power_eigen(&a, &s).unwrap();
    assert_eq!(out.iterations, None);
}

#[test]
fn non_square_input_is_a_hard_error() {
    let a: Matrix<f64> = Matrix::zeros(3, 2);
    assert_eq!(
        power_eigen(&a, &settings(1e-10)).unwrap_err(),
        MatrixError::NotSquare { rows: 3, cols: 2 }
    );
}
