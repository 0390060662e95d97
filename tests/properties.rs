use ndarray::{Array1, Array2};
use proptest::prelude::*;
use relaxlu::residual::{norm, norm_inf, residual_norm};
use relaxlu::{factorize, solve_lu, solve_relaxed_newton};

/// Random matrices with a dominant diagonal are never singular.
fn dominant_matrix(n: usize) -> impl Strategy<Value = Array2<f64>> {
    proptest::collection::vec(-10.0_f64..10.0, n * n).prop_map(move |data| {
        let mut a = Array2::from_shape_vec((n, n), data).expect("valid dimensions");
        for i in 0..n {
            let row_sum: f64 = a.row(i).iter().map(|v| v.abs()).sum();
            a[(i, i)] = row_sum + 1.0;
        }
        a
    })
}

fn vector(n: usize) -> impl Strategy<Value = Array1<f64>> {
    proptest::collection::vec(-100.0_f64..100.0, n).prop_map(Array1::from)
}

fn system() -> impl Strategy<Value = (Array2<f64>, Array1<f64>)> {
    (1usize..8).prop_flat_map(|n| (dominant_matrix(n), vector(n)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn lu_residual_is_small((a, b) in system()) {
        let x = solve_lu(&a, &b).unwrap();
        let bound = 1e-12 * norm_inf(&a) * norm(&x).max(1.0) * a.nrows() as f64;
        prop_assert!(residual_norm(&a, &x, &b) <= bound);
    }

    #[test]
    fn reconstruction_matches_input((a, _b) in system()) {
        let fact = factorize(&a).unwrap();
        let back = fact.reconstruct();
        let scale = norm_inf(&a);
        for (x, y) in a.iter().zip(back.iter()) {
            prop_assert!((x - y).abs() <= 1e-12 * scale);
        }
        let perm = fact.permutation().as_slice().to_vec();
        let mut sorted = perm.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..a.nrows()).collect::<Vec<_>>());
    }

    #[test]
    fn newton_matches_lu((a, b) in system()) {
        let x_lu = solve_lu(&a, &b).unwrap();
        let tol = 1e-9 * norm(&b).max(1.0);
        let status = solve_relaxed_newton(&a, &b, 1.0, tol, 100, None).unwrap();
        prop_assert!(status.is_converged());
        for (p, q) in status.x.iter().zip(x_lu.iter()) {
            prop_assert!((p - q).abs() <= 1e-8 * q.abs().max(1.0));
        }
    }
}
