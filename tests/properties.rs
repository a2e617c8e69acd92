//! Property-based tests using proptest.

use linalgkit::{conv1d, multiply, Error, Matrix};
use proptest::prelude::*;

fn matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Vec<Vec<f64>>> {
    proptest::collection::vec(proptest::collection::vec(-100.0f64..100.0, cols), rows)
}

fn shaped_matrix() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..6, 1usize..6).prop_flat_map(|(r, c)| matrix_strategy(r, c))
}

fn identity(n: usize) -> Vec<Vec<f64>> {
    Matrix::identity(n).to_rows()
}

fn close(a: &[Vec<f64>], b: &[Vec<f64>], tol: f64) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(ra, rb)| {
            ra.len() == rb.len()
                && ra
                    .iter()
                    .zip(rb)
                    .all(|(x, y)| (x - y).abs() <= tol * (1.0 + x.abs().max(y.abs())))
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn product_has_outer_shape(
        (a, b) in (1usize..6, 1usize..6, 1usize..6)
            .prop_flat_map(|(m, k, n)| (matrix_strategy(m, k), matrix_strategy(k, n)))
    ) {
        let c = multiply(&a, &b).unwrap();
        prop_assert_eq!(c.len(), a.len());
        for row in &c {
            prop_assert_eq!(row.len(), b[0].len());
        }
    }

    #[test]
    fn identity_is_neutral(a in shaped_matrix()) {
        let right = identity(a[0].len());
        let left = identity(a.len());
        prop_assert_eq!(multiply(&a, &right).unwrap(), a.clone());
        prop_assert_eq!(multiply(&left, &a).unwrap(), a);
    }

    #[test]
    fn zero_matrix_annihilates(a in shaped_matrix(), n in 1usize..5) {
        let z = vec![vec![0.0; n]; a[0].len()];
        let c = multiply(&a, &z).unwrap();
        prop_assert_eq!(c, vec![vec![0.0; n]; a.len()]);
    }

    #[test]
    fn multiply_matches_nested_loop(
        (a, b) in (1usize..6, 1usize..6, 1usize..6)
            .prop_flat_map(|(m, k, n)| (matrix_strategy(m, k), matrix_strategy(k, n)))
    ) {
        let c = multiply(&a, &b).unwrap();
        for (i, row) in c.iter().enumerate() {
            for (j, v) in row.iter().enumerate() {
                let mut expected = 0.0;
                for t in 0..b.len() {
                    expected += a[i][t] * b[t][j];
                }
                prop_assert_eq!(v.to_bits(), expected.to_bits());
            }
        }
    }

    #[test]
    fn multiply_is_associative(
        (a, b, c) in (1usize..5, 1usize..5, 1usize..5, 1usize..5).prop_flat_map(|(m, k, l, n)| {
            (matrix_strategy(m, k), matrix_strategy(k, l), matrix_strategy(l, n))
        })
    ) {
        let ab_c = multiply(&multiply(&a, &b).unwrap(), &c).unwrap();
        let a_bc = multiply(&a, &multiply(&b, &c).unwrap()).unwrap();
        prop_assert!(close(&ab_c, &a_bc, 1e-6));
    }

    #[test]
    fn mismatch_is_reported(
        (a, b) in (1usize..5, 1usize..5, 1usize..5, 1usize..5)
            .prop_filter("inner dimensions must differ", |(_, k, k2, _)| k != k2)
            .prop_flat_map(|(m, k, k2, n)| (matrix_strategy(m, k), matrix_strategy(k2, n)))
    ) {
        let err = multiply(&a, &b).unwrap_err();
        prop_assert_eq!(err, Error::DimensionMismatch { a_cols: a[0].len(), b_rows: b.len() });
    }

    #[test]
    fn ragged_is_invalid(a in shaped_matrix(), extra in 1usize..3) {
        let mut ragged = a.clone();
        ragged.push(vec![1.0; a[0].len() + extra]);
        prop_assert!(multiply(&ragged, &a).unwrap_err().is_invalid_argument());
        prop_assert!(multiply(&a, &ragged).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn conv1d_is_window_dot(
        (input, kernel) in (1usize..20).prop_flat_map(|n| {
            (proptest::collection::vec(-100.0f64..100.0, n),
             proptest::collection::vec(-10.0f64..10.0, 1..=n))
        })
    ) {
        let out = conv1d(&input, &kernel).unwrap();
        prop_assert_eq!(out.len(), input.len() - kernel.len() + 1);
        for (i, v) in out.iter().enumerate() {
            let mut expected = 0.0;
            for (j, w) in kernel.iter().enumerate() {
                expected += input[i + j] * w;
            }
            prop_assert_eq!(*v, expected);
        }
    }

    #[test]
    fn conv1d_long_kernel_is_empty(
        (input, kernel) in (1usize..10, 1usize..5).prop_flat_map(|(n, extra)| {
            (proptest::collection::vec(-100.0f64..100.0, n),
             proptest::collection::vec(-10.0f64..10.0, n + extra))
        })
    ) {
        prop_assert_eq!(conv1d(&input, &kernel).unwrap(), Vec::<f64>::new());
    }
}
