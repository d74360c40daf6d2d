//! Property tests for the algebraic contracts of the operation family.
//!
//! References:
//!   - Golub & Van Loan (2013) "Matrix Computations"

use crate::primitives::{Dimension, Matrix};

fn seeded(rows: usize, cols: usize, seed: u32) -> Matrix<f64> {
    let dim = Dimension::new(rows, cols).expect("positive sides");
    let data: Vec<f64> = (0..rows * cols)
        .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0)
        .collect();
    Matrix::from_vec(dim, data).expect("data fills the shape")
}

mod linalg_proptest {
    use super::*;
    use proptest::prelude::*;

    /// Main transpose involution: (A^T)^T = A
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn prop_transpose_main_involution(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let a = seeded(rows, cols, seed);
            let att = a.transpose_main().transpose_main();
            prop_assert_eq!(att, a);
        }

        #[test]
        fn prop_transpose_secondary_involution(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let a = seeded(rows, cols, seed);
            prop_assert_eq!(a.transpose_secondary().transpose_secondary(), a);
        }

        #[test]
        fn prop_transpose_mirror_involutions(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let a = seeded(rows, cols, seed);
            prop_assert_eq!(a.transpose_vertical().transpose_vertical(), a.clone());
            prop_assert_eq!(a.transpose_horizontal().transpose_horizontal(), a);
        }
    }

    /// Addition is commutative; elements are exact sums.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn prop_add_commutative(
            rows in 1..=6usize,
            cols in 1..=6usize,
            seed in 0..500u32,
        ) {
            let a = seeded(rows, cols, seed);
            let b = seeded(rows, cols, seed.wrapping_add(97));
            let ab = a.add(&b).expect("same shape");
            let ba = b.add(&a).expect("same shape");
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn prop_add_elementwise(
            rows in 1..=6usize,
            cols in 1..=6usize,
            seed in 0..500u32,
        ) {
            let a = seeded(rows, cols, seed);
            let b = seeded(rows, cols, seed.wrapping_add(31));
            let sum = a.add(&b).expect("same shape");
            for row in 0..rows {
                for col in 0..cols {
                    prop_assert_eq!(sum.get(row, col), a.get(row, col) + b.get(row, col));
                }
            }
        }
    }

    /// Identity multiplication: A * I = A
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn prop_identity_matmul(
            rows in 1..=6usize,
            cols in 1..=6usize,
            seed in 0..500u32,
        ) {
            let a = seeded(rows, cols, seed);
            let eye = Matrix::identity(cols).expect("positive size");
            let result = a.matmul(&eye).expect("compatible");
            for row in 0..rows {
                for col in 0..cols {
                    prop_assert!(
                        (result.get(row, col) - a.get(row, col)).abs() < 1e-9,
                        "(A*I)[{},{}] != A[{},{}]", row, col, row, col
                    );
                }
            }
        }
    }

    /// inverse(A) * A is the identity whenever the determinant is nonzero.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn prop_inverse_left_identity(
            n in 2..=4usize,
            seed in 0..500u32,
        ) {
            // diagonally dominant, so the determinant is never zero
            let mut a = seeded(n, n, seed);
            for i in 0..n {
                a.set(i, i, a.get(i, i) + 25.0);
            }
            let det = a.determinant().expect("square");
            prop_assume!(det != 0.0);

            let inv = a.inverse().expect("nonzero determinant");
            let product = inv.matmul(&a).expect("square product");
            for row in 0..n {
                for col in 0..n {
                    let expected = if row == col { 1.0 } else { 0.0 };
                    prop_assert!(
                        (product.get(row, col) - expected).abs() < 1e-6,
                        "inverse(A)*A differs from I at ({}, {})", row, col
                    );
                }
            }
        }
    }
}
