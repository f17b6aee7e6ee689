// tests/integration/properties.rs
//! Algebraic properties checked over generated inputs.

use approx::abs_diff_eq;
use lumen::prelude::*;
use proptest::prelude::*;

fn vector3() -> impl Strategy<Value = Vector3<f64>> {
    prop::array::uniform3(-1.0e3..1.0e3f64).prop_map(Vector3::from_array)
}

fn matrix() -> impl Strategy<Value = Matrix<f64>> {
    prop::array::uniform16(-1.0e3..1.0e3f64).prop_map(Matrix::from_elements)
}

/// Off-diagonal entries in (-1, 1) and diagonal magnitudes of at least 4,
/// so every generated matrix is strictly diagonally dominant.
fn diagonally_dominant() -> impl Strategy<Value = Matrix<f64>> {
    (
        prop::array::uniform16(-1.0..1.0f64),
        prop::array::uniform4(4.0..50.0f64),
        prop::array::uniform4(any::<bool>()),
    )
        .prop_map(|(mut data, diagonal, negate)| {
            for i in 0..4 {
                data[i * 5] = if negate[i] { -diagonal[i] } else { diagonal[i] };
            }
            Matrix::from_elements(data)
        })
}

proptest! {
    #[test]
    fn prop_owned_and_borrowed_ops_agree(u in vector3(), v in vector3(), s in -10.0..10.0f64) {
        prop_assert_eq!(binary_op(&u, &v, |a, b| a * b + s), binary_op_owned(u, &v, |a, b| a * b + s));
        prop_assert_eq!(unary_op(&u, |a| a - s), unary_op_owned(u, |a| a - s));
    }

    #[test]
    fn prop_matrix_ops_agree(m in matrix(), n in matrix()) {
        prop_assert_eq!(binary_op(&m, &n, f64::max), binary_op_owned(m, &n, f64::max));
        prop_assert_eq!(m + n, binary_op(&m, &n, |a, b| a + b));
    }

    #[test]
    fn prop_transpose_is_involution(m in matrix()) {
        prop_assert_eq!(transpose(&transpose(&m)), m);
    }

    #[test]
    fn prop_dot_is_symmetric(u in vector3(), v in vector3()) {
        prop_assert_eq!(dot(&u, &v), dot(&v, &u));
    }

    #[test]
    fn prop_cross_is_anticommutative(u in vector3(), v in vector3()) {
        prop_assert_eq!(cross(&u, &v), -cross(&v, &u));
    }

    #[test]
    fn prop_inverse_of_dominant_matrix(m in diagonally_dominant()) {
        let inv = inverse(&m).unwrap();
        prop_assert!(abs_diff_eq!(m * inv, Matrix::identity(), epsilon = 1e-9));
        prop_assert!(abs_diff_eq!(inv * m, Matrix::identity(), epsilon = 1e-9));
    }

    #[test]
    fn prop_inverse_leaves_input_untouched(m in diagonally_dominant()) {
        let before = m;
        let _ = inverse(&m);
        prop_assert_eq!(m, before);
    }
}
