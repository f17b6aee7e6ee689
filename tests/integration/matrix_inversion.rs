// tests/integration/matrix_inversion.rs
//! Matrix inversion and transform composition.

use approx::assert_relative_eq;
use lumen::prelude::*;

fn translation(t: Vector3<f64>) -> Matrix<f64> {
    let mut m = Matrix::identity();
    m[(0, 3)] = t.x();
    m[(1, 3)] = t.y();
    m[(2, 3)] = t.z();
    m
}

fn scale(s: Vector3<f64>) -> Matrix<f64> {
    Matrix::from_rows([
        Vector4::new(s.x(), 0.0, 0.0, 0.0),
        Vector4::new(0.0, s.y(), 0.0, 0.0),
        Vector4::new(0.0, 0.0, s.z(), 0.0),
        Vector4::new(0.0, 0.0, 0.0, 1.0),
    ])
}

#[test]
fn test_identity_properties() {
    println!("=== Identity Properties Test ===");

    let id = Matrix::<f64>::identity();
    assert_eq!(inverse(&id), Ok(id));
    assert_eq!(transpose(&id), id);
    assert!(is_identity(&id));

    for k in 0..16 {
        let mut m = id;
        m.data[k] += 0.5;
        assert!(!is_identity(&m), "perturbed element {} not detected", k);
    }

    println!("Identity properties: OK");
}

#[test]
fn test_reference_inverse() {
    let m = Matrix::from_elements([
        4.0_f64, 0.0, 0.0, 14.0,
        0.0, 4.0, 0.0, 14.0,
        0.0, 0.0, 4.0, 14.0,
        0.0, 0.0, 0.0, 1.0,
    ]);
    let inv = inverse(&m).expect("matrix is invertible");

    for i in 0..3 {
        assert_eq!(inv[(i, i)], 0.25);
        assert_eq!(inv[(i, 3)], -3.5);
    }
    assert_eq!(inv[(3, 3)], 1.0);
    assert!(is_identity(&(m * inv)));
}

#[test]
fn test_transform_composition_inverts() {
    let t = translation(Vector3::new(1.0, -2.0, 3.0));
    let s = scale(Vector3::new(2.0, 4.0, 0.5));
    let object_to_world = t * s;

    let world_to_object = inverse(&object_to_world).expect("affine transform is invertible");
    let expected = inverse(&s).unwrap() * inverse(&t).unwrap();
    assert_relative_eq!(world_to_object, expected, epsilon = 1e-12);

    let p = Vector4::new(0.5, 0.25, 2.0, 1.0);
    let round_trip = world_to_object * (object_to_world * p);
    assert_relative_eq!(round_trip, p, epsilon = 1e-12);
}

#[test]
fn test_singular_inputs() {
    println!("=== Singular Inputs Test ===");

    let zero = Matrix::<f64>::zero();
    assert_eq!(inverse(&zero), Err(NumericsError::SingularMatrix));

    let sequential = Matrix::from_elements(core::array::from_fn(|k| (k + 1) as f32));
    let err = inverse(&sequential).unwrap_err();
    assert_eq!(err.to_string(), "cannot find inverse of singular matrix");

    let flat = scale(Vector3::new(1.0, 1.0, 0.0));
    assert!(inverse(&flat).is_err());

    println!("Singular inputs: OK");
}

#[test]
fn test_matrix_display_and_serde() {
    let m = translation(Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(
        m.to_string(),
        "( 1 0 0 1 )\n( 0 1 0 2 )\n( 0 0 1 3 )\n( 0 0 0 1 )"
    );

    let config = bincode::config::standard();
    let bytes = bincode::serde::encode_to_vec(m, config).unwrap();
    let (back, read): (Matrix<f64>, usize) =
        bincode::serde::decode_from_slice(&bytes, config).unwrap();
    assert_eq!(back, m);
    assert_eq!(read, bytes.len());
}
