// tests/integration/validation_modes.rs
//! Contract checking under each validation mode.

use lumen::prelude::*;

#[test]
fn test_strict_mode_panics_on_nan_splat() {
    let result = std::panic::catch_unwind(|| {
        with_validation_mode(ValidationMode::Strict, || Vector3::splat(f64::NAN))
    });
    assert!(result.is_err());
}

#[test]
fn test_off_mode_accepts_nan_splat() {
    let v = with_validation_mode(ValidationMode::Off, || Vector3::splat(f64::NAN));
    assert!(has_nans(&v));
}

#[test]
fn test_warn_mode_continues_past_violations() {
    println!("=== Warn Mode Test ===");

    let (v, p) = with_validation_mode(ValidationMode::Warn, || {
        let v = Vector3::new(f32::INFINITY, 0.0, 0.0);
        let p = permute(&Vector3::new(1_i32, 2, 3), [2, 1, 0]);
        (v, p)
    });
    assert!(!Scalar::is_finite(v.x()));
    assert_eq!(p, Vector3::new(3, 2, 1));

    println!("Warn mode: OK");
}

#[test]
fn test_strict_mode_rejects_out_of_range_access() {
    let m = Matrix::<f32>::identity();
    let row = std::panic::catch_unwind(|| with_validation_mode(ValidationMode::Strict, || m.col(7)));
    assert!(row.is_err());

    // Without the contract the slice index itself still panics.
    let unchecked = std::panic::catch_unwind(|| with_validation_mode(ValidationMode::Off, || m[(4, 0)]));
    assert!(unchecked.is_err());
}

#[test]
fn test_config_presets_and_parsing() {
    assert_eq!(NumericsConfig::strict().validation, ValidationMode::Strict);
    assert_eq!(NumericsConfig::permissive().validation, ValidationMode::Warn);
    assert_eq!(NumericsConfig::unchecked().validation, ValidationMode::Off);

    let mode: ValidationMode = "Strict".parse().unwrap();
    assert_eq!(mode, ValidationMode::Strict);

    match "verbose".parse::<ValidationMode>() {
        Err(NumericsError::InvalidValidationMode(raw)) => assert_eq!(raw, "verbose"),
        other => panic!("Expected InvalidValidationMode error, got: {:?}", other),
    }
}

#[test]
fn test_thread_override_does_not_leak() {
    let outside = ValidationMode::current();

    let handle = std::thread::spawn(|| {
        with_validation_mode(ValidationMode::Off, ValidationMode::current)
    });
    assert_eq!(handle.join().unwrap(), ValidationMode::Off);

    assert_eq!(ValidationMode::current(), outside);
}
