// tests/integration/vector_algebra.rs
//! Vector, point and ray behaviour through the public prelude.

use approx::assert_relative_eq;
use lumen::prelude::*;

#[test]
fn test_vector_algebra_laws() {
    println!("=== Vector Algebra Laws Test ===");

    let u = Vector3::splat(1.0_f32);
    let v = Vector3::splat(2.0_f32);
    assert_eq!(dot(&u, &v), 6.0);
    assert_eq!(dot(&u, &v), dot(&v, &u));

    let a = Vector3::new(1_i64, 2, 3);
    let b = Vector3::new(4_i64, 5, 6);
    assert_eq!(cross(&a, &b), -cross(&b, &a));

    let w = Vector3::new(1.0_f64, 2.0, 2.0);
    assert_eq!(length(&w), 3.0);
    assert_eq!(normalise(&w), Vector3::new(1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0));

    println!("Vector algebra laws: OK");
}

#[test]
fn test_permute_and_reductions() {
    let v = Vector3::new(1_u32, 2, 3);
    assert_eq!(permute(&v, [1, 0, 2]), Vector3::new(2, 1, 3));
    assert_eq!(min_component(&v), 1);
    assert_eq!(max_dimension(&v), 2);

    let generic = Vector::<f64, 5>::from_array([3.0, -1.0, 4.0, -1.0, 5.0]);
    assert_eq!(min_dimension(&generic), 1);
    assert_eq!(max_component(&generic), 5.0);
    assert_eq!(abs(&generic), Vector::from_array([3.0, 1.0, 4.0, 1.0, 5.0]));
}

#[test]
fn test_shading_frame_from_normal() {
    println!("=== Shading Frame Test ===");

    let n: Normal3<f32> = normalise(&Vector3::new(0.2, 0.9, -0.4));
    let (s, t) = coordinate_system(&n);

    for (a, b) in [(n, s), (n, t), (s, t)] {
        assert_relative_eq!(dot(&a, &b), 0.0, epsilon = 1e-6);
    }
    assert_relative_eq!(cross(&n, &s), t, epsilon = 1e-6);

    println!("Shading frame: OK");
}

#[test]
fn test_ray_walk_between_points() {
    let start: Point3<f64> = Point3::new(1.0, 1.0, 1.0);
    let end: Point3<f64> = Point3::new(4.0, 5.0, 1.0);
    let dir = normalise(&(end - start));

    let ray = Ray::new(start, dir);
    let hit = ray.at(distance(&start, &end));

    assert_relative_eq!(hit, end, epsilon = 1e-12);
    assert_eq!(distance_squared(&start, &end), 25.0);
    assert_eq!(ray.to_string(), "o = ( 1 1 1 ), d = ( 0.6 0.8 0 )");
}

#[test]
fn test_dimension_conversions() {
    let p2 = Point2::new(1.0_f32, 2.0);
    let p3: Point3<f32> = p2.into();
    let p4: Point4<f32> = p3.into();

    assert_eq!(p4, Point4::new(1.0, 2.0, 0.0, 0.0));
    assert_eq!(p4.truncate().truncate(), p2);
}

#[test]
fn test_is_nan_across_kinds() {
    assert!(is_nan(f32::NAN));
    assert!(is_nan(f64::NAN));
    assert!(!is_nan(0.0_f32));
    assert!(!is_nan(-7_i32));
    assert!(!is_nan(7_u64));
}
