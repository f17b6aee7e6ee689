// src/numerics/types/point.rs
// Points and normals are aliases for Vector.

use super::real::Real;
use super::traits::Scalar;
use super::vector::{length, length_squared, Vector};

/// Point is an alias to Vector to represent positions in space.
///
/// The alias keeps generic template parameterization; every vector
/// operation applies unchanged.
pub type Point<T, const N: usize> = Vector<T, N>;
pub type Point2<T = Real> = Point<T, 2>;
pub type Point3<T = Real> = Point<T, 3>;
pub type Point4<T = Real> = Point<T, 4>;

/// Surface normal. Not required to be unit length.
pub type Normal<T, const N: usize> = Vector<T, N>;
pub type Normal3<T = Real> = Normal<T, 3>;

pub fn distance<T: Scalar, const N: usize>(p: &Point<T, N>, q: &Point<T, N>) -> T {
    length(&(*p - *q))
}

pub fn distance_squared<T: Scalar, const N: usize>(p: &Point<T, N>, q: &Point<T, N>) -> T {
    length_squared(&(*p - *q))
}
