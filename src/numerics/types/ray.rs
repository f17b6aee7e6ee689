// src/numerics/types/ray.rs
// Parametric ray: origin + t * direction.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::point::Point3;
use super::real::Real;
use super::traits::FloatingPoint;
use super::vector::Vector3;
use crate::numerics::config::contract;

/// Half-line starting at `origin` and extending along `direction`.
///
/// Only defined for floating-point scalars. The direction is not required to
/// be normalised; `at(t)` scales it as given.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de>"
))]
pub struct Ray<T: FloatingPoint = Real> {
    pub origin: Point3<T>,
    pub direction: Vector3<T>,
}

impl<T: FloatingPoint> Ray<T> {
    pub fn new(origin: Point3<T>, direction: Vector3<T>) -> Self {
        contract!(
            origin.iter().chain(direction.iter()).all(|e| e.is_finite()),
            "ray components must be finite, got o = {}, d = {}",
            origin,
            direction
        );
        Self { origin, direction }
    }

    /// Point reached after travelling `t` along the direction.
    #[inline]
    pub fn at(&self, t: T) -> Point3<T> {
        self.origin + self.direction * t
    }
}

impl<T: FloatingPoint> fmt::Display for Ray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "o = {}, d = {}", self.origin, self.direction)
    }
}
