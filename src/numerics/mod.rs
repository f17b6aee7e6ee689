// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod config;
pub mod error;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod traits;
    pub mod real;
    pub mod elementwise;
    pub mod vector;
    pub mod point;
    pub mod matrix;
    pub mod ray;
}

pub use config::{with_validation_mode, NumericsConfig, ValidationMode};
pub use error::NumericsError;
pub use types::matrix::{inverse, is_identity, transpose, Matrix};
pub use types::point::{Normal, Normal3, Point, Point2, Point3, Point4};
pub use types::ray::Ray;
pub use types::real::{DataPrecision, Real};
pub use types::traits::{is_nan, FloatingPoint, Scalar};
pub use types::vector::{Vector, Vector2, Vector3, Vector4};
