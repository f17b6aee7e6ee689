//! Fixed-dimension linear algebra for rendering: vectors, points, normals,
//! 4x4 matrices and rays over `f32`, `f64` and the common integer kinds.

pub mod numerics;

pub use numerics::config::{NumericsConfig, ValidationMode};
pub use numerics::error::NumericsError;

/// Everything needed for typical vector and matrix code.
pub mod prelude {
    pub use crate::numerics::types::elementwise::{
        binary_op, binary_op_owned, unary_op, unary_op_owned, Elementwise,
    };
    pub use crate::numerics::types::matrix::{inverse, is_identity, transpose, Matrix};
    pub use crate::numerics::types::point::{
        distance, distance_squared, Normal, Normal3, Point, Point2, Point3, Point4,
    };
    pub use crate::numerics::types::ray::Ray;
    pub use crate::numerics::types::real::{DataPrecision, Real};
    pub use crate::numerics::types::traits::{is_nan, FloatingPoint, Scalar};
    pub use crate::numerics::types::vector::{
        abs, abs_dot, coordinate_system, cross, dot, has_nans, length, length_squared, max,
        max_component, max_dimension, min, min_component, min_dimension, normalise, permute,
        Vector, Vector2, Vector3, Vector4,
    };
    pub use crate::numerics::{with_validation_mode, NumericsConfig, NumericsError, ValidationMode};
}
