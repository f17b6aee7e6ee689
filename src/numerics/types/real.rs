// src/numerics/types/real.rs
// Process-wide scalar precision, selected once at build time.

use core::fmt;

use cfg_if::cfg_if;

use super::matrix::Matrix;
use super::point::Point3;
use super::ray::Ray;
use super::vector::Vector3;

cfg_if! {
    if #[cfg(feature = "f64")] {
        /// Scalar used by call sites that do not pick a precision themselves.
        pub type Real = f64;
    } else {
        /// Scalar used by call sites that do not pick a precision themselves.
        pub type Real = f32;
    }
}

pub type RealVector3 = Vector3<Real>;
pub type RealPoint3 = Point3<Real>;
pub type RealMatrix = Matrix<Real>;
pub type RealRay = Ray<Real>;

/// Floating-point precision of [`Real`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataPrecision {
    F32,
    F64,
}

impl DataPrecision {
    /// Precision compiled into this build.
    pub const ACTIVE: Self = if cfg!(feature = "f64") {
        DataPrecision::F64
    } else {
        DataPrecision::F32
    };

    pub const fn size_in_bytes(self) -> usize {
        match self {
            DataPrecision::F32 => 4,
            DataPrecision::F64 => 8,
        }
    }
}

impl fmt::Display for DataPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataPrecision::F32 => f.write_str("f32"),
            DataPrecision::F64 => f.write_str("f64"),
        }
    }
}
