// src/numerics/types/traits.rs
// Scalar kinds the numerics types are generic over.

use core::fmt::{Debug, Display};
use core::ops::Neg;

use num_traits::{Num, NumCast};

/// Scalar is the element type of every vector and matrix.
///
/// Implemented for the floating kinds `f32`/`f64` and for the integral kinds
/// `i32`, `u32`, `i64` and `u64`. Integral kinds answer the floating-point
/// queries uniformly (never NaN, always finite) so generic code can guard
/// against NaN without branching on the type.
pub trait Scalar:
    Copy + PartialOrd + Debug + Display + Num + NumCast + Send + Sync + 'static
{
    /// True only for a floating NaN.
    fn is_nan(self) -> bool;

    /// False for NaN and the infinities.
    fn is_finite(self) -> bool;

    fn abs(self) -> Self;

    /// Square root. Integral kinds go through `f64` and truncate.
    fn sqrt(self) -> Self;

    /// Slack allowed when a contract requires unit length.
    fn unit_tolerance() -> Self;
}

/// FloatingPoint marks the scalar kinds that rays and matrix inversion are
/// defined for.
pub trait FloatingPoint: Scalar + Neg<Output = Self> {}

macro_rules! impl_floating_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn is_nan(self) -> bool { <$t>::is_nan(self) }

                #[inline]
                fn is_finite(self) -> bool { <$t>::is_finite(self) }

                #[inline]
                fn abs(self) -> Self { <$t>::abs(self) }

                #[inline]
                fn sqrt(self) -> Self { <$t>::sqrt(self) }

                #[inline]
                fn unit_tolerance() -> Self { <$t>::EPSILON * 16.0 }
            }

            impl FloatingPoint for $t {}
        )*
    };
}

macro_rules! impl_integral_scalar {
    ($($t:ty => $abs:expr),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn is_nan(self) -> bool { false }

                #[inline]
                fn is_finite(self) -> bool { true }

                #[inline]
                fn abs(self) -> Self { $abs(self) }

                #[inline]
                fn sqrt(self) -> Self { (self as f64).sqrt() as $t }

                #[inline]
                fn unit_tolerance() -> Self { 0 }
            }
        )*
    };
}

impl_floating_scalar!(f32, f64);

impl_integral_scalar!(
    i32 => i32::abs,
    i64 => i64::abs,
    u32 => core::convert::identity,
    u64 => core::convert::identity
);

/// NaN test that works for every scalar kind; integral kinds are never NaN.
#[inline]
pub fn is_nan<T: Scalar>(x: T) -> bool {
    x.is_nan()
}
