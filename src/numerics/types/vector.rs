// src/numerics/types/vector.rs
// Generic Vector<T, N> with named-component conveniences for N = 2, 3, 4.
// Uses the Scalar trait from super::traits.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::elementwise::{binary_op, binary_op_owned, unary_op, unary_op_owned, Elementwise};
use super::real::Real;
use super::traits::Scalar;
use crate::numerics::config::contract;

/// Vector is a fixed-length sequence of `N` scalars.
///
/// The components live in a single contiguous array; `x()`, `y()`, `z()` and
/// `w()` are index-based views over it for the dimensions that have them.
/// Equality is exact per component; use the `approx` traits for tolerance.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct Vector<T: Scalar, const N: usize> {
    pub data: [T; N],
}

pub type Vector2<T = Real> = Vector<T, 2>;
pub type Vector3<T = Real> = Vector<T, 3>;
pub type Vector4<T = Real> = Vector<T, 4>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub const DIMENSION: usize = N;

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self { data: [T::zero(); N] }
    }

    /// Vector with every component set to `value`.
    pub fn splat(value: T) -> Self {
        Self::from_array([value; N])
    }

    /// Construct from an explicit component list. Components must be finite.
    pub fn from_array(data: [T; N]) -> Self {
        contract!(
            data.iter().all(|e| e.is_finite()),
            "vector components must be finite, got {:?}",
            data
        );
        Self { data }
    }

    /// Construct without validating the components.
    #[inline]
    pub const fn from_raw(data: [T; N]) -> Self {
        Self { data }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        N
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> Elementwise for Vector<T, N> {
    type Scalar = T;

    #[inline]
    fn elements(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn elements_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

macro_rules! impl_named_components {
    ($n:literal, $tuple:ty => $($field:ident, $field_mut:ident, $index:literal);+) => {
        impl<T: Scalar> Vector<T, $n> {
            /// Construct from individual components. Components must be finite.
            pub fn new($($field: T),+) -> Self {
                Self::from_array([$($field),+])
            }

            $(
                #[inline]
                pub fn $field(&self) -> T {
                    self.data[$index]
                }

                #[inline]
                pub fn $field_mut(&mut self) -> &mut T {
                    &mut self.data[$index]
                }
            )+
        }

        impl<T: Scalar> From<$tuple> for Vector<T, $n> {
            fn from(($($field),+): $tuple) -> Self {
                Self::new($($field),+)
            }
        }
    };
}

impl_named_components!(2, (T, T) => x, x_mut, 0; y, y_mut, 1);
impl_named_components!(3, (T, T, T) => x, x_mut, 0; y, y_mut, 1; z, z_mut, 2);
impl_named_components!(4, (T, T, T, T) => x, x_mut, 0; y, y_mut, 1; z, z_mut, 2; w, w_mut, 3);

// Growing pads the new trailing component with zero; truncating drops it.
macro_rules! impl_dimension_change {
    ($low:literal, $high:literal) => {
        impl<T: Scalar> From<Vector<T, $low>> for Vector<T, $high> {
            fn from(v: Vector<T, $low>) -> Self {
                let mut data = [T::zero(); $high];
                data[..$low].copy_from_slice(&v.data);
                Self::from_array(data)
            }
        }

        impl<T: Scalar> Vector<T, $high> {
            /// Drop the last component.
            pub fn truncate(self) -> Vector<T, $low> {
                let mut data = [T::zero(); $low];
                data.copy_from_slice(&self.data[..$low]);
                Vector::from_array(data)
            }
        }
    };
}

impl_dimension_change!(2, 3);
impl_dimension_change!(3, 4);

// Conversions between Vector<T, N> and arrays [T; N]

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(array: [T; N]) -> Self {
        Self::from_array(array)
    }
}

impl<T: Scalar, const N: usize> From<&[T; N]> for Vector<T, N> {
    fn from(array: &[T; N]) -> Self {
        Self::from_array(*array)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.data
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

// Arithmetic. Compound operators are the primitives; the binary forms copy
// and delegate to them.

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = binary_op_owned(*self, &rhs, |a, b| a + b);
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = binary_op_owned(*self, &rhs, |a, b| a - b);
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        *self = unary_op_owned(*self, |a| a * rhs);
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, rhs: T) {
        *self = unary_op_owned(*self, |a| a / rhs);
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self {
        self /= rhs;
        self
    }
}

impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        unary_op(&self, |a| -a)
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64, i32, u32, i64, u64);

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("( ")?;
        for value in &self.data {
            write!(f, "{} ", value)?;
        }
        f.write_str(")")
    }
}

// Serialized as a tuple of N scalars; serde cannot derive arrays of generic length.
impl<T, const N: usize> Serialize for Vector<T, N>
where
    T: Scalar + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(N)?;
        for value in &self.data {
            tuple.serialize_element(value)?;
        }
        tuple.end()
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for Vector<T, N>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct VectorVisitor<T, const N: usize>(PhantomData<T>);

        impl<'de, T, const N: usize> Visitor<'de> for VectorVisitor<T, N>
        where
            T: Scalar + Deserialize<'de>,
        {
            type Value = Vector<T, N>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a tuple of {} scalars", N)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut data = [T::zero(); N];
                for (i, slot) in data.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                Ok(Vector::from_raw(data))
            }
        }

        deserializer.deserialize_tuple(N, VectorVisitor::<T, N>(PhantomData))
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: Scalar + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.data
            .iter()
            .zip(&other.data)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: Scalar + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.data
            .iter()
            .zip(&other.data)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: Scalar + UlpsEq<Epsilon = T>,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.data
            .iter()
            .zip(&other.data)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

/// True if any component is NaN.
pub fn has_nans<T: Scalar, const N: usize>(v: &Vector<T, N>) -> bool {
    v.data.iter().any(|e| e.is_nan())
}

/// Sum of pairwise products.
pub fn dot<T: Scalar, const N: usize>(lhs: &Vector<T, N>, rhs: &Vector<T, N>) -> T {
    lhs.data
        .iter()
        .zip(rhs.data.iter())
        .fold(T::zero(), |dot, (&l, &r)| dot + l * r)
}

pub fn length_squared<T: Scalar, const N: usize>(v: &Vector<T, N>) -> T {
    dot(v, v)
}

/// Euclidean length, cast back to the component type.
pub fn length<T: Scalar, const N: usize>(v: &Vector<T, N>) -> T {
    dot(v, v).sqrt()
}

pub fn abs<T: Scalar, const N: usize>(v: &Vector<T, N>) -> Vector<T, N> {
    unary_op(v, |a| a.abs())
}

pub fn abs_dot<T: Scalar, const N: usize>(lhs: &Vector<T, N>, rhs: &Vector<T, N>) -> T {
    dot(lhs, rhs).abs()
}

/// Cross product; anti-commutative.
pub fn cross<T: Scalar>(u: &Vector3<T>, v: &Vector3<T>) -> Vector3<T> {
    let (ux, uy, uz) = (u.x(), u.y(), u.z());
    let (vx, vy, vz) = (v.x(), v.y(), v.z());

    Vector::from_raw([
        (uy * vz) - (uz * vy),
        (uz * vx) - (ux * vz),
        (ux * vy) - (uy * vx),
    ])
}

/// Scale `v` to unit length. A zero-length vector has no direction and
/// violates the contract.
pub fn normalise<T: Scalar, const N: usize>(v: &Vector<T, N>) -> Vector<T, N> {
    let len = length(v);
    contract!(len != T::zero(), "cannot normalise zero-length vector {}", v);
    *v / len
}

/// Elementwise minimum.
pub fn min<T: Scalar, const N: usize>(u: &Vector<T, N>, v: &Vector<T, N>) -> Vector<T, N> {
    binary_op(u, v, |a, b| if b < a { b } else { a })
}

/// Elementwise maximum.
pub fn max<T: Scalar, const N: usize>(u: &Vector<T, N>, v: &Vector<T, N>) -> Vector<T, N> {
    binary_op(u, v, |a, b| if a < b { b } else { a })
}

/// Index of the smallest component; the first one wins on ties.
pub fn min_dimension<T: Scalar, const N: usize>(v: &Vector<T, N>) -> usize {
    v.data
        .iter()
        .enumerate()
        .skip(1)
        .fold(0, |best, (i, &e)| if e < v.data[best] { i } else { best })
}

/// Index of the largest component; the first one wins on ties.
pub fn max_dimension<T: Scalar, const N: usize>(v: &Vector<T, N>) -> usize {
    v.data
        .iter()
        .enumerate()
        .skip(1)
        .fold(0, |best, (i, &e)| if v.data[best] < e { i } else { best })
}

pub fn min_component<T: Scalar, const N: usize>(v: &Vector<T, N>) -> T {
    v.data[min_dimension(v)]
}

pub fn max_component<T: Scalar, const N: usize>(v: &Vector<T, N>) -> T {
    v.data[max_dimension(v)]
}

/// New vector whose k-th component is `v[indices[k]]`.
///
/// Indices may repeat and need not be sorted.
pub fn permute<T: Scalar, const N: usize>(v: &Vector<T, N>, indices: [usize; N]) -> Vector<T, N> {
    contract!(
        indices.iter().all(|&i| i < N),
        "permutation indices {:?} out of range for dimension {}",
        indices,
        N
    );
    Vector::from_raw(indices.map(|i| v.data[i]))
}

/// Complete the unit vector `v1` to a right-handed orthonormal basis
/// `(v1, v2, v3)`.
///
/// The branch keeps the square root away from zero by pairing `z` with the
/// larger of `|x|` and `|y|`.
pub fn coordinate_system<T>(v1: &Vector3<T>) -> (Vector3<T>, Vector3<T>)
where
    T: Scalar + Neg<Output = T>,
{
    contract!(
        (length_squared(v1) - T::one()).abs() <= T::unit_tolerance(),
        "coordinate_system requires a unit vector, got {} with squared length {}",
        v1,
        length_squared(v1)
    );

    let (x, y, z) = (v1.x(), v1.y(), v1.z());
    let v2 = if x.abs() > y.abs() {
        Vector::from_raw([-z, T::zero(), x]) / (x * x + z * z).sqrt()
    } else {
        Vector::from_raw([T::zero(), z, -y]) / (y * y + z * z).sqrt()
    };
    let v3 = cross(v1, &v2);

    (v2, v3)
}
