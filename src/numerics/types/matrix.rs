// src/numerics/types/matrix.rs
// Row-major 4x4 matrix and Gauss-Jordan inversion.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::elementwise::{binary_op_owned, unary_op, unary_op_owned, Elementwise};
use super::real::Real;
use super::traits::{FloatingPoint, Scalar};
use super::vector::{dot, Vector, Vector4};
use crate::numerics::config::contract;
use crate::numerics::error::NumericsError;

/// 4x4 matrix stored row-major in one contiguous array.
///
/// Element `(r, c)` lives at `data[r * NUM_COLS + c]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct Matrix<T: Scalar = Real> {
    pub data: [T; 16],
}

impl<T: Scalar> Matrix<T> {
    pub const NUM_ROWS: usize = 4;
    pub const NUM_COLS: usize = 4;
    pub const SIZE: usize = Self::NUM_ROWS * Self::NUM_COLS;

    /// Zero matrix
    pub fn zero() -> Self {
        Self { data: [T::zero(); 16] }
    }

    /// `d` on the diagonal, zero elsewhere.
    pub fn diagonal(d: T) -> Self {
        contract!(d.is_finite(), "matrix diagonal must be finite, got {}", d);
        Self {
            data: core::array::from_fn(|k| if k % 5 == 0 { d } else { T::zero() }),
        }
    }

    /// Identity matrix
    pub fn identity() -> Self {
        Self::diagonal(T::one())
    }

    /// Construct from sixteen row-major elements. Elements must be finite.
    pub fn from_elements(data: [T; 16]) -> Self {
        contract!(
            data.iter().all(|e| e.is_finite()),
            "matrix elements must be finite, got {:?}",
            data
        );
        Self { data }
    }

    /// Construct from a row-major backing array without validation.
    #[inline]
    pub const fn from_raw(data: [T; 16]) -> Self {
        Self { data }
    }

    /// Construct a new matrix from 4 rows
    pub fn from_rows(rows: [Vector4<T>; 4]) -> Self {
        Self::from_elements(core::array::from_fn(|k| rows[k / 4][k % 4]))
    }

    /// Construct a new matrix from 4 columns
    pub fn from_columns(columns: [Vector4<T>; 4]) -> Self {
        Self::from_elements(core::array::from_fn(|k| columns[k % 4][k / 4]))
    }

    /// Get a row by index
    pub fn row(&self, i: usize) -> Vector4<T> {
        contract!(i < Self::NUM_ROWS, "row index {} out of range", i);
        Vector::from_raw(core::array::from_fn(|j| self.data[i * 4 + j]))
    }

    /// Get a column by index
    pub fn col(&self, i: usize) -> Vector4<T> {
        contract!(i < Self::NUM_COLS, "column index {} out of range", i);
        Vector::from_raw(core::array::from_fn(|j| self.data[j * 4 + i]))
    }

    /// Swap two rows in place
    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        for j in 0..4 {
            self.data.swap(r1 * 4 + j, r2 * 4 + j);
        }
    }

    /// Swap two columns in place
    pub fn swap_columns(&mut self, c1: usize, c2: usize) {
        for i in 0..4 {
            self.data.swap(i * 4 + c1, i * 4 + c2);
        }
    }

    /// Multiply a row by a scalar
    pub fn scale_row(&mut self, row: usize, scalar: T) {
        for value in &mut self.data[row * 4..row * 4 + 4] {
            *value = *value * scalar;
        }
    }

    /// Add a multiple of one row to another row
    pub fn add_row_multiple(&mut self, target: usize, source: usize, scalar: T) {
        for j in 0..4 {
            self.data[target * 4 + j] = self.data[target * 4 + j] + self.data[source * 4 + j] * scalar;
        }
    }
}

impl<T: Scalar> Default for Matrix<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar> Elementwise for Matrix<T> {
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

impl<T: Scalar> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (r, c): (usize, usize)) -> &T {
        contract!(r < 4 && c < 4, "matrix index ({}, {}) out of range", r, c);
        &self.data[r * 4 + c]
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        contract!(r < 4 && c < 4, "matrix index ({}, {}) out of range", r, c);
        &mut self.data[r * 4 + c]
    }
}

impl<T: Scalar> AddAssign for Matrix<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = binary_op_owned(*self, &rhs, |a, b| a + b);
    }
}

impl<T: Scalar> SubAssign for Matrix<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = binary_op_owned(*self, &rhs, |a, b| a - b);
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = unary_op_owned(*self, |a| a * rhs);
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for Matrix<T> {
    type Output = Self;

    fn neg(self) -> Self {
        unary_op(&self, |a| -a)
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64, i32, u32, i64, u64);

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Matrix::from_raw(core::array::from_fn(|k| dot(&self.row(k / 4), &rhs.col(k % 4))))
    }
}

impl<T: Scalar> MulAssign for Matrix<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> Mul<Vector4<T>> for Matrix<T> {
    type Output = Vector4<T>;

    fn mul(self, rhs: Vector4<T>) -> Vector4<T> {
        Vector::from_raw(core::array::from_fn(|i| dot(&self.row(i), &rhs)))
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..4 {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", self.row(i))?;
        }
        Ok(())
    }
}

impl<T> Serialize for Matrix<T>
where
    T: Scalar + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(16)?;
        for value in &self.data {
            tuple.serialize_element(value)?;
        }
        tuple.end()
    }
}

impl<'de, T> Deserialize<'de> for Matrix<T>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MatrixVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for MatrixVisitor<T>
        where
            T: Scalar + Deserialize<'de>,
        {
            type Value = Matrix<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a tuple of 16 row-major scalars")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut data = [T::zero(); 16];
                for (i, slot) in data.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                Ok(Matrix::from_raw(data))
            }
        }

        deserializer.deserialize_tuple(16, MatrixVisitor::<T>(PhantomData))
    }
}

impl<T> AbsDiffEq for Matrix<T>
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

impl<T> RelativeEq for Matrix<T>
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

impl<T> UlpsEq for Matrix<T>
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

pub fn transpose<T: Scalar>(m: &Matrix<T>) -> Matrix<T> {
    Matrix::from_raw(core::array::from_fn(|k| m.data[(k % 4) * 4 + k / 4]))
}

/// Exact test against the identity matrix.
pub fn is_identity<T: Scalar>(m: &Matrix<T>) -> bool {
    m.data
        .iter()
        .enumerate()
        .all(|(k, &e)| if k % 5 == 0 { e == T::one() } else { e == T::zero() })
}

/// Inverse by Gauss-Jordan elimination with full pivoting.
///
/// Each step picks the largest remaining entry by absolute value among rows
/// and columns not yet pivoted, scanning row-major; on ties the later entry
/// wins. Row swaps move the pivot onto the diagonal and are undone as column
/// swaps, in reverse order, once elimination is complete.
///
/// Fails with [`NumericsError::SingularMatrix`] when no non-zero pivot is left.
/// `m` is never modified.
pub fn inverse<T: FloatingPoint>(m: &Matrix<T>) -> Result<Matrix<T>, NumericsError> {
    let mut inv = *m;
    let mut pivot_uses = [0u32; 4];
    let mut row_index = [0usize; 4];
    let mut col_index = [0usize; 4];

    for step in 0..4 {
        let (mut i_row, mut i_col) = (0, 0);
        let mut big = T::zero();

        for j in 0..4 {
            if pivot_uses[j] == 1 {
                continue;
            }
            for k in 0..4 {
                match pivot_uses[k] {
                    0 => {
                        let candidate = inv.data[j * 4 + k].abs();
                        if candidate >= big {
                            big = candidate;
                            i_row = j;
                            i_col = k;
                        }
                    }
                    1 => {}
                    _ => {
                        tracing::debug!(step, column = k, "pivot column reused; matrix is singular");
                        return Err(NumericsError::SingularMatrix);
                    }
                }
            }
        }

        pivot_uses[i_col] += 1;
        if i_row != i_col {
            inv.swap_rows(i_row, i_col);
        }
        row_index[step] = i_row;
        col_index[step] = i_col;

        let pivot = inv.data[i_col * 5];
        if pivot == T::zero() {
            tracing::debug!(step, row = i_row, column = i_col, "zero pivot; matrix is singular");
            return Err(NumericsError::SingularMatrix);
        }

        let inv_pivot = T::one() / pivot;
        inv.data[i_col * 5] = T::one();
        inv.scale_row(i_col, inv_pivot);

        for j in (0..4).filter(|&j| j != i_col) {
            let save = inv.data[j * 4 + i_col];
            inv.data[j * 4 + i_col] = T::zero();
            inv.add_row_multiple(j, i_col, -save);
        }
    }

    for step in (0..4).rev() {
        if row_index[step] != col_index[step] {
            inv.swap_columns(row_index[step], col_index[step]);
        }
    }

    Ok(Matrix::from_raw(inv.data))
}
