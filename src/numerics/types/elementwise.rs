// src/numerics/types/elementwise.rs
// Elementwise map primitives shared by vectors and matrices.

//! Every arithmetic operator on [`Vector`](super::vector::Vector) and
//! [`Matrix`](super::matrix::Matrix) is written in terms of the four functions
//! in this module. The `_owned` variants take the container by value and
//! rewrite its storage in place; the borrowing variants leave their input
//! untouched and return a fresh container.

/// A fixed-shape container of scalars that can be mapped element by element.
///
/// Both operands of a binary map share the implementing type, so their shapes
/// always agree.
pub trait Elementwise: Sized {
    type Scalar: Copy;

    fn elements(&self) -> &[Self::Scalar];

    fn elements_mut(&mut self) -> &mut [Self::Scalar];
}

/// Apply `f` to every element of a copy of `container`.
#[inline]
pub fn unary_op<C, F>(container: &C, f: F) -> C
where
    C: Elementwise + Clone,
    F: FnMut(C::Scalar) -> C::Scalar,
{
    unary_op_owned(container.clone(), f)
}

/// Apply `f` to every element of `container`, reusing its storage.
#[inline]
pub fn unary_op_owned<C, F>(mut container: C, mut f: F) -> C
where
    C: Elementwise,
    F: FnMut(C::Scalar) -> C::Scalar,
{
    for element in container.elements_mut() {
        *element = f(*element);
    }
    container
}

/// Combine `lhs` and `rhs` pairwise into a new container.
#[inline]
pub fn binary_op<C, F>(lhs: &C, rhs: &C, f: F) -> C
where
    C: Elementwise + Clone,
    F: FnMut(C::Scalar, C::Scalar) -> C::Scalar,
{
    binary_op_owned(lhs.clone(), rhs, f)
}

/// Combine `lhs` and `rhs` pairwise, writing the result into `lhs`'s storage.
#[inline]
pub fn binary_op_owned<C, F>(mut lhs: C, rhs: &C, mut f: F) -> C
where
    C: Elementwise,
    F: FnMut(C::Scalar, C::Scalar) -> C::Scalar,
{
    debug_assert_eq!(lhs.elements().len(), rhs.elements().len());
    for (l, &r) in lhs.elements_mut().iter_mut().zip(rhs.elements()) {
        *l = f(*l, r);
    }
    lhs
}
