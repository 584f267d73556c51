//! Norms and normalization for vectors and covectors.
//!
//! `length`, `length_sq`, `unit` and `maximum_norm` accept either
//! [`Vector2`] or [`Covector2`](super::Covector2). The guarded forms
//! [`unit_safe`] and [`unit_safe_or`] exist for [`Vector2`] only.

use super::{Components2, Coordinate, Vector2};
use num_traits::Float;
use std::ops::Div;

/// Euclidean length, `sqrt(v0² + v1²)`.
#[inline]
pub fn length<V: Components2>(v: &V) -> V::Scalar {
    length_sq(v).sqrt()
}

/// Squared Euclidean length, `v0² + v1²`.
///
/// Use this when only relative magnitudes matter; it skips the square root.
#[inline]
pub fn length_sq<V: Components2>(v: &V) -> V::Scalar {
    v.x() * v.x() + v.y() * v.y()
}

/// Returns `v` divided by its length.
///
/// There is no guard against a zero length: the division follows the
/// scalar type, so the zero vector yields NaN components. Use
/// [`unit_safe`] or [`unit_safe_or`] when the input may be degenerate.
#[inline]
pub fn unit<V>(v: &V) -> V
where
    V: Components2 + Div<<V as Components2>::Scalar, Output = V>,
{
    *v / length(v)
}

/// Returns the unit vector along `v`, or `fallback` when `v` is degenerate.
///
/// `v` is degenerate when its length is below [`Coordinate::UNIT_TOLERANCE`].
pub fn unit_safe_or<T: Coordinate>(v: &Vector2<T>, fallback: &Vector2<T>) -> Vector2<T> {
    let len = length(v);
    if len.abs() < T::UNIT_TOLERANCE {
        return *fallback;
    }
    *v / len
}

/// Returns the unit vector along `v`, or `v` itself when `v` is degenerate.
pub fn unit_safe<T: Coordinate>(v: &Vector2<T>) -> Vector2<T> {
    unit_safe_or(v, v)
}

/// L-infinity norm, `max(|v0|, |v1|)`.
///
/// Component 0 is kept on ties and when component 1 is NaN.
#[inline]
pub fn maximum_norm<V: Components2>(v: &V) -> V::Scalar {
    let mut max = v.x().abs();
    let y = v.y().abs();
    if y > max {
        max = y;
    }
    max
}
