use super::{Coordinate, Covector2, Vector2};

/// Relabels a vector as a covector, component by component.
///
/// No metric is applied; this is not a Riesz map.
#[inline]
pub fn vec_to_cov<T: Coordinate>(v: &Vector2<T>) -> Covector2<T> {
    Covector2::new(v[0], v[1])
}

/// Relabels a covector as a vector. Inverse of [`vec_to_cov`].
#[inline]
pub fn cov_to_vec<T: Coordinate>(cv: &Covector2<T>) -> Vector2<T> {
    Vector2::new(cv[0], cv[1])
}

impl<T: Coordinate> From<Vector2<T>> for Covector2<T> {
    fn from(value: Vector2<T>) -> Self {
        vec_to_cov(&value)
    }
}

impl<T: Coordinate> From<Covector2<T>> for Vector2<T> {
    fn from(value: Covector2<T>) -> Self {
        cov_to_vec(&value)
    }
}
