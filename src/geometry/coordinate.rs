use num_traits::Float;
use std::fmt::Debug;

/// Scalar type stored in [`Vector2`](super::Vector2) and [`Covector2`](super::Covector2).
///
/// Every function in this crate uses a single `Coordinate` type per call; there
/// is no mixed-precision arithmetic.
pub trait Coordinate: Float + Debug {
    /// Lengths strictly below this value are degenerate for
    /// [`unit_safe`](super::unit_safe) and [`unit_safe_or`](super::unit_safe_or).
    ///
    /// This is an absolute tolerance. It is not scaled to the precision of the
    /// type or to the magnitude of the input.
    const UNIT_TOLERANCE: Self;
}

impl Coordinate for f64 {
    const UNIT_TOLERANCE: f64 = 1e-12;
}

impl Coordinate for f32 {
    const UNIT_TOLERANCE: f32 = 1e-12;
}
