mod convert;
mod coordinate;
mod unary;
mod vector;

pub use convert::{cov_to_vec, vec_to_cov};
pub use coordinate::Coordinate;
pub use unary::{length, length_sq, maximum_norm, unit, unit_safe, unit_safe_or};
pub use vector::{Components2, Covector2, Vector2};
