//! Lengths, norms and normalization for two-dimensional vectors and covectors.
//!
//! [`Vector2`] is a free vector in the plane and [`Covector2`] is a linear
//! functional on it. The two share a layout but are distinct types; crossing
//! between them is explicit through [`vec_to_cov`] and [`cov_to_vec`].
//!
//! # Quick Start
//!
//! ```rust
//! use r2vec::{Vector2, length, length_sq, maximum_norm, unit};
//!
//! let v = Vector2::new(3.0, -4.0);
//! assert_eq!(length(&v), 5.0);
//! assert_eq!(length_sq(&v), 25.0);
//! assert_eq!(maximum_norm(&v), 4.0);
//! assert_eq!(unit(&v), Vector2::new(0.6, -0.8));
//! ```
//!
//! # Degenerate Lengths
//!
//! [`unit`] divides by the length unconditionally, so the zero vector comes
//! back with NaN components. [`unit_safe`] and [`unit_safe_or`] treat lengths
//! below [`Coordinate::UNIT_TOLERANCE`] (`1e-12`) as degenerate and return the
//! input or a caller-chosen fallback instead:
//!
//! ```rust
//! use r2vec::{Vector2, unit_safe, unit_safe_or};
//!
//! let zero = Vector2::new(0.0, 0.0);
//! assert_eq!(unit_safe(&zero), zero);
//! assert_eq!(unit_safe_or(&zero, &Vector2::new(1.0, 0.0)), Vector2::new(1.0, 0.0));
//! ```
//!
//! # Available Functions
//!
//! - [`length`], [`length_sq`], [`maximum_norm`], [`unit`]: vectors and covectors
//! - [`unit_safe`], [`unit_safe_or`]: vectors only
//! - [`vec_to_cov`], [`cov_to_vec`]: component-wise relabeling

mod geometry;

pub use geometry::{
    Components2, Coordinate, Covector2, Vector2, cov_to_vec, length, length_sq, maximum_norm,
    unit, unit_safe, unit_safe_or, vec_to_cov,
};
