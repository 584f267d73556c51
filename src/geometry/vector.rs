//! Two-component value types.
//!
//! [`Vector2`] and [`Covector2`] share a layout but are distinct types, so a
//! primal quantity cannot be passed where a dual one is expected. The only
//! crossing points are [`vec_to_cov`](super::vec_to_cov) and
//! [`cov_to_vec`](super::cov_to_vec).

use super::Coordinate;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

/// Read access shared by [`Vector2`] and [`Covector2`].
///
/// The free functions in this crate are generic over this trait so a single
/// definition serves both types.
pub trait Components2: Copy {
    type Scalar: Coordinate;

    /// Component 0.
    fn x(&self) -> Self::Scalar;

    /// Component 1.
    fn y(&self) -> Self::Scalar;
}

macro_rules! r2_value {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        pub struct $name<T> {
            pub x: T,
            pub y: T,
        }

        impl<T> $name<T> {
            pub const fn new(x: T, y: T) -> Self {
                Self { x, y }
            }
        }

        impl<T: Coordinate> $name<T> {
            pub fn zero() -> Self {
                Self::new(T::zero(), T::zero())
            }

            /// Reports whether both components are finite.
            pub fn check_finite(&self) -> Result<(), &'static str> {
                if !self.x.is_finite() {
                    return Err("component 0 must be finite");
                }
                if !self.y.is_finite() {
                    return Err("component 1 must be finite");
                }
                Ok(())
            }
        }

        impl<T: Coordinate> Components2 for $name<T> {
            type Scalar = T;

            #[inline]
            fn x(&self) -> T {
                self.x
            }

            #[inline]
            fn y(&self) -> T {
                self.y
            }
        }

        impl<T> Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                match index {
                    0 => &self.x,
                    1 => &self.y,
                    _ => panic!("index out of bounds: the len is 2 but the index is {index}"),
                }
            }
        }

        impl<T> From<(T, T)> for $name<T> {
            fn from(value: (T, T)) -> Self {
                $name::new(value.0, value.1)
            }
        }

        impl<T> From<[T; 2]> for $name<T> {
            fn from([x, y]: [T; 2]) -> Self {
                $name::new(x, y)
            }
        }

        impl<T> From<$name<T>> for [T; 2] {
            fn from(value: $name<T>) -> Self {
                [value.x, value.y]
            }
        }

        impl<T: Coordinate> Add for $name<T> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                $name::new(self.x + rhs.x, self.y + rhs.y)
            }
        }

        impl<T: Coordinate> Sub for $name<T> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                $name::new(self.x - rhs.x, self.y - rhs.y)
            }
        }

        impl<T: Coordinate> Neg for $name<T> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                $name::new(-self.x, -self.y)
            }
        }

        impl<T: Coordinate> Mul<T> for $name<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: T) -> Self {
                $name::new(self.x * rhs, self.y * rhs)
            }
        }

        impl<T: Coordinate> Div<T> for $name<T> {
            type Output = Self;

            #[inline]
            fn div(self, rhs: T) -> Self {
                $name::new(self.x / rhs, self.y / rhs)
            }
        }
    };
}

r2_value! {
    /// Free vector in the plane.
    Vector2
}

r2_value! {
    /// Linear functional on [`Vector2`] values.
    Covector2
}

impl<T: Coordinate> Covector2<T> {
    /// Evaluates the functional on `v`: `c0 * v0 + c1 * v1`.
    #[inline]
    pub fn apply(&self, v: &Vector2<T>) -> T {
        self.x * v.x + self.y * v.y
    }
}
