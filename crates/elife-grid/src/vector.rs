//! Integer grid coordinates.

use std::fmt;
use std::ops::Add;

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An immutable 2D integer coordinate.
///
/// `Vector` is a value type: arithmetic always produces a new vector and never
/// mutates either operand. `x` grows to the east, `y` grows to the south, so
/// row-major order is "increasing `y`, then increasing `x`".
///
/// # Example
///
/// ```
/// use elife_grid::Vector;
///
/// let origin = Vector::new(1, 1);
/// let moved = origin.plus(Vector::new(1, -1));
///
/// assert_eq!(moved, Vector::new(2, 0));
/// assert_eq!(origin, Vector::new(1, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vector(IVec2);

impl Vector {
    /// The origin `(0, 0)`.
    pub const ZERO: Self = Self(IVec2::ZERO);

    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    /// Returns the horizontal component.
    #[must_use]
    pub const fn x(self) -> i32 {
        self.0.x
    }

    /// Returns the vertical component.
    #[must_use]
    pub const fn y(self) -> i32 {
        self.0.y
    }

    /// Returns a new vector that is the component-wise sum of `self` and `other`.
    #[must_use]
    pub fn plus(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }

    /// Returns the underlying `glam` vector.
    #[must_use]
    pub const fn as_ivec2(self) -> IVec2 {
        self.0
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(rhs)
    }
}

impl From<IVec2> for Vector {
    fn from(v: IVec2) -> Self {
        Self(v)
    }
}

impl From<(i32, i32)> for Vector {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}
