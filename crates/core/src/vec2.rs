use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A point (or direction) in the two-variable domain `(x1, x2)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x1: f64,
    pub x2: f64,
}

impl Vec2 {
    /// The origin `(0, 0)`.
    pub const ZERO: Self = Self { x1: 0.0, x2: 0.0 };

    /// Creates a new vector.
    #[must_use]
    pub const fn new(x1: f64, x2: f64) -> Self {
        Self { x1, x2 }
    }

    /// Returns the Euclidean norm `sqrt(x1² + x2²)`.
    #[must_use]
    pub fn norm(self) -> f64 {
        self.x1.hypot(self.x2)
    }

    /// Returns the dot product with `other`.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x1 * other.x1 + self.x2 * other.x2
    }

    /// Returns the Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).norm()
    }

    /// Returns true if both components are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x1.is_finite() && self.x2.is_finite()
    }

    /// Returns the components as an array.
    #[must_use]
    pub fn to_array(self) -> [f64; 2] {
        [self.x1, self.x2]
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from([x1, x2]: [f64; 2]) -> Self {
        Self { x1, x2 }
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x1, x2): (f64, f64)) -> Self {
        Self { x1, x2 }
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x1 + rhs.x1, self.x2 + rhs.x2)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x1 - rhs.x1, self.x2 - rhs.x2)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x1, -self.x2)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x1 * rhs, self.x2 * rhs)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x1, self.x2)
    }
}
