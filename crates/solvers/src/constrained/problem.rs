use std::convert::Infallible;

use optlab_core::{Differentiable, Matrix2, Objective, TwiceDifferentiable, Vec2};

/// The separable quadratic `f(x) = a·x1² + b·x2² + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quadratic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Quadratic {
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
}

impl Objective<Vec2> for Quadratic {
    type Error = Infallible;

    fn value(&self, x: Vec2) -> Result<f64, Self::Error> {
        Ok(self.a * x.x1 * x.x1 + self.b * x.x2 * x.x2 + self.c)
    }
}

impl Differentiable for Quadratic {
    fn gradient(&self, x: Vec2) -> Result<Vec2, Self::Error> {
        Ok(Vec2::new(2.0 * self.a * x.x1, 2.0 * self.b * x.x2))
    }
}

impl TwiceDifferentiable for Quadratic {
    fn hessian(&self, _x: Vec2) -> Result<Matrix2, Self::Error> {
        Ok(Matrix2::symmetric(2.0 * self.a, 0.0, 2.0 * self.b))
    }
}

/// The linear constraint function `g(x) = a·x1 + b·x2 + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Linear {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Linear {
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Evaluates `g(x)`.
    #[must_use]
    pub fn value(&self, x: Vec2) -> f64 {
        self.a * x.x1 + self.b * x.x2 + self.c
    }

    /// Returns `∇g = (a, b)`.
    #[must_use]
    pub fn gradient(&self) -> Vec2 {
        Vec2::new(self.a, self.b)
    }

    /// Returns true if `g(x) < 0`.
    #[must_use]
    pub fn is_strictly_feasible(&self, x: Vec2) -> bool {
        self.value(x) < 0.0
    }
}
