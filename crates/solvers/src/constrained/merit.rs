use optlab_core::{Differentiable, Matrix2, Objective, TwiceDifferentiable, Vec2};

use super::Linear;

/// An unconstrained reformulation solved by each outer iteration.
pub(super) trait Merit: TwiceDifferentiable {
    /// The penalty or barrier term at `x`.
    fn term(&self, x: Vec2) -> f64;
}

/// The exterior penalty function `F(x, r) = f(x) + (r/2)·g(x)²`.
#[derive(Debug, Clone, Copy)]
pub struct Penalized<'a, F> {
    f: &'a F,
    g: Linear,
    r: f64,
}

impl<'a, F> Penalized<'a, F> {
    #[must_use]
    pub fn new(f: &'a F, g: Linear, r: f64) -> Self {
        Self { f, g, r }
    }

    /// Returns the penalty term `P(x, r) = (r/2)·g(x)²`.
    #[must_use]
    pub fn penalty(&self, x: Vec2) -> f64 {
        let g = self.g.value(x);
        0.5 * self.r * g * g
    }
}

impl<F: Objective<Vec2>> Objective<Vec2> for Penalized<'_, F> {
    type Error = F::Error;

    fn value(&self, x: Vec2) -> Result<f64, Self::Error> {
        Ok(self.f.value(x)? + self.penalty(x))
    }

    fn in_domain(&self, x: Vec2) -> bool {
        self.f.in_domain(x)
    }
}

impl<F: Differentiable> Differentiable for Penalized<'_, F> {
    fn gradient(&self, x: Vec2) -> Result<Vec2, Self::Error> {
        let scale = self.r * self.g.value(x);
        Ok(self.f.gradient(x)? + self.g.gradient() * scale)
    }
}

impl<F: TwiceDifferentiable> TwiceDifferentiable for Penalized<'_, F> {
    fn hessian(&self, x: Vec2) -> Result<Matrix2, Self::Error> {
        let dg = self.g.gradient();
        Ok(self.f.hessian(x)? + Matrix2::outer(dg, dg).scale(self.r))
    }
}

impl<F: TwiceDifferentiable> Merit for Penalized<'_, F> {
    fn term(&self, x: Vec2) -> f64 {
        self.penalty(x)
    }
}

/// The interior barrier function `F(x, r) = f(x) − r/g(x)`.
///
/// Defined only where `g(x) < 0`.
#[derive(Debug, Clone, Copy)]
pub struct Barrier<'a, F> {
    f: &'a F,
    g: Linear,
    r: f64,
}

impl<'a, F> Barrier<'a, F> {
    #[must_use]
    pub fn new(f: &'a F, g: Linear, r: f64) -> Self {
        Self { f, g, r }
    }

    /// Returns the barrier term `P(x, r) = −r/g(x)`.
    #[must_use]
    pub fn barrier(&self, x: Vec2) -> f64 {
        -self.r / self.g.value(x)
    }
}

impl<F: Objective<Vec2>> Objective<Vec2> for Barrier<'_, F> {
    type Error = F::Error;

    fn value(&self, x: Vec2) -> Result<f64, Self::Error> {
        Ok(self.f.value(x)? + self.barrier(x))
    }

    fn in_domain(&self, x: Vec2) -> bool {
        self.g.is_strictly_feasible(x) && self.f.in_domain(x)
    }
}

impl<F: Differentiable> Differentiable for Barrier<'_, F> {
    fn gradient(&self, x: Vec2) -> Result<Vec2, Self::Error> {
        let g = self.g.value(x);
        Ok(self.f.gradient(x)? + self.g.gradient() * (self.r / (g * g)))
    }
}

impl<F: TwiceDifferentiable> TwiceDifferentiable for Barrier<'_, F> {
    fn hessian(&self, x: Vec2) -> Result<Matrix2, Self::Error> {
        let g = self.g.value(x);
        let dg = self.g.gradient();
        Ok(self.f.hessian(x)? + Matrix2::outer(dg, dg).scale(-2.0 * self.r / (g * g * g)))
    }
}

impl<F: TwiceDifferentiable> Merit for Barrier<'_, F> {
    fn term(&self, x: Vec2) -> f64 {
        self.barrier(x)
    }
}
