use std::convert::Infallible;

use crate::{Matrix2, Vec2};

/// A scalar objective that solvers minimize.
///
/// `X` is the point type: `f64` for one-dimensional search and [`Vec2`] for
/// the two-variable methods.
///
/// Closures of the form `Fn(X) -> f64` implement this trait with an
/// [`Infallible`] error, so simple analytic functions can be passed directly.
pub trait Objective<X> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be evaluated at `x`.
    fn value(&self, x: X) -> Result<f64, Self::Error>;

    /// Returns true if `x` lies in the domain where the objective is defined.
    ///
    /// Solvers never accept an iterate outside the domain. The default
    /// domain is unbounded.
    fn in_domain(&self, _x: X) -> bool {
        true
    }
}

impl<X, F> Objective<X> for F
where
    F: Fn(X) -> f64,
{
    type Error = Infallible;

    fn value(&self, x: X) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

/// A two-variable objective with a known gradient.
pub trait Differentiable: Objective<Vec2> {
    /// Evaluates the gradient `(∂f/∂x1, ∂f/∂x2)` at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Objective::Error`] if the gradient cannot be evaluated.
    fn gradient(&self, x: Vec2) -> Result<Vec2, Self::Error>;
}

/// A two-variable objective with a known Hessian.
pub trait TwiceDifferentiable: Differentiable {
    /// Evaluates the Hessian matrix of second partials at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Objective::Error`] if the Hessian cannot be evaluated.
    fn hessian(&self, x: Vec2) -> Result<Matrix2, Self::Error>;
}
