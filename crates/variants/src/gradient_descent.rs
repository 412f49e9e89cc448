//! Quadratic-form exercises for gradient descent.
//!
//! Every exercise starts from `(0, 0.5)` with `ε1 = 0.15`, `ε2 = 0.2`, and
//! at most 10 iterations.

use optlab_core::Vec2;
use optlab_expr::{Function2, FunctionError};
use optlab_solvers::gradient::{Config, ConfigError};

/// A gradient descent exercise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    /// One-based exercise number.
    pub order: u32,

    /// The objective, written in `x1` and `x2`.
    pub f: &'static str,

    /// The starting point.
    pub x0: Vec2,

    /// Gradient norm tolerance.
    pub epsilon1: f64,

    /// Stabilization tolerance.
    pub epsilon2: f64,

    /// Iteration cap.
    pub max_iters: usize,
}

impl Variant {
    /// Compiles the objective and its derivatives.
    ///
    /// # Errors
    ///
    /// Returns a [`FunctionError`] if the catalog text does not compile.
    pub fn function(&self) -> Result<Function2, FunctionError> {
        Function2::new(self.f)
    }

    /// Builds the gradient descent config for this exercise.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the catalog tolerances are invalid.
    pub fn config(&self) -> Result<Config, ConfigError> {
        Config::new(self.epsilon1, self.epsilon2, self.max_iters)
    }
}

const X0: Vec2 = Vec2::new(0.0, 0.5);
const EPSILON1: f64 = 0.15;
const EPSILON2: f64 = 0.2;
const MAX_ITERS: usize = 10;

const fn variant(order: u32, f: &'static str) -> Variant {
    Variant {
        order,
        f,
        x0: X0,
        epsilon1: EPSILON1,
        epsilon2: EPSILON2,
        max_iters: MAX_ITERS,
    }
}

/// All gradient descent exercises, ordered by [`Variant::order`].
pub const VARIANTS: [Variant; 30] = [
    variant(1, "5*x1^2 + 0.5*x1*x2"),
    variant(2, "6*x2 + 0.6*x1*x2 + x2^2"),
    variant(3, "3*x1^2 + 0.4*x1*x2 + 5*x2^2"),
    variant(4, "3*x1^2 + 0.6*x1*x2 + 3*x2^2"),
    variant(5, "4*x1^2 + 0.2*x1*x2 + 6*x2^2"),
    variant(6, "3*x1^2 + 0.1*x1*x2 + 6*x2^2"),
    variant(7, "6*x1^2 + 0.4*x1*x2 + 5*x2^2"),
    variant(8, "2*x1^2 + 0.1*x1*x2 + 2*x2^2"),
    variant(9, "2*x1^2 + 0.2*x1*x2 + 6*x2^2"),
    variant(10, "4*x1^2 + 0.6*x1*x2 + 4*x2^2"),
    variant(11, "5*x1^2 + 0.6*x1*x2 + 2*x2^2"),
    variant(12, "x1^2 + 0.6*x1*x2 + 2*x2^2"),
    variant(13, "4*x1^2 + 0.5*x1*x2 + 2*x2^2"),
    variant(14, "6*x1^2 + 0.6*x1*x2 + 3*x2^2"),
    variant(15, "x1^2 + 0.6*x1*x2 + 6*x2^2"),
    variant(16, "4*x1^2 + 0.5*x1*x2 + 6*x2^2"),
    variant(17, "6*x1^2 + 0.3*x1*x2 + 4*x2^2"),
    variant(18, "2*x1^2 + 0.5*x1*x2 + 2*x2^2"),
    variant(19, "x1^2 + 0.5*x1*x2 + 5*x2^2"),
    variant(20, "x1^2 + 0.6*x1*x2 + x2^2"),
    variant(21, "3*x1^2 + 0.3*x1*x2 + 5*x2^2"),
    variant(22, "6*x1^2 + 0.5*x1*x2 + 2*x2^2"),
    variant(23, "6*x1^2 + 0.6*x1*x2 + 2*x2^2"),
    variant(24, "3*x1^2 + 0.2*x1*x2 + 3*x2^2"),
    variant(25, "4*x1^2 + 0.1*x1*x2 + 3*x2^2"),
    variant(26, "3*x1^2 + 0.3*x1*x2 + 4*x2^2"),
    variant(27, "5*x1^2 + 3*x1*x2 + 5*x2^2"),
    variant(28, "3*x1^2 + 0.4*x1*x2 + 4*x2^2"),
    variant(29, "x1^2 + 0.4*x1*x2 + x2^2"),
    variant(30, "2*x1^2 + 0.5*x1*x2 + 6*x2^2"),
];

/// The exercise a fresh session starts with.
pub const DEFAULT: &Variant = &VARIANTS[14];

/// Looks up an exercise by its one-based number.
#[must_use]
pub fn get(order: u32) -> Option<&'static Variant> {
    VARIANTS.iter().find(|variant| variant.order == order)
}
