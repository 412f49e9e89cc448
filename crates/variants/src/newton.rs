//! Exercises for Newton's method.

use optlab_core::Vec2;
use optlab_expr::{Function2, FunctionError};
use optlab_solvers::newton::{Config, ConfigError};

/// A Newton's method exercise.
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

    /// Builds the Newton config for this exercise.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the catalog tolerances are invalid.
    pub fn config(&self) -> Result<Config, ConfigError> {
        Config::new(self.epsilon1, self.epsilon2, self.max_iters)
    }
}

/// All Newton exercises.
pub const VARIANTS: [Variant; 1] = [Variant {
    order: 1,
    f: "x1^2 + 0.6*x1*x2 + 6*x2^2",
    x0: Vec2::new(1.5, 0.5),
    epsilon1: 0.15,
    epsilon2: 0.2,
    max_iters: 10,
}];

/// The exercise a fresh session starts with.
pub const DEFAULT: &Variant = &VARIANTS[0];
