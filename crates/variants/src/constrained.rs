//! Penalty and barrier exercises.
//!
//! Each exercise minimizes `a·x1² + b·x2² + c` subject to the linear
//! constraint `a·x1 + b·x2 + c` (`= 0` for the penalty method, `< 0` for
//! the barrier method).

use optlab_core::Vec2;
use optlab_solvers::constrained::{Config, ConfigError, Linear, Quadratic};

/// A penalty/barrier exercise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    /// One-based exercise number.
    pub order: u32,

    /// The objective.
    pub f: Quadratic,

    /// The constraint function.
    pub g: Linear,

    /// The starting point; strictly feasible for the barrier method.
    pub x0: Vec2,

    /// Initial coefficient.
    pub r0: f64,

    /// Coefficient factor `C`.
    pub factor: f64,

    /// Tolerance on the penalty or barrier term.
    pub epsilon: f64,
}

impl Variant {
    /// Builds the penalty/barrier config for this exercise.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the catalog parameters are invalid.
    pub fn config(&self) -> Result<Config, ConfigError> {
        Config::new(self.epsilon, self.r0, self.factor)
    }
}

/// All penalty/barrier exercises.
pub const VARIANTS: [Variant; 1] = [Variant {
    order: 1,
    f: Quadratic::new(6.0, 2.0, -17.0),
    g: Linear::new(8.0, 1.0, -7.0),
    x0: Vec2::new(0.0, -1.0),
    r0: 0.5,
    factor: 10.0,
    epsilon: 0.05,
}];

/// The exercise a fresh session starts with.
pub const DEFAULT: &Variant = &VARIANTS[0];
