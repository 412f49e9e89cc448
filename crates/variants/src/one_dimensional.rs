//! Cubic exercises for interval search.

use optlab_expr::{Function1, ParseError};
use optlab_solvers::interval::{Config, ConfigError};

/// An interval search exercise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    /// One-based exercise number.
    pub order: u32,

    /// The objective, written in `x`.
    pub f: &'static str,

    /// The starting bracket.
    pub range: [f64; 2],

    /// The target bracket width.
    pub epsilon: f64,
}

impl Variant {
    /// Compiles the objective.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the catalog text does not compile.
    pub fn function(&self) -> Result<Function1, ParseError> {
        Function1::new(self.f)
    }

    /// Builds the interval search config for this exercise.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the catalog tolerance is invalid.
    pub fn config(&self) -> Result<Config, ConfigError> {
        Config::new(self.epsilon)
    }
}

const fn variant(order: u32, f: &'static str, range: [f64; 2], epsilon: f64) -> Variant {
    Variant {
        order,
        f,
        range,
        epsilon,
    }
}

/// All interval search exercises, ordered by [`Variant::order`].
pub const VARIANTS: [Variant; 30] = [
    variant(1, "2x^3-3x^2-12x-5", [0.0, 6.0], 0.4),
    variant(2, "x^3-3x^2-24x-3", [2.0, 6.0], 0.3),
    variant(3, "x^3-3x^2+3", [1.0, 3.0], 0.2),
    variant(4, "x^3-12x+6", [0.0, 4.0], 0.3),
    variant(5, "x^3+3x^2-24x-10", [0.0, 4.0], 0.3),
    variant(6, "2x^3-3x^2-12x+10", [1.0, 3.0], 0.2),
    variant(7, "2x^3-3x^2-24x-10", [-1.0, 3.0], 0.3),
    variant(8, "x^3-3x^2+2.5", [1.0, 3.0], 0.2),
    variant(9, "x^3+3x^2-2", [-1.0, 1.0], 0.2),
    variant(10, "x^3+3x^2-3.5", [1.0, 3.0], 0.2),
    variant(11, "x^3+3x^2-24x+10", [1.0, 3.0], 0.2),
    variant(12, "x^3-3x^2-24x-8", [2.0, 6.0], 0.3),
    variant(13, "2x^3+9x^2-10", [-1.0, 1.0], 0.2),
    variant(14, "x^3-12x+10", [1.0, 3.0], 0.2),
    variant(15, "x^3+3x^2-3", [-1.0, 1.0], 0.2),
    variant(16, "2x^3-3x^3-12x+1", [1.0, 3.0], 0.2),
    variant(17, "x^3-3x^3-24x-5", [2.0, 6.0], 0.3),
    variant(18, "x^3-4x^2+2", [2.0, 4.0], 0.2),
    variant(19, "x^3-12x-5", [1.0, 3.0], 0.2),
    variant(20, "x^3+3x^2-24x+1", [1.0, 3.0], 0.2),
    variant(21, "2x^3-3x^2-12x+12", [1.0, 3.0], 0.2),
    variant(22, "2x^3+9x^2-6", [-1.0, 1.0], 0.2),
    variant(23, "x^3-3x^2+1.5", [1.0, 3.0], 0.2),
    variant(24, "x^3-3x^2-24x-3", [3.0, 5.0], 0.2),
    variant(25, "x^3+3x^2-24x-3", [1.0, 3.0], 0.2),
    variant(26, "x^3-12x-10", [1.0, 3.0], 0.2),
    variant(27, "2x^3+9x^2-4", [1.0, 3.0], 0.2),
    variant(28, "2x^3-3x^2-12x+8", [2.0, 4.0], 0.2),
    variant(29, "x^3+3x^2+3.5", [-1.0, 3.0], 0.3),
    variant(30, "x^3-3x^2+3.5", [1.0, 3.0], 0.3),
];

/// The exercise a fresh session starts with.
pub const DEFAULT: &Variant = &VARIANTS[14];

/// Looks up an exercise by its one-based number.
#[must_use]
pub fn get(order: u32) -> Option<&'static Variant> {
    VARIANTS.iter().find(|variant| variant.order == order)
}

#[cfg(test)]
mod tests {
    use super::*;

    use optlab_core::Objective;
    use optlab_solvers::interval::Method;

    #[test]
    fn every_entry_compiles_and_evaluates() {
        for variant in &VARIANTS {
            let f = variant.function().unwrap();
            assert!(f.value(1.0).unwrap().is_finite(), "{}", variant.f);
            assert!(variant.config().is_ok());
        }
    }

    #[test]
    fn orders_are_consecutive() {
        for (index, variant) in VARIANTS.iter().enumerate() {
            assert_eq!(variant.order as usize, index + 1);
        }
        assert_eq!(get(15), Some(DEFAULT));
        assert_eq!(get(0), None);
        assert_eq!(get(31), None);
    }

    #[test]
    fn every_entry_runs_with_every_method() {
        for variant in &VARIANTS {
            let f = variant.function().unwrap();
            let config = variant.config().unwrap();
            for method in Method::ALL {
                let solution = method.minimize_unobserved(&f, variant.range, &config).unwrap();
                let [a, b] = variant.range;
                assert!((a..=b).contains(&solution.answer.min.x));
            }
        }
    }
}
