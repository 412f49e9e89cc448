//! Classical numerical optimization solvers with step-by-step traces.
//!
//! Every solver records one step per iteration and answers exactly once,
//! so a caller can render the whole run afterwards. The families are:
//!
//! - [`interval`]: half-interval, golden-ratio, and Fibonacci search for a
//!   minimizer of a scalar function on a bracket
//! - [`gradient`]: constant-step and steepest gradient descent
//! - [`newton`]: Newton's method with a steepest-descent fallback
//! - [`constrained`]: exterior penalty and interior barrier methods, each
//!   outer iteration solved by [`newton`]
//!
//! Each family follows the same shape: a validated `Config`, an `Error`
//! enum, a `minimize` entry point that accepts an
//! [`Observer`](optlab_core::Observer), a `minimize_unobserved`
//! convenience, and a `Solution` with a [`Status`], the trace, and the
//! answer. Solvers log their decisions with `tracing` but never install a
//! subscriber.
//!
//! Reaching an iteration cap is [`Status::MaxIters`], not an error. Errors
//! are reserved for runs that cannot produce a trustworthy answer: invalid
//! input, a failing objective, a singular Hessian, or an exhausted search
//! budget.

mod answer;
mod line_search;
mod method;
mod stabilization;
mod status;

pub mod constrained;
pub mod gradient;
pub mod interval;
pub mod newton;

pub use answer::Answer;
pub use method::ParseMethodError;
pub use status::Status;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use optlab_core::Vec2;
    use optlab_expr::{Function1, Function2};

    use super::*;

    #[test]
    fn method_names_are_unique_across_families() {
        let names: Vec<&str> = interval::Method::ALL
            .iter()
            .map(|m| m.name())
            .chain(gradient::Method::ALL.iter().map(|m| m.name()))
            .chain([newton::NAME])
            .chain(constrained::Method::ALL.iter().map(|m| m.name()))
            .collect();

        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn two_variable_methods_agree_on_a_convex_quadratic() {
        let f = Function2::new("2*x1^2 + x1*x2 + x2^2 - x1").unwrap();
        let x0 = Vec2::new(1.0, 1.0);
        // ∇f = (4x1 + x2 − 1, x1 + 2x2) = 0 at (2/7, −1/7).
        let exact = Vec2::new(2.0 / 7.0, -1.0 / 7.0);

        let gradient_config = gradient::Config::new(1e-4, 1e-9, 500).unwrap();
        let newton_config = newton::Config::new(1e-4, 1e-9, 50).unwrap();

        let answers = [
            gradient::fastest::minimize_unobserved(&f, x0, &gradient_config)
                .unwrap()
                .answer,
            gradient::constant_step::minimize_unobserved(&f, x0, &gradient_config)
                .unwrap()
                .answer,
            newton::minimize_unobserved(&f, x0, &newton_config)
                .unwrap()
                .answer,
        ];

        for answer in answers {
            assert!(answer.x.distance(exact) < 1e-3, "{answer:?}");
        }
    }

    #[test]
    fn interval_methods_agree_on_a_cubic() {
        let f = Function1::new("x^3 - 3x^2 - 24x - 3").unwrap();
        let config = interval::Config::new(0.01).unwrap();

        for method in interval::Method::ALL {
            let solution = method.minimize_unobserved(&f, [2.0, 6.0], &config).unwrap();
            assert!((solution.answer.min.x - 4.0).abs() < 0.015, "{method}");
        }
    }
}
