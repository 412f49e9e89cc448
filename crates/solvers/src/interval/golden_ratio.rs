//! Golden-ratio search.
//!
//! # Algorithm
//!
//! Each iteration places interior points `y = a + ρ·w` and `z = a + b − y`
//! with `ρ = (3 − √5) / 2`, and keeps `[a, z]` if `f(y) ≤ f(z)`, otherwise
//! `[y, b]`. The bracket shrinks by the factor `1 − ρ ≈ 0.618` per
//! iteration. The search stops once the next bracket is at most `epsilon`
//! wide and answers with its midpoint.
//!
//! Both interior points are evaluated afresh every iteration so that each
//! step in the trace is self-contained.

use optlab_core::{Objective, Observer};
use tracing::trace;

use crate::Status;

use super::{Action, Bracket, Config, Dot, Error, Event, Method, Solution, Step};

/// The golden section constant `(3 − √5) / 2`.
pub const RHO: f64 = 0.381_966_011_250_105_1;

/// Finds a minimizer of `f` on `interval` by golden-ratio search.
///
/// The observer receives one [`Event`] per iteration.
///
/// # Errors
///
/// Returns an error if the interval is invalid or `f` fails to evaluate.
pub fn minimize<F, Obs>(
    f: &F,
    interval: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Objective<f64>,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut bracket = Bracket::new(interval)?;
    let mut steps = Vec::new();

    for iter in 0..config.max_iters() {
        let (a, b) = (bracket.start(), bracket.end());
        let y = Dot::eval(f, a + RHO * bracket.width())?;
        let z = Dot::eval(f, a + b - y.x)?;

        let next = section(&bracket, y, z);

        let step = Step {
            start: Dot::eval(f, a)?,
            y,
            z,
            end: Dot::eval(f, b)?,
            center: None,
        };
        trace!(iter, a, b, y = y.x, z = z.x, "golden-ratio step");

        let action = observer.observe(&Event {
            iter,
            step: &step,
            next,
        });
        steps.push(step);

        if next.width() <= config.epsilon() {
            return Solution::finish(f, Method::GoldenRatio, steps, next, Status::Converged);
        }
        if action == Some(Action::StopEarly) {
            return Solution::finish(
                f,
                Method::GoldenRatio,
                steps,
                next,
                Status::StoppedByObserver,
            );
        }

        bracket = next;
    }

    Solution::finish(f, Method::GoldenRatio, steps, bracket, Status::MaxIters)
}

/// Finds a minimizer of `f` on `interval` without observer support.
///
/// # Errors
///
/// Returns an error if the interval is invalid or `f` fails to evaluate.
pub fn minimize_unobserved<F>(f: &F, interval: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Objective<f64>,
{
    minimize(f, interval, config, ())
}

/// Keeps `[a, z]` when `f(y) ≤ f(z)`, otherwise `[y, b]`.
pub(super) fn section(bracket: &Bracket, y: Dot, z: Dot) -> Bracket {
    if y.fx <= z.fx {
        Bracket::ordered(bracket.start(), z.x)
    } else {
        Bracket::ordered(y.x, bracket.end())
    }
}
