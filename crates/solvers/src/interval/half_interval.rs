//! Half-interval (dichotomy) search.
//!
//! # Algorithm
//!
//! Each iteration evaluates the midpoint `c` and the quarter points
//! `y = a + w/4` and `z = b − w/4` of the bracket `[a, b]`, then keeps:
//!
//! - `[a, c]` if `f(y) < f(c)`
//! - `[c, b]` else if `f(z) < f(c)`
//! - `[y, z]` otherwise
//!
//! Every iteration halves the bracket. The search stops once the next
//! bracket is at most `epsilon` wide and answers with its midpoint.

use optlab_core::{Objective, Observer};
use tracing::trace;

use crate::Status;

use super::{Action, Bracket, Config, Dot, Error, Event, Method, Solution, Step};

/// Finds a minimizer of `f` on `interval` by half-interval search.
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
        let quarter = 0.25 * bracket.width();

        let center = Dot::eval(f, bracket.midpoint())?;
        let y = Dot::eval(f, a + quarter)?;
        let z = Dot::eval(f, b - quarter)?;

        let next = if y.fx < center.fx {
            Bracket::ordered(a, center.x)
        } else if z.fx < center.fx {
            Bracket::ordered(center.x, b)
        } else {
            Bracket::ordered(y.x, z.x)
        };

        let step = Step {
            start: Dot::eval(f, a)?,
            y,
            z,
            end: Dot::eval(f, b)?,
            center: Some(center),
        };
        trace!(iter, a, b, y = y.x, z = z.x, "half-interval step");

        let action = observer.observe(&Event {
            iter,
            step: &step,
            next,
        });
        steps.push(step);

        if next.width() <= config.epsilon() {
            return Solution::finish(f, Method::HalfInterval, steps, next, Status::Converged);
        }
        if action == Some(Action::StopEarly) {
            return Solution::finish(
                f,
                Method::HalfInterval,
                steps,
                next,
                Status::StoppedByObserver,
            );
        }

        bracket = next;
    }

    Solution::finish(f, Method::HalfInterval, steps, bracket, Status::MaxIters)
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
