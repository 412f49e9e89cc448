//! Fibonacci search.
//!
//! # Algorithm
//!
//! Fibonacci search fixes the number of iterations up front. With
//! `L0 = b − a`, it picks the smallest `N ≥ 3` such that `F(N) ≥ L0 / ε`
//! (with `F(0) = 0, F(1) = 1`) and runs `N − 2` iterations:
//!
//! - Iterations `k = 0..N−3` place `y = a + F(N−k−2)/F(N−k)·w` and
//!   `z = a + b − y`, keeping `[a, z]` if `f(y) ≤ f(z)`, otherwise `[y, b]`.
//! - The last iteration would place both points at the midpoint, so it
//!   instead compares `y = mid` with `z = mid + δ`, where `δ` is the
//!   configured perturbation. `z` is clamped to the bracket.
//!
//! The terminal bracket is at most `ε + δ` wide, and the answer is its
//! midpoint.
//!
//! # Limitations
//!
//! The ratio `L0 / ε` must not exceed the largest `u64` Fibonacci number.

use optlab_core::{FIBONACCI, Objective, Observer, fibonacci_index_at_least};
use tracing::{debug, trace};

use crate::Status;

use super::{
    Action, Bracket, Config, Dot, Error, Event, Method, Solution, Step, golden_ratio::section,
};

/// Finds a minimizer of `f` on `interval` by Fibonacci search.
///
/// The observer receives one [`Event`] per iteration.
///
/// # Errors
///
/// Returns an error if the interval is invalid, the interval is too wide
/// for `epsilon`, or `f` fails to evaluate.
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
    let ratio = bracket.width() / config.epsilon();
    let n = fibonacci_index_at_least(ratio)
        .ok_or(Error::RatioTooLarge { ratio })?
        .max(3);
    debug!(n, ratio, "fibonacci search planned {} iterations", n - 2);

    let mut steps = Vec::with_capacity(n - 2);

    for iter in 0..n - 3 {
        let (a, b) = (bracket.start(), bracket.end());
        let y = Dot::eval(f, a + fib_ratio(n - iter - 2, n - iter) * bracket.width())?;
        let z = Dot::eval(f, a + b - y.x)?;
        let next = section(&bracket, y, z);

        let step = Step {
            start: Dot::eval(f, a)?,
            y,
            z,
            end: Dot::eval(f, b)?,
            center: None,
        };
        trace!(iter, a, b, y = y.x, z = z.x, "fibonacci step");

        let action = observer.observe(&Event {
            iter,
            step: &step,
            next,
        });
        steps.push(step);

        if action == Some(Action::StopEarly) {
            return Solution::finish(
                f,
                Method::Fibonacci,
                steps,
                next,
                Status::StoppedByObserver,
            );
        }

        bracket = next;
    }

    let (a, b) = (bracket.start(), bracket.end());
    let mid = bracket.midpoint();
    let y = Dot::eval(f, mid)?;
    let z = Dot::eval(f, (mid + config.perturbation()).min(b))?;
    let next = section(&bracket, y, z);

    let step = Step {
        start: Dot::eval(f, a)?,
        y,
        z,
        end: Dot::eval(f, b)?,
        center: None,
    };
    trace!(iter = n - 3, a, b, y = y.x, z = z.x, "fibonacci final split");

    // The search ends here regardless of the observer's action.
    let _ = observer.observe(&Event {
        iter: n - 3,
        step: &step,
        next,
    });
    steps.push(step);

    Solution::finish(f, Method::Fibonacci, steps, next, Status::Converged)
}

/// Finds a minimizer of `f` on `interval` without observer support.
///
/// # Errors
///
/// Returns an error if the interval is invalid, the interval is too wide
/// for `epsilon`, or `f` fails to evaluate.
pub fn minimize_unobserved<F>(f: &F, interval: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Objective<f64>,
{
    minimize(f, interval, config, ())
}

/// Returns `F(num) / F(den)`.
#[allow(clippy::cast_precision_loss)]
fn fib_ratio(num: usize, den: usize) -> f64 {
    FIBONACCI[num] as f64 / FIBONACCI[den] as f64
}
