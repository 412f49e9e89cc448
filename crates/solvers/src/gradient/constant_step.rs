//! Gradient descent with a constant base step.
//!
//! # Algorithm
//!
//! Each iteration starts from the configured base step `t` and halves it
//! until `f(xk − t·∇f(xk)) < f(xk)`. The halving is bounded by
//! [`Config::max_halvings`]; running out is an error rather than a silent
//! zero step.

use optlab_core::{Differentiable, Observer, Vec2};

use crate::line_search;

use super::{Action, Config, Error, Event, Method, Solution, descent};

/// Minimizes `f` from `x0` by constant-step gradient descent.
///
/// # Errors
///
/// Returns an error if `f` fails to evaluate or no descent step is found
/// within the halving budget.
pub fn minimize<F, Obs>(f: &F, x0: Vec2, config: &Config, observer: Obs) -> Result<Solution, Error>
where
    F: Differentiable,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    descent::run(f, x0, config, observer, Method::ConstantStep, |f, x, d, fx| {
        line_search::backtrack(f, x, d, fx, config.step(), config.max_halvings())
    })
}

/// Minimizes `f` from `x0` without observer support.
///
/// # Errors
///
/// Returns an error if `f` fails to evaluate or no descent step is found
/// within the halving budget.
pub fn minimize_unobserved<F>(f: &F, x0: Vec2, config: &Config) -> Result<Solution, Error>
where
    F: Differentiable,
{
    minimize(f, x0, config, ())
}
