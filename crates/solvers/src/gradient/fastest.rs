//! Steepest (fastest) gradient descent.
//!
//! # Algorithm
//!
//! Each iteration searches `t ∈ {0.01, 0.02, …, 1.00}` for the smallest
//! `f(xk − t·∇f(xk))` among candidates that strictly decrease `f`, taking
//! the first minimum on ties. If none descends, the step keeps halving
//! below `0.01` up to [`Config::max_halvings`] times.
//!
//! # Limitations
//!
//! The grid never looks beyond `t = 1`, so on very flat objectives the
//! search can make slow progress.

use optlab_core::{Differentiable, Observer, Vec2};

use crate::line_search;

use super::{Action, Config, Error, Event, Method, Solution, descent};

/// Minimizes `f` from `x0` by steepest descent with a grid line search.
///
/// # Errors
///
/// Returns an error if `f` fails to evaluate or no descent step is found.
pub fn minimize<F, Obs>(f: &F, x0: Vec2, config: &Config, observer: Obs) -> Result<Solution, Error>
where
    F: Differentiable,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    descent::run(f, x0, config, observer, Method::Fastest, |f, x, d, fx| {
        line_search::grid(f, x, d, fx, config.max_halvings())
    })
}

/// Minimizes `f` from `x0` without observer support.
///
/// # Errors
///
/// Returns an error if `f` fails to evaluate or no descent step is found.
pub fn minimize_unobserved<F>(f: &F, x0: Vec2, config: &Config) -> Result<Solution, Error>
where
    F: Differentiable,
{
    minimize(f, x0, config, ())
}
