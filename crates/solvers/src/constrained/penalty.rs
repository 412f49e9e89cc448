//! Exterior penalty method for `min f(x)` subject to `g(x) = 0`.
//!
//! # Algorithm
//!
//! Starting from `r = r0`, each outer iteration minimizes
//! `F(x, r) = f(x) + (r/2)·g(x)²` with Newton's method from the previous
//! inner minimizer. The run converges once `P = (r/2)·g(x*)² ≤ epsilon`;
//! otherwise `r ← C·r`.
//!
//! # Limitations
//!
//! Large coefficients make `F` ill-conditioned, so a tight `epsilon` may
//! need many outer iterations.

use optlab_core::{Observer, TwiceDifferentiable, Vec2};

use super::{Action, Config, Error, Event, Linear, Method, Penalized, Solution, outer};

/// Minimizes `f` subject to `g(x) = 0` from `x0`.
///
/// # Errors
///
/// Returns an error if an inner Newton solve fails, `f` fails to evaluate,
/// or the outer budget runs out.
pub fn minimize<F, Obs>(
    f: &F,
    g: Linear,
    x0: Vec2,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: TwiceDifferentiable,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    outer::run(f, g, x0, config, observer, Method::Penalty, |r| {
        Penalized::new(f, g, r)
    })
}

/// Minimizes `f` subject to `g(x) = 0` without observer support.
///
/// # Errors
///
/// Returns an error if an inner Newton solve fails, `f` fails to evaluate,
/// or the outer budget runs out.
pub fn minimize_unobserved<F>(
    f: &F,
    g: Linear,
    x0: Vec2,
    config: &Config,
) -> Result<Solution, Error>
where
    F: TwiceDifferentiable,
{
    minimize(f, g, x0, config, ())
}
