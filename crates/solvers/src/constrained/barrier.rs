//! Interior barrier method for `min f(x)` subject to `g(x) < 0`.
//!
//! # Algorithm
//!
//! Starting from `r = r0`, each outer iteration minimizes
//! `F(x, r) = f(x) − r/g(x)` with Newton's method from the previous inner
//! minimizer. `F` is undefined outside `g(x) < 0`, so the inner solver
//! never accepts an infeasible point. The run converges once
//! `|P| = |−r/g(x*)| ≤ epsilon`; otherwise `r ← r/C`.

use optlab_core::{Observer, TwiceDifferentiable, Vec2};

use super::{Action, Barrier, Config, Error, Event, Linear, Method, Solution, outer};

/// Minimizes `f` subject to `g(x) < 0` from a strictly feasible `x0`.
///
/// # Errors
///
/// Returns [`Error::InfeasibleStart`] unless `g(x0) < 0`, and otherwise an
/// error if an inner Newton solve fails, `f` fails to evaluate, or the
/// outer budget runs out.
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
    if !g.is_strictly_feasible(x0) {
        return Err(Error::InfeasibleStart {
            x: x0,
            g: g.value(x0),
        });
    }

    outer::run(f, g, x0, config, observer, Method::Barrier, |r| {
        Barrier::new(f, g, r)
    })
}

/// Minimizes `f` subject to `g(x) < 0` without observer support.
///
/// # Errors
///
/// Returns [`Error::InfeasibleStart`] unless `g(x0) < 0`, and otherwise an
/// error if an inner Newton solve fails, `f` fails to evaluate, or the
/// outer budget runs out.
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
