//! Newton's method for two-variable functions.
//!
//! # Algorithm
//!
//! At each iterate the Hessian `H` is inverted through its adjugate. When
//! `H⁻¹` passes a cheap positive-definiteness check (leading entry and
//! determinant both positive) the solver takes the Newton direction
//! `d = −H⁻¹·∇f`; otherwise it falls back to `d = −∇f`.
//!
//! A full Newton step is accepted when it stays in the objective's domain
//! and does not increase `f`. Otherwise, and always for the fallback
//! direction, the step length comes from a grid line search over
//! `t ∈ {0.01, …, 1.00}` restricted to strictly descending candidates.
//!
//! A step recorded with [`Direction::Newton`] therefore does not always have
//! `t = 1`: a full step that leaves the domain or raises `f` is replaced by
//! the grid search along the same Newton direction, so every accepted step
//! descends.
//!
//! Stopping follows the gradient descent rules: `‖∇f(xk)‖ ≤ epsilon1`, the
//! iteration cap, or two consecutive steps smaller than `epsilon2`.
//!
//! # When to Use
//!
//! - The objective is smooth with a cheap Hessian
//! - Near a minimizer, where convergence is quadratic
//!
//! # Limitations
//!
//! - An exactly singular Hessian fails the run with
//!   [`Error::SingularHessian`]
//! - Far from a minimizer the fallback direction converges only linearly
//!
//! # Observer Events
//!
//! Each accepted step emits one [`Event`]. Observers can return
//! [`Action::StopEarly`] to answer with the point that step produced.

mod config;
mod error;
mod event;
mod search;
mod solution;
mod step;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Action, Event};
pub use solution::Solution;
pub use step::{Direction, Step};

use optlab_core::{Observer, TwiceDifferentiable, Vec2};

/// Method identifier used when dispatching by name.
pub const NAME: &str = "newton";

/// Minimizes `f` from `x0` by Newton's method.
///
/// The observer receives one [`Event`] per accepted step.
///
/// # Errors
///
/// Returns an error if `f` fails to evaluate, the Hessian is singular, or
/// no descent step is found.
pub fn minimize<F, Obs>(f: &F, x0: Vec2, config: &Config, observer: Obs) -> Result<Solution, Error>
where
    F: TwiceDifferentiable,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    search::search(f, x0, config, observer)
}

/// Minimizes `f` from `x0` without observer support.
///
/// # Errors
///
/// Returns an error if `f` fails to evaluate, the Hessian is singular, or
/// no descent step is found.
pub fn minimize_unobserved<F>(f: &F, x0: Vec2, config: &Config) -> Result<Solution, Error>
where
    F: TwiceDifferentiable,
{
    minimize(f, x0, config, ())
}
