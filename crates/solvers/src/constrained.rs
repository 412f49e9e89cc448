//! Penalty and barrier methods for a linearly constrained problem.
//!
//! Both methods replace the constrained problem with a sequence of
//! unconstrained ones, each solved by [`newton`](crate::newton):
//!
//! - [`penalty`]: exterior penalty `F(x, r) = f(x) + (r/2)·g(x)²` for the
//!   equality `g(x) = 0`. The coefficient grows, `r ← C·r`, until the
//!   penalty term at the inner solution is at most `epsilon`.
//! - [`barrier`]: interior barrier `F(x, r) = f(x) − r/g(x)` for the
//!   inequality `g(x) < 0`. The coefficient shrinks, `r ← r/C`, until the
//!   barrier term is at most `epsilon` in magnitude. Every iterate stays
//!   strictly feasible.
//!
//! The constraint is linear, `g(x) = a·x1 + b·x2 + c` ([`Linear`]). The
//! objective may be any twice-differentiable function; the textbook
//! quadratic `a·x1² + b·x2² + c` is provided as [`Quadratic`].
//!
//! # Observer Events
//!
//! Each outer iteration emits one [`Event`] carrying the recorded
//! [`OuterStep`], including the full inner Newton trace. Observers can
//! return [`Action::StopEarly`] to answer with that step's inner solution.

mod config;
mod error;
mod event;
mod merit;
mod outer;
mod problem;
mod solution;

pub mod barrier;
pub mod penalty;

#[cfg(test)]
mod tests;

use std::{fmt, str::FromStr};

use optlab_core::{Observer, TwiceDifferentiable, Vec2};

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Action, Event};
pub use merit::{Barrier, Penalized};
pub use problem::{Linear, Quadratic};
pub use solution::{OuterStep, Solution};

use crate::ParseMethodError;

/// A constrained optimization method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    Penalty,
    Barrier,
}

impl Method {
    /// All constrained methods.
    pub const ALL: [Self; 2] = [Self::Penalty, Self::Barrier];

    /// Runs this method.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen method fails.
    pub fn minimize<F, Obs>(
        self,
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
        match self {
            Self::Penalty => penalty::minimize(f, g, x0, config, observer),
            Self::Barrier => barrier::minimize(f, g, x0, config, observer),
        }
    }

    /// Runs this method without observer support.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen method fails.
    pub fn minimize_unobserved<F>(
        self,
        f: &F,
        g: Linear,
        x0: Vec2,
        config: &Config,
    ) -> Result<Solution, Error>
    where
        F: TwiceDifferentiable,
    {
        self.minimize(f, g, x0, config, ())
    }

    /// Returns the method's identifier.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Penalty => "penalty",
            Self::Barrier => "barrier",
        }
    }

    /// Returns true if the penalty or barrier term is small enough to stop.
    fn is_satisfied(self, term: f64, epsilon: f64) -> bool {
        match self {
            Self::Penalty => term <= epsilon,
            Self::Barrier => term.abs() <= epsilon,
        }
    }

    /// Returns the coefficient for the next outer iteration.
    fn tighten(self, r: f64, factor: f64) -> f64 {
        match self {
            Self::Penalty => r * factor,
            Self::Barrier => r / factor,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.name() == name)
            .ok_or_else(|| ParseMethodError::new(name))
    }
}
