//! Gradient descent over two-variable functions.
//!
//! Both methods step along the anti-gradient `d = −∇f(xk)` and differ only
//! in how they pick the step length:
//!
//! - [`constant_step`]: backtracks from a fixed base step, halving it until
//!   the objective strictly decreases.
//! - [`fastest`]: steepest descent with a coarse line search over
//!   `t ∈ {0.01, 0.02, …, 1.00}`.
//!
//! # Stopping Rules
//!
//! At iteration `k` the search answers with `xk` if `‖∇f(xk)‖ < epsilon1`
//! or `k` has reached `max_iters`. After a step it answers with `x(k+1)` if
//! this step and the previous one both moved less than `epsilon2` in `x`
//! and in `f`.
//!
//! # Observer Events
//!
//! Each accepted step emits one [`Event`]. Observers can return
//! [`Action::StopEarly`] to answer with the point that step produced.

mod config;
mod descent;
mod error;
mod event;
mod solution;
mod step;

pub mod constant_step;
pub mod fastest;


use std::{fmt, str::FromStr};

use optlab_core::{Differentiable, Observer, Vec2};

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Action, Event};
pub use solution::Solution;
pub use step::Step;

use crate::ParseMethodError;

/// A gradient descent method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    ConstantStep,
    Fastest,
}

impl Method {
    /// All gradient descent methods.
    pub const ALL: [Self; 2] = [Self::ConstantStep, Self::Fastest];

    /// Runs this method.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen method fails.
    pub fn minimize<F, Obs>(
        self,
        f: &F,
        x0: Vec2,
        config: &Config,
        observer: Obs,
    ) -> Result<Solution, Error>
    where
        F: Differentiable,
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        match self {
            Self::ConstantStep => constant_step::minimize(f, x0, config, observer),
            Self::Fastest => fastest::minimize(f, x0, config, observer),
        }
    }

    /// Runs this method without observer support.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen method fails.
    pub fn minimize_unobserved<F>(self, f: &F, x0: Vec2, config: &Config) -> Result<Solution, Error>
    where
        F: Differentiable,
    {
        self.minimize(f, x0, config, ())
    }

    /// Returns the method's identifier.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ConstantStep => "gradientDescentWithConstantStep",
            Self::Fastest => "gradientDescentFastest",
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
