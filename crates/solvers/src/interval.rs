//! One-dimensional interval-reduction search.
//!
//! Three interchangeable methods narrow a bracket `[a, b]` around a
//! minimizer of a scalar function:
//!
//! - [`half_interval`]: evaluates the midpoint and quarter points and halves
//!   the bracket every iteration.
//! - [`golden_ratio`]: two interior points placed by the golden ratio.
//! - [`fibonacci`]: interior points placed by Fibonacci ratios, with the
//!   iteration count fixed up front.
//!
//! All three share [`Config`], record one [`Step`] per iteration, and
//! answer with the midpoint of the terminal bracket. [`Method`] dispatches
//! between them by name.
//!
//! # When to Use
//!
//! - The objective is unimodal on the bracket
//! - Derivatives are unavailable
//! - A step-by-step trace of the bracket is wanted
//!
//! # Observer Events
//!
//! Each iteration emits one [`Event`] carrying the recorded step and the
//! bracket the next iteration starts from. Observers can return
//! [`Action::StopEarly`] to answer with that bracket immediately.
//!
//! The final split of [`fibonacci`] search is the exception: the search ends
//! there anyway, so the observer's action is ignored and the run reports
//! [`Status::Converged`](crate::Status::Converged).

mod bracket;
mod config;
mod error;
mod event;
mod solution;
mod step;

pub mod fibonacci;
pub mod golden_ratio;
pub mod half_interval;


use std::{fmt, str::FromStr};

use optlab_core::{Objective, Observer};

pub use bracket::{Bracket, BracketError};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Action, Event};
pub use solution::Solution;
pub use step::{Answer, Dot, Step};

use crate::ParseMethodError;

/// An interval search method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    HalfInterval,
    GoldenRatio,
    Fibonacci,
}

impl Method {
    /// All interval search methods.
    pub const ALL: [Self; 3] = [Self::HalfInterval, Self::GoldenRatio, Self::Fibonacci];

    /// Runs this method.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen method fails.
    pub fn minimize<F, Obs>(
        self,
        f: &F,
        interval: [f64; 2],
        config: &Config,
        observer: Obs,
    ) -> Result<Solution, Error>
    where
        F: Objective<f64>,
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        match self {
            Self::HalfInterval => half_interval::minimize(f, interval, config, observer),
            Self::GoldenRatio => golden_ratio::minimize(f, interval, config, observer),
            Self::Fibonacci => fibonacci::minimize(f, interval, config, observer),
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
        interval: [f64; 2],
        config: &Config,
    ) -> Result<Solution, Error>
    where
        F: Objective<f64>,
    {
        self.minimize(f, interval, config, ())
    }

    /// Returns the method's identifier.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::HalfInterval => "halfDivision",
            Self::GoldenRatio => "goldenRatio",
            Self::Fibonacci => "fibonacci",
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
