use std::error::Error as StdError;

use optlab_core::Vec2;
use thiserror::Error;

use crate::newton;

/// Errors that can occur during penalty or barrier optimization.
#[derive(Debug, Error)]
pub enum Error {
    #[error("inner Newton solve failed at outer iteration {iter}")]
    Inner {
        iter: usize,
        #[source]
        source: newton::Error,
    },

    #[error("starting point {x} is not strictly feasible (g = {g})")]
    InfeasibleStart { x: Vec2, g: f64 },

    #[error("no convergence within {iters} outer iterations")]
    OuterBudgetExceeded { iters: usize },

    #[error("objective error: {0}")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn objective<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Objective(Box::new(err))
    }
}
