use std::error::Error as StdError;

use optlab_core::Vec2;
use thiserror::Error;

/// Errors that can occur during gradient descent.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no descent step found at iteration {iter} from {x}")]
    LineSearchExhausted { iter: usize, x: Vec2 },

    #[error("objective error: {0}")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn objective<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Objective(Box::new(err))
    }
}
