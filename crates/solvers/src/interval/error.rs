use std::error::Error as StdError;

use thiserror::Error;

use super::BracketError;

/// Errors that can occur during interval search.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid interval: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("interval-to-epsilon ratio {ratio} exceeds the Fibonacci table")]
    RatioTooLarge { ratio: f64 },

    #[error("objective error: {0}")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn objective<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Objective(Box::new(err))
    }
}
