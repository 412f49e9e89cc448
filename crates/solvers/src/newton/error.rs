use std::error::Error as StdError;

use optlab_core::Vec2;
use thiserror::Error;

/// Errors that can occur during Newton's method.
#[derive(Debug, Error)]
pub enum Error {
    #[error("singular Hessian at iteration {iter}, x = {x} (determinant = {det})")]
    SingularHessian { iter: usize, x: Vec2, det: f64 },

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
