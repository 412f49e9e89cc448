use tracing::debug;

use crate::{Answer, Status};

use super::{Method, Step};

/// The result of a gradient descent run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// One entry per accepted step; index `k` is iteration `k`.
    pub steps: Vec<Step>,

    /// The terminal iterate.
    pub answer: Answer,
}

impl Solution {
    pub(super) fn finish(method: Method, steps: Vec<Step>, answer: Answer, status: Status) -> Self {
        debug!(
            %method,
            ?status,
            iter = answer.iter,
            x = %answer.x,
            fx = answer.fx,
            "gradient descent finished"
        );

        Self {
            status,
            steps,
            answer,
        }
    }
}
