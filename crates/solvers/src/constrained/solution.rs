use optlab_core::Vec2;
use tracing::debug;

use crate::{Answer, Status, newton};

use super::Method;

/// One outer iteration: an inner Newton solve at a fixed coefficient.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OuterStep {
    /// Penalty or barrier coefficient `r` for this iteration.
    pub r: f64,

    /// Where the inner solve started.
    pub start: Vec2,

    /// The inner Newton solve, including its full trace.
    pub inner: newton::Solution,

    /// The inner minimizer `x*`.
    pub x: Vec2,

    /// `f(x*)`.
    pub fx: f64,

    /// `g(x*)`.
    pub g: f64,

    /// `F(x*, r)`.
    pub merit: f64,

    /// `P(x*, r)`, the penalty or barrier term.
    pub term: f64,
}

/// The result of a penalty or barrier run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// One entry per outer iteration.
    pub steps: Vec<OuterStep>,

    /// The last inner minimizer, `f` at it, and the outer iteration index.
    pub answer: Answer,
}

impl Solution {
    pub(super) fn finish(method: Method, steps: Vec<OuterStep>, answer: Answer, status: Status) -> Self {
        debug!(
            %method,
            ?status,
            iter = answer.iter,
            x = %answer.x,
            fx = answer.fx,
            "constrained optimization finished"
        );

        Self {
            status,
            steps,
            answer,
        }
    }
}
