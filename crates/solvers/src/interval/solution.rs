use optlab_core::Objective;
use tracing::debug;

use crate::Status;

use super::{Answer, Bracket, Dot, Error, Method, Step};

/// The result of an interval search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// One entry per iteration; index `k` is iteration `k`.
    pub steps: Vec<Step>,

    /// The terminal bracket and minimizer estimate.
    pub answer: Answer,
}

impl Solution {
    /// Builds the solution from the terminal bracket.
    pub(super) fn finish<F: Objective<f64>>(
        f: &F,
        method: Method,
        steps: Vec<Step>,
        bracket: Bracket,
        status: Status,
    ) -> Result<Self, Error> {
        let answer = Answer {
            start: Dot::eval(f, bracket.start())?,
            min: Dot::eval(f, bracket.midpoint())?,
            end: Dot::eval(f, bracket.end())?,
            iter: steps.len().saturating_sub(1),
        };

        debug!(
            %method,
            ?status,
            iter = answer.iter,
            x = answer.min.x,
            fx = answer.min.fx,
            width = bracket.width(),
            "interval search finished"
        );

        Ok(Self {
            status,
            steps,
            answer,
        })
    }
}
