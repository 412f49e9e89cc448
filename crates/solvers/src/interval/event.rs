use super::{Bracket, Step};

/// Emitted once per bracket reduction, after the step is recorded.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Index of the step in the trace.
    pub iter: usize,

    /// The recorded step.
    pub step: &'a Step,

    /// The bracket the next iteration will start from.
    pub next: Bracket,
}

/// Actions an observer can take during interval search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop and answer with the bracket produced by the current step.
    StopEarly,
}
