use super::Step;

/// Emitted once per accepted step, after it is recorded.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Index of the step in the trace.
    pub iter: usize,

    /// The recorded step.
    pub step: &'a Step,
}

/// Actions an observer can take during Newton's method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop and answer with the point the current step produced.
    StopEarly,
}
