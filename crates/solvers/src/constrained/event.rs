use super::OuterStep;

/// Emitted once per outer iteration, after the step is recorded.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Index of the outer step in the trace.
    pub iter: usize,

    /// The recorded outer step.
    pub step: &'a OuterStep,
}

/// Actions an observer can take during penalty or barrier optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop and answer with the current inner solution.
    StopEarly,
}
