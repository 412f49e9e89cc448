use optlab_core::Observer;
use tracing::debug;

use crate::traits::{CanStopEarly, HasIteration};

/// Stops any solver once it has recorded `steps` steps.
///
/// The solver still answers normally, with status `StoppedByObserver`,
/// unless it converged on that same step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAfter {
    steps: usize,
}

impl StopAfter {
    /// Creates an observer that stops after `steps` steps.
    ///
    /// A value of zero behaves like one, since a solver only consults its
    /// observer after recording a step.
    #[must_use]
    pub fn new(steps: usize) -> Self {
        Self { steps }
    }

    /// Returns the configured step count.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl<E, A> Observer<E, A> for StopAfter
where
    E: HasIteration,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.iter() + 1 >= self.steps {
            debug!(iter = event.iter(), steps = self.steps, "step limit reached");
            return Some(A::stop_early());
        }
        None
    }
}
