use optlab_core::Observer;
use tracing::{Level, debug, error, info, trace, warn};

use crate::traits::{HasIteration, HasObjective};

/// Forwards every solver event to `tracing`.
///
/// Each event becomes one record at the configured level carrying `label`,
/// the iteration index, and the objective value. The observer never steers
/// the solver.
///
/// ```
/// use optlab_observers::TraceLog;
/// use optlab_solvers::interval::{Config, golden_ratio};
///
/// let f = |x: f64| (x - 2.0).powi(2);
/// let config = Config::new(0.01).unwrap();
/// let log = TraceLog::new("golden").with_level(tracing::Level::INFO);
///
/// let solution = golden_ratio::minimize(&f, [0.0, 5.0], &config, log).unwrap();
/// assert!((solution.answer.min.x - 2.0).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceLog {
    label: &'static str,
    level: Level,
}

impl TraceLog {
    /// Creates a logger that emits at `DEBUG`.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            level: Level::DEBUG,
        }
    }

    /// Sets the level records are emitted at.
    #[must_use]
    pub fn with_level(self, level: Level) -> Self {
        Self { level, ..self }
    }

    /// Returns the label attached to every record.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the level records are emitted at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl<E, A> Observer<E, A> for TraceLog
where
    E: HasIteration + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let (label, iter, objective) = (self.label, event.iter(), event.objective());
        match self.level {
            Level::ERROR => error!(label, iter, objective, "solver step"),
            Level::WARN => warn!(label, iter, objective, "solver step"),
            Level::INFO => info!(label, iter, objective, "solver step"),
            Level::DEBUG => debug!(label, iter, objective, "solver step"),
            _ => trace!(label, iter, objective, "solver step"),
        }
        None
    }
}
