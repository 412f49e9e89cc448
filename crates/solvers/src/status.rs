/// Indicates how a solver run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,

    /// Reached the iteration limit without converging.
    ///
    /// This is a defined terminal state, not an error: the answer is the
    /// last iterate.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}
