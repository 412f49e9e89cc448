use optlab_core::Vec2;

/// The terminal iterate of a two-variable solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Answer {
    /// The final iterate.
    pub x: Vec2,

    /// Objective value at `x`.
    pub fx: f64,

    /// Iteration count when the solver finished.
    pub iter: usize,
}
