use optlab_core::{Matrix2, Vec2};

/// How the search direction of a step was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// `d = −H⁻¹·∇f`, taken when `H⁻¹` looks positive definite.
    Newton,

    /// `d = −∇f`.
    SteepestDescent,
}

/// One accepted Newton step from `x` to `next`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub x: Vec2,
    pub fx: f64,
    pub gradient: Vec2,
    pub gradient_norm: f64,

    /// Hessian at `x`.
    pub hessian: Matrix2,

    /// Inverse of the Hessian at `x`.
    pub inverse: Matrix2,

    pub kind: Direction,

    /// The search direction `d`.
    pub direction: Vec2,

    /// Step length along `d`; `1` for a full Newton step.
    pub t: f64,

    pub next: Vec2,
    pub f_next: f64,

    /// `‖x(k+1) − xk‖`.
    pub diff_norm: f64,

    /// `|f(x(k+1)) − f(xk)|`.
    pub abs_f_diff: f64,

    /// Whether both differences fell below `epsilon2`.
    pub condition_met: bool,
}
