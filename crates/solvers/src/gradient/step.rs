use optlab_core::Vec2;

/// One accepted gradient descent step from `x` to `next`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// The iterate `xk`.
    pub x: Vec2,

    /// `f(xk)`.
    pub fx: f64,

    /// `∇f(xk)`.
    pub gradient: Vec2,

    /// `‖∇f(xk)‖`.
    pub gradient_norm: f64,

    /// Step length along `−∇f(xk)`.
    pub t: f64,

    /// The next iterate `x(k+1) = xk − t·∇f(xk)`.
    pub next: Vec2,

    /// `f(x(k+1))`.
    pub f_next: f64,

    /// `‖x(k+1) − xk‖`.
    pub diff_norm: f64,

    /// `|f(x(k+1)) − f(xk)|`.
    pub abs_f_diff: f64,

    /// Whether both differences fell below `epsilon2`.
    pub condition_met: bool,
}
