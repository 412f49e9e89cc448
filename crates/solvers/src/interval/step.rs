use optlab_core::Objective;

use super::Error;

/// A point with its objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dot {
    /// The x value.
    pub x: f64,

    /// The objective value at x.
    pub fx: f64,
}

impl Dot {
    /// Creates a new dot.
    #[must_use]
    pub fn new(x: f64, fx: f64) -> Self {
        Self { x, fx }
    }

    /// Evaluates `f` at `x`.
    pub(super) fn eval<F: Objective<f64>>(f: &F, x: f64) -> Result<Self, Error> {
        let fx = f.value(x).map_err(Error::objective)?;
        Ok(Self { x, fx })
    }
}

/// One bracket reduction.
///
/// Records the bracket the iteration started from and the interior points
/// whose objective values decided the next bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// Left end of the bracket.
    pub start: Dot,

    /// Left interior point.
    pub y: Dot,

    /// Right interior point.
    pub z: Dot,

    /// Right end of the bracket.
    pub end: Dot,

    /// Bracket midpoint, evaluated only by the half-interval method.
    pub center: Option<Dot>,
}

/// The terminal bracket and the estimate of the minimizer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Answer {
    /// Left end of the terminal bracket.
    pub start: Dot,

    /// Midpoint of the terminal bracket.
    pub min: Dot,

    /// Right end of the terminal bracket.
    pub end: Dot,

    /// Index of the last recorded step.
    pub iter: usize,
}
