use optlab_core::Vec2;

use crate::ScopeKind;

/// Variable bindings for evaluating an expression.
///
/// One-dimensional functions are written in `x`; two-dimensional functions
/// in `x1` and `x2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scope {
    /// Binds `x`.
    X(f64),

    /// Binds `x1` and `x2`.
    X1X2(Vec2),
}

impl Scope {
    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        match (self, name) {
            (Self::X(x), "x") => Some(*x),
            (Self::X1X2(v), "x1") => Some(v.x1),
            (Self::X1X2(v), "x2") => Some(v.x2),
            _ => None,
        }
    }

    /// Returns the kind of this scope.
    #[must_use]
    pub fn kind(&self) -> ScopeKind {
        match self {
            Self::X(_) => ScopeKind::OneDimensional,
            Self::X1X2(_) => ScopeKind::TwoDimensional,
        }
    }
}

impl From<f64> for Scope {
    fn from(x: f64) -> Self {
        Self::X(x)
    }
}

impl From<Vec2> for Scope {
    fn from(x: Vec2) -> Self {
        Self::X1X2(x)
    }
}
