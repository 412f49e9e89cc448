use std::fmt;

use thiserror::Error;

/// Errors that can occur when compiling expression text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("expression is empty")]
    Empty,

    #[error("unexpected character {ch:?} at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("invalid number {text:?} at offset {offset}")]
    InvalidNumber { text: String, offset: usize },

    #[error("unexpected {found} at offset {offset}")]
    UnexpectedToken { found: String, offset: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("parenthesis opened at offset {offset} is never closed")]
    UnclosedParen { offset: usize },

    #[error("unknown function {name:?} at offset {offset}")]
    UnknownFunction { name: String, offset: usize },

    #[error("expression nested too deeply at offset {offset}")]
    TooDeep { offset: usize },
}

/// The kind of scope an expression is evaluated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// A scope binding only `x`.
    OneDimensional,

    /// A scope binding `x1` and `x2`.
    TwoDimensional,
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneDimensional => f.write_str("one-dimensional"),
            Self::TwoDimensional => f.write_str("two-dimensional"),
        }
    }
}

/// Errors that can occur when evaluating a compiled expression.
///
/// Arithmetic that produces `NaN` or an infinity is not an error; those
/// values propagate per IEEE-754.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("variable {name:?} is not defined in a {kind} scope")]
    UndefinedVariable { name: String, kind: ScopeKind },
}

/// Errors that can occur when differentiating an expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DerivativeError {
    #[error("{name:?} cannot be used as a differentiation variable")]
    InvalidVariable { name: String },
}

/// Errors that can occur when building a function objective from text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FunctionError {
    #[error("failed to parse function")]
    Parse(#[from] ParseError),

    #[error("failed to differentiate function")]
    Derivative(#[from] DerivativeError),
}
