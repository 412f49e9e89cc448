//! Expression service for the optlab solvers.
//!
//! Parses textual formulas such as `2x^3 - 3x^2 - 12x - 5` or
//! `x1^2 + 0.6*x1*x2 + 6*x2^2`, evaluates them at a point, and derives
//! symbolic partial derivatives.
//!
//! One-dimensional formulas are written in `x`, two-dimensional formulas in
//! `x1` and `x2`. Supported syntax:
//!
//! - numbers (`12`, `0.5`, `1e-3`) and the constants `pi` and `e`
//! - `+ - * / ^` with the usual precedence; `^` is right-associative and
//!   binds tighter than unary minus, so `-x^2` is `-(x^2)`
//! - implicit multiplication: `2x`, `3(x + 1)`, `(x - 1)(x + 1)`
//! - the functions `sin`, `cos`, `tan`, `exp`, `ln`, `log` (natural), `sqrt`
//!   and `abs`
//!
//! [`Function1`] and [`Function2`] adapt compiled expressions to the
//! objective traits in [`optlab_core`] so they can be handed straight to a
//! solver.

mod ast;
mod diff;
mod error;
mod expression;
mod function;
mod lex;
mod parse;
mod scope;

pub use error::{DerivativeError, EvalError, FunctionError, ParseError, ScopeKind};
pub use expression::{Expression, compile, gradient, is_valid_function};
pub use function::{Function1, Function2};
pub use scope::Scope;
