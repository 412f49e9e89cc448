use std::{collections::BTreeSet, fmt, str::FromStr};

use optlab_core::Vec2;

use crate::{DerivativeError, EvalError, ParseError, Scope, ast::Expr, parse::parse};

/// Names that may be used as differentiation variables.
const VARIABLES: [&str; 3] = ["x", "x1", "x2"];

/// A compiled mathematical expression.
///
/// Compiling validates the syntax once; the resulting tree can then be
/// evaluated any number of times against different [`Scope`]s.
///
/// # Example
///
/// ```
/// use optlab_expr::{Expression, Scope};
///
/// let f = Expression::compile("x^2 + 2x").unwrap();
/// assert_eq!(f.evaluate(&Scope::X(4.0)), Ok(24.0));
///
/// let df = f.differentiate("x").unwrap();
/// assert_eq!(df.to_string(), "2 * x + 2");
/// assert_eq!(df.evaluate(&Scope::X(4.0)), Ok(10.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    root: Expr,
}

impl Expression {
    /// Parses `text` into an expression.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text is empty, contains characters
    /// outside the grammar, is malformed, or calls an unknown function.
    pub fn compile(text: &str) -> Result<Self, ParseError> {
        parse(text).map(|root| Self { root })
    }

    /// Evaluates the expression with the variables bound by `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::UndefinedVariable`] if the expression references
    /// a variable the scope does not bind.
    pub fn evaluate(&self, scope: &Scope) -> Result<f64, EvalError> {
        self.root.evaluate(scope)
    }

    /// Returns the simplified symbolic derivative with respect to `var`.
    ///
    /// Differentiating with respect to a variable the expression does not
    /// reference yields the constant `0`.
    ///
    /// # Errors
    ///
    /// Returns [`DerivativeError::InvalidVariable`] unless `var` is one of
    /// `x`, `x1`, or `x2`.
    pub fn differentiate(&self, var: &str) -> Result<Self, DerivativeError> {
        if !VARIABLES.contains(&var) {
            return Err(DerivativeError::InvalidVariable {
                name: var.to_owned(),
            });
        }
        Ok(Self {
            root: self.root.derivative(var).simplify(),
        })
    }

    /// Returns the set of variable names the expression references.
    #[must_use]
    pub fn variables(&self) -> BTreeSet<&str> {
        let mut out = BTreeSet::new();
        self.root.collect_variables(&mut out);
        out
    }

    /// Returns true if the expression references `var`.
    #[must_use]
    pub fn depends_on(&self, var: &str) -> bool {
        self.root.depends_on(var)
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::compile(text)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

/// Parses `text` into an [`Expression`].
///
/// # Errors
///
/// Returns a [`ParseError`] if the text is not a valid expression.
pub fn compile(text: &str) -> Result<Expression, ParseError> {
    Expression::compile(text)
}

/// Evaluates the gradient `(∂f/∂x1, ∂f/∂x2)` of `text` at the point in `scope`.
///
/// Returns `None` if the text does not compile, if `scope` is not a
/// two-variable scope, or if either partial derivative cannot be evaluated.
#[must_use]
pub fn gradient(text: &str, scope: &Scope) -> Option<Vec2> {
    let Scope::X1X2(_) = scope else {
        return None;
    };
    let expr = Expression::compile(text).ok()?;
    let partial = |var| {
        expr.differentiate(var)
            .ok()
            .and_then(|d| d.evaluate(scope).ok())
    };
    Some(Vec2::new(partial("x1")?, partial("x2")?))
}

/// Returns true if `text` compiles and evaluates in `scope`.
///
/// This is the check a front end runs before handing a user-typed function
/// to a solver.
#[must_use]
pub fn is_valid_function(text: &str, scope: &Scope) -> bool {
    Expression::compile(text).is_ok_and(|expr| expr.evaluate(scope).is_ok())
}
