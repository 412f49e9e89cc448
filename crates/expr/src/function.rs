use optlab_core::{Differentiable, Matrix2, Objective, TwiceDifferentiable, Vec2};

use crate::{EvalError, Expression, FunctionError, ParseError, Scope};

/// A one-dimensional objective written in `x`.
///
/// # Example
///
/// ```
/// use optlab_core::Objective;
/// use optlab_expr::Function1;
///
/// let f = Function1::new("x^3 - 12x + 6").unwrap();
/// assert_eq!(f.value(2.0), Ok(-10.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Function1 {
    expr: Expression,
}

impl Function1 {
    /// Compiles `text` into a one-dimensional objective.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text does not compile.
    pub fn new(text: &str) -> Result<Self, ParseError> {
        Expression::compile(text).map(Self::from)
    }

    /// Returns the underlying expression.
    #[must_use]
    pub fn expression(&self) -> &Expression {
        &self.expr
    }
}

impl From<Expression> for Function1 {
    fn from(expr: Expression) -> Self {
        Self { expr }
    }
}

impl Objective<f64> for Function1 {
    type Error = EvalError;

    fn value(&self, x: f64) -> Result<f64, Self::Error> {
        self.expr.evaluate(&Scope::X(x))
    }
}

/// A two-dimensional objective written in `x1` and `x2`.
///
/// The gradient and Hessian are derived symbolically once, at construction,
/// and reused for every evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Function2 {
    expr: Expression,
    gradient: [Expression; 2],
    hessian: [[Expression; 2]; 2],
}

impl Function2 {
    /// Compiles `text` and derives its first and second partials.
    ///
    /// # Errors
    ///
    /// Returns a [`FunctionError`] if the text does not compile.
    pub fn new(text: &str) -> Result<Self, FunctionError> {
        Self::from_expression(Expression::compile(text)?)
    }

    /// Derives the partials of an already compiled expression.
    ///
    /// # Errors
    ///
    /// Returns a [`FunctionError`] if differentiation fails.
    pub fn from_expression(expr: Expression) -> Result<Self, FunctionError> {
        let d1 = expr.differentiate("x1")?;
        let d2 = expr.differentiate("x2")?;
        let hessian = [
            [d1.differentiate("x1")?, d1.differentiate("x2")?],
            [d2.differentiate("x1")?, d2.differentiate("x2")?],
        ];
        Ok(Self {
            expr,
            gradient: [d1, d2],
            hessian,
        })
    }

    /// Returns the underlying expression.
    #[must_use]
    pub fn expression(&self) -> &Expression {
        &self.expr
    }

    /// Returns the symbolic partials `[∂f/∂x1, ∂f/∂x2]`.
    #[must_use]
    pub fn partials(&self) -> &[Expression; 2] {
        &self.gradient
    }
}

impl Objective<Vec2> for Function2 {
    type Error = EvalError;

    fn value(&self, x: Vec2) -> Result<f64, Self::Error> {
        self.expr.evaluate(&Scope::X1X2(x))
    }
}

impl Differentiable for Function2 {
    fn gradient(&self, x: Vec2) -> Result<Vec2, Self::Error> {
        let scope = Scope::X1X2(x);
        let [d1, d2] = &self.gradient;
        Ok(Vec2::new(d1.evaluate(&scope)?, d2.evaluate(&scope)?))
    }
}

impl TwiceDifferentiable for Function2 {
    fn hessian(&self, x: Vec2) -> Result<Matrix2, Self::Error> {
        let scope = Scope::X1X2(x);
        let [[h11, h12], [h21, h22]] = &self.hessian;
        Ok(Matrix2::new([
            [h11.evaluate(&scope)?, h12.evaluate(&scope)?],
            [h21.evaluate(&scope)?, h22.evaluate(&scope)?],
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn one_dimensional_value() {
        let f = Function1::new("x^2 + 2x").unwrap();
        assert_relative_eq!(f.value(4.0).unwrap(), 24.0);
        assert_relative_eq!(f.value(-1.0).unwrap(), -1.0);
    }

    #[test]
    fn one_dimensional_rejects_two_variable_text() {
        let f = Function1::new("x1 + x2").unwrap();
        assert!(matches!(
            f.value(1.0),
            Err(EvalError::UndefinedVariable { .. })
        ));
    }

    #[test]
    fn quadratic_form_gradient_and_hessian() {
        let f = Function2::new("x1^2 + 0.6*x1*x2 + 6*x2^2").unwrap();
        let x = Vec2::new(1.5, 0.5);

        assert_relative_eq!(f.value(x).unwrap(), 2.25 + 0.45 + 1.5);

        let g = f.gradient(x).unwrap();
        assert_relative_eq!(g.x1, 3.3);
        assert_relative_eq!(g.x2, 6.9);

        let h = f.hessian(x).unwrap();
        assert_eq!(h, Matrix2::symmetric(2.0, 0.6, 12.0));
    }

    #[test]
    fn non_quadratic_hessian_depends_on_point() {
        let f = Function2::new("x1^4 + x1*x2^2").unwrap();
        let h = f.hessian(Vec2::new(1.0, 2.0)).unwrap();

        assert_relative_eq!(h.get(0, 0), 12.0);
        assert_relative_eq!(h.get(0, 1), 4.0);
        assert_relative_eq!(h.get(1, 0), 4.0);
        assert_relative_eq!(h.get(1, 1), 2.0);
    }
}
