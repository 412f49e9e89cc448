//! Symbolic differentiation and algebraic simplification.

use crate::ast::{Expr, Func};

impl Expr {
    /// Returns the unsimplified derivative with respect to `var`.
    pub(crate) fn derivative(&self, var: &str) -> Self {
        match self {
            Self::Num(_) | Self::Const(_) => Self::Num(0.0),
            Self::Var(name) => Self::Num(if name == var { 1.0 } else { 0.0 }),
            Self::Neg(a) => Self::neg(a.derivative(var)),
            Self::Add(a, b) => Self::add(a.derivative(var), b.derivative(var)),
            Self::Sub(a, b) => Self::sub(a.derivative(var), b.derivative(var)),
            Self::Mul(a, b) => Self::add(
                Self::mul(a.derivative(var), (**b).clone()),
                Self::mul((**a).clone(), b.derivative(var)),
            ),
            Self::Div(a, b) => Self::div(
                Self::sub(
                    Self::mul(a.derivative(var), (**b).clone()),
                    Self::mul((**a).clone(), b.derivative(var)),
                ),
                Self::pow((**b).clone(), Self::Num(2.0)),
            ),
            Self::Pow(a, b) => pow_derivative(a, b, var),
            Self::Call(func, arg) => {
                Self::mul(call_derivative(*func, arg), arg.derivative(var))
            }
        }
    }

    /// Folds constants and removes additive and multiplicative identities.
    #[allow(clippy::float_cmp)]
    pub(crate) fn simplify(self) -> Self {
        match self {
            Self::Num(_) | Self::Const(_) | Self::Var(_) => self,
            Self::Neg(a) => match a.simplify() {
                Self::Num(value) => Self::Num(if value == 0.0 { 0.0 } else { -value }),
                Self::Neg(inner) => *inner,
                a => Self::neg(a),
            },
            Self::Add(a, b) => match (a.simplify(), b.simplify()) {
                (Self::Num(x), Self::Num(y)) => Self::Num(x + y),
                (a, b) if is_num(&a, 0.0) => b,
                (a, b) if is_num(&b, 0.0) => a,
                (a, Self::Neg(b)) => Self::sub(a, *b),
                (a, b) => Self::add(a, b),
            },
            Self::Sub(a, b) => match (a.simplify(), b.simplify()) {
                (Self::Num(x), Self::Num(y)) => Self::Num(x - y),
                (a, b) if is_num(&b, 0.0) => a,
                (a, b) if is_num(&a, 0.0) => Self::neg(b).simplify(),
                (a, Self::Neg(b)) => Self::add(a, *b),
                (a, b) if a == b => Self::Num(0.0),
                (a, b) => Self::sub(a, b),
            },
            Self::Mul(a, b) => match (a.simplify(), b.simplify()) {
                (Self::Num(x), Self::Num(y)) => Self::Num(x * y),
                (a, b) if is_num(&a, 0.0) || is_num(&b, 0.0) => Self::Num(0.0),
                (a, b) if is_num(&a, 1.0) => b,
                (a, b) if is_num(&b, 1.0) => a,
                (a, b) if is_num(&a, -1.0) => Self::neg(b),
                (a, b) if is_num(&b, -1.0) => Self::neg(a),
                // Keep numeric coefficients on the left: `x * 2` becomes `2 * x`.
                (a, Self::Num(y)) => Self::mul(Self::Num(y), a),
                (Self::Num(x), Self::Mul(inner_a, inner_b)) => match *inner_a {
                    Self::Num(y) => Self::mul(Self::Num(x * y), *inner_b),
                    inner_a => Self::mul(Self::Num(x), Self::Mul(Box::new(inner_a), inner_b)),
                },
                (a, b) => Self::mul(a, b),
            },
            Self::Div(a, b) => match (a.simplify(), b.simplify()) {
                (Self::Num(x), Self::Num(y)) if y != 0.0 => Self::Num(x / y),
                (a, b) if is_num(&a, 0.0) && !is_num(&b, 0.0) => Self::Num(0.0),
                (a, b) if is_num(&b, 1.0) => a,
                (a, b) => Self::div(a, b),
            },
            Self::Pow(a, b) => match (a.simplify(), b.simplify()) {
                (Self::Num(x), Self::Num(y)) => Self::Num(x.powf(y)),
                (_, b) if is_num(&b, 0.0) => Self::Num(1.0),
                (a, b) if is_num(&b, 1.0) => a,
                (a, b) => Self::pow(a, b),
            },
            Self::Call(func, arg) => match arg.simplify() {
                Self::Num(value) => Self::Num(func.apply(value)),
                arg => Self::call(func, arg),
            },
        }
    }
}

#[allow(clippy::float_cmp)]
fn is_num(expr: &Expr, value: f64) -> bool {
    matches!(expr, Expr::Num(v) if *v == value)
}

/// d/dv (a ^ b), split by which side depends on `var`.
fn pow_derivative(a: &Expr, b: &Expr, var: &str) -> Expr {
    let base = a.clone();
    let exponent = b.clone();

    match (a.depends_on(var), b.depends_on(var)) {
        (_, false) => Expr::mul(
            Expr::mul(
                exponent.clone(),
                Expr::pow(base, Expr::sub(exponent, Expr::Num(1.0))),
            ),
            a.derivative(var),
        ),
        (false, true) => Expr::mul(
            Expr::mul(Expr::pow(base.clone(), exponent), Expr::call(Func::Ln, base)),
            b.derivative(var),
        ),
        (true, true) => Expr::mul(
            Expr::pow(base.clone(), exponent.clone()),
            Expr::add(
                Expr::mul(b.derivative(var), Expr::call(Func::Ln, base.clone())),
                Expr::div(Expr::mul(exponent, a.derivative(var)), base),
            ),
        ),
    }
}

/// The outer derivative `f'(arg)` for the chain rule.
fn call_derivative(func: Func, arg: &Expr) -> Expr {
    let arg = arg.clone();
    match func {
        Func::Sin => Expr::call(Func::Cos, arg),
        Func::Cos => Expr::neg(Expr::call(Func::Sin, arg)),
        Func::Tan => Expr::div(
            Expr::Num(1.0),
            Expr::pow(Expr::call(Func::Cos, arg), Expr::Num(2.0)),
        ),
        Func::Exp => Expr::call(Func::Exp, arg),
        Func::Ln => Expr::div(Expr::Num(1.0), arg),
        Func::Sqrt => Expr::div(
            Expr::Num(1.0),
            Expr::mul(Expr::Num(2.0), Expr::call(Func::Sqrt, arg)),
        ),
        Func::Abs => Expr::div(arg.clone(), Expr::call(Func::Abs, arg)),
    }
}
