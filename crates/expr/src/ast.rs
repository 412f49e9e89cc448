use std::{collections::BTreeSet, f64::consts, fmt};

use crate::{EvalError, Scope};

/// A named mathematical constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Constant {
    Pi,
    E,
}

impl Constant {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "pi" => Some(Self::Pi),
            "e" => Some(Self::E),
            _ => None,
        }
    }

    pub(crate) fn value(self) -> f64 {
        match self {
            Self::Pi => consts::PI,
            Self::E => consts::E,
        }
    }
}

/// A built-in function of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Func {
    Sin,
    Cos,
    Tan,
    Exp,
    Ln,
    Sqrt,
    Abs,
}

impl Func {
    /// Looks up a function by name; `log` is the natural logarithm.
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "exp" => Some(Self::Exp),
            "ln" | "log" => Some(Self::Ln),
            "sqrt" => Some(Self::Sqrt),
            "abs" => Some(Self::Abs),
            _ => None,
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
        }
    }

    pub(crate) fn apply(self, arg: f64) -> f64 {
        match self {
            Self::Sin => arg.sin(),
            Self::Cos => arg.cos(),
            Self::Tan => arg.tan(),
            Self::Exp => arg.exp(),
            Self::Ln => arg.ln(),
            Self::Sqrt => arg.sqrt(),
            Self::Abs => arg.abs(),
        }
    }
}

/// An expression tree.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expr {
    Num(f64),
    Const(Constant),
    Var(String),
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Call(Func, Box<Expr>),
}

impl Expr {
    pub(crate) fn var(name: &str) -> Self {
        Self::Var(name.to_owned())
    }

    pub(crate) fn neg(a: Self) -> Self {
        Self::Neg(Box::new(a))
    }

    pub(crate) fn add(a: Self, b: Self) -> Self {
        Self::Add(Box::new(a), Box::new(b))
    }

    pub(crate) fn sub(a: Self, b: Self) -> Self {
        Self::Sub(Box::new(a), Box::new(b))
    }

    pub(crate) fn mul(a: Self, b: Self) -> Self {
        Self::Mul(Box::new(a), Box::new(b))
    }

    pub(crate) fn div(a: Self, b: Self) -> Self {
        Self::Div(Box::new(a), Box::new(b))
    }

    pub(crate) fn pow(a: Self, b: Self) -> Self {
        Self::Pow(Box::new(a), Box::new(b))
    }

    pub(crate) fn call(func: Func, arg: Self) -> Self {
        Self::Call(func, Box::new(arg))
    }

    pub(crate) fn evaluate(&self, scope: &Scope) -> Result<f64, EvalError> {
        Ok(match self {
            Self::Num(value) => *value,
            Self::Const(constant) => constant.value(),
            Self::Var(name) => scope.get(name).ok_or_else(|| EvalError::UndefinedVariable {
                name: name.clone(),
                kind: scope.kind(),
            })?,
            Self::Neg(a) => -a.evaluate(scope)?,
            Self::Add(a, b) => a.evaluate(scope)? + b.evaluate(scope)?,
            Self::Sub(a, b) => a.evaluate(scope)? - b.evaluate(scope)?,
            Self::Mul(a, b) => a.evaluate(scope)? * b.evaluate(scope)?,
            Self::Div(a, b) => a.evaluate(scope)? / b.evaluate(scope)?,
            Self::Pow(a, b) => pow(a.evaluate(scope)?, b.evaluate(scope)?),
            Self::Call(func, arg) => func.apply(arg.evaluate(scope)?),
        })
    }

    pub(crate) fn depends_on(&self, name: &str) -> bool {
        match self {
            Self::Num(_) | Self::Const(_) => false,
            Self::Var(var) => var == name,
            Self::Neg(a) | Self::Call(_, a) => a.depends_on(name),
            Self::Add(a, b)
            | Self::Sub(a, b)
            | Self::Mul(a, b)
            | Self::Div(a, b)
            | Self::Pow(a, b) => a.depends_on(name) || b.depends_on(name),
        }
    }

    pub(crate) fn collect_variables<'a>(&'a self, out: &mut BTreeSet<&'a str>) {
        match self {
            Self::Num(_) | Self::Const(_) => {}
            Self::Var(var) => {
                out.insert(var);
            }
            Self::Neg(a) | Self::Call(_, a) => a.collect_variables(out),
            Self::Add(a, b)
            | Self::Sub(a, b)
            | Self::Mul(a, b)
            | Self::Div(a, b)
            | Self::Pow(a, b) => {
                a.collect_variables(out);
                b.collect_variables(out);
            }
        }
    }

    /// Binding strength used when printing, higher binds tighter.
    fn precedence(&self) -> u8 {
        match self {
            Self::Add(..) | Self::Sub(..) => 1,
            Self::Mul(..) | Self::Div(..) => 2,
            Self::Neg(_) => 3,
            Self::Num(value) if value.is_finite() && value.is_sign_negative() => 3,
            Self::Pow(..) => 4,
            Self::Num(_) | Self::Const(_) | Self::Var(_) | Self::Call(..) => 5,
        }
    }

    fn fmt_child(&self, f: &mut fmt::Formatter<'_>, min: u8) -> fmt::Result {
        if self.precedence() < min {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }

    fn fmt_binary(&self, f: &mut fmt::Formatter<'_>, a: &Self, b: &Self, op: &str) -> fmt::Result {
        let prec = self.precedence();
        let (left, right) = match self {
            // Left-associative: the right operand needs strictly higher precedence.
            Self::Sub(..) | Self::Div(..) => (prec, prec + 1),
            // Right-associative: `a ^ b ^ c` is `a ^ (b ^ c)`.
            Self::Pow(..) => (prec + 1, prec),
            _ => (prec, prec),
        };
        a.fmt_child(f, left)?;
        write!(f, " {op} ")?;
        b.fmt_child(f, right)
    }
}

/// Real power with the integer-exponent fast path.
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
fn pow(base: f64, exponent: f64) -> f64 {
    if exponent.fract() == 0.0 && exponent.abs() <= f64::from(i32::MAX) {
        base.powi(exponent as i32)
    } else {
        base.powf(exponent)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(value) if value.is_nan() => f.write_str("(0 / 0)"),
            Self::Num(value) if value.is_infinite() => {
                let sign = if value.is_sign_negative() { "-" } else { "" };
                write!(f, "({sign}1 / 0)")
            }
            Self::Num(value) => write!(f, "{value}"),
            Self::Const(Constant::Pi) => f.write_str("pi"),
            Self::Const(Constant::E) => f.write_str("e"),
            Self::Var(name) => f.write_str(name),
            Self::Neg(a) => {
                f.write_str("-")?;
                a.fmt_child(f, 4)
            }
            Self::Add(a, b) => self.fmt_binary(f, a, b, "+"),
            Self::Sub(a, b) => self.fmt_binary(f, a, b, "-"),
            Self::Mul(a, b) => self.fmt_binary(f, a, b, "*"),
            Self::Div(a, b) => self.fmt_binary(f, a, b, "/"),
            Self::Pow(a, b) => self.fmt_binary(f, a, b, "^"),
            Self::Call(func, arg) => write!(f, "{}({arg})", func.name()),
        }
    }
}
