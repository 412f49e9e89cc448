//! Recursive-descent parser.
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := unary (('*' | '/') unary | power)*
//! unary      := ('-' | '+') unary | power
//! power      := primary ('^' unary)?
//! primary    := NUMBER | IDENT | IDENT '(' expression ')' | '(' expression ')'
//! ```
//!
//! The bare `power` alternative in `term` is implicit multiplication, taken
//! when an identifier or an opening parenthesis directly follows a factor
//! (`2x`, `3(x + 1)`, `x sin(x)`).

use crate::{
    ParseError,
    ast::{Constant, Expr, Func},
    lex::{Token, TokenKind, tokenize},
};

/// Deepest expression the parser accepts.
///
/// Bounds both the nesting of parentheses, calls, signs and exponents, and
/// the height of the resulting tree, so evaluation, differentiation and
/// printing never recurse deeper than this.
pub(crate) const MAX_DEPTH: usize = 256;

/// Parses expression text into a tree.
pub(crate) fn parse(text: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        nesting: 0,
    };
    let node = parser.expression()?;

    match parser.peek() {
        Some(token) => Err(unexpected(token)),
        None => Ok(node.expr),
    }
}

/// A parsed subtree with its height.
struct Node {
    expr: Expr,
    height: usize,
}

impl Node {
    fn leaf(expr: Expr) -> Self {
        Self { expr, height: 1 }
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    nesting: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|token| &token.kind)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the next token if it has the given kind.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek_kind() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn too_deep(&self) -> ParseError {
        let offset = self
            .tokens
            .get(self.pos.saturating_sub(1))
            .map_or(0, |token| token.offset);
        ParseError::TooDeep { offset }
    }

    /// Wraps one subtree, failing if the result grows past [`MAX_DEPTH`].
    fn wrap(&self, a: Node, make: impl FnOnce(Expr) -> Expr) -> Result<Node, ParseError> {
        let height = a.height + 1;
        if height > MAX_DEPTH {
            return Err(self.too_deep());
        }
        Ok(Node {
            expr: make(a.expr),
            height,
        })
    }

    /// Joins two subtrees, failing if the result grows past [`MAX_DEPTH`].
    fn join(&self, a: Node, b: Node, make: fn(Expr, Expr) -> Expr) -> Result<Node, ParseError> {
        let height = a.height.max(b.height) + 1;
        if height > MAX_DEPTH {
            return Err(self.too_deep());
        }
        Ok(Node {
            expr: make(a.expr, b.expr),
            height,
        })
    }

    fn expression(&mut self) -> Result<Node, ParseError> {
        let mut lhs = self.term()?;
        loop {
            if self.eat(&TokenKind::Plus) {
                let rhs = self.term()?;
                lhs = self.join(lhs, rhs, Expr::add)?;
            } else if self.eat(&TokenKind::Minus) {
                let rhs = self.term()?;
                lhs = self.join(lhs, rhs, Expr::sub)?;
            } else {
                return Ok(lhs);
            }
        }
    }

    fn term(&mut self) -> Result<Node, ParseError> {
        let mut lhs = self.unary()?;
        loop {
            if self.eat(&TokenKind::Star) {
                let rhs = self.unary()?;
                lhs = self.join(lhs, rhs, Expr::mul)?;
            } else if self.eat(&TokenKind::Slash) {
                let rhs = self.unary()?;
                lhs = self.join(lhs, rhs, Expr::div)?;
            } else if matches!(
                self.peek_kind(),
                Some(TokenKind::Ident(_) | TokenKind::OpenParen)
            ) {
                let rhs = self.power()?;
                lhs = self.join(lhs, rhs, Expr::mul)?;
            } else {
                return Ok(lhs);
            }
        }
    }

    /// Every recursive path through the grammar passes through here, so
    /// this is where nesting is counted.
    fn unary(&mut self) -> Result<Node, ParseError> {
        self.nesting += 1;
        if self.nesting > MAX_DEPTH {
            return Err(self.too_deep());
        }

        let node = if self.eat(&TokenKind::Minus) {
            let a = self.unary()?;
            self.wrap(a, Expr::neg)?
        } else if self.eat(&TokenKind::Plus) {
            self.unary()?
        } else {
            self.power()?
        };

        self.nesting -= 1;
        Ok(node)
    }

    fn power(&mut self) -> Result<Node, ParseError> {
        let base = self.primary()?;
        if self.eat(&TokenKind::Caret) {
            let exponent = self.unary()?;
            self.join(base, exponent, Expr::pow)
        } else {
            Ok(base)
        }
    }

    fn primary(&mut self) -> Result<Node, ParseError> {
        let token = self.next().ok_or(ParseError::UnexpectedEnd)?;

        match token.kind {
            TokenKind::Number(value) => Ok(Node::leaf(Expr::Num(value))),
            TokenKind::Ident(name) => {
                if self.peek_kind() == Some(&TokenKind::OpenParen) {
                    let func = Func::from_name(&name).ok_or(ParseError::UnknownFunction {
                        name,
                        offset: token.offset,
                    })?;
                    let arg = self.parenthesized()?;
                    self.wrap(arg, |arg| Expr::call(func, arg))
                } else if let Some(constant) = Constant::from_name(&name) {
                    Ok(Node::leaf(Expr::Const(constant)))
                } else {
                    Ok(Node::leaf(Expr::Var(name)))
                }
            }
            TokenKind::OpenParen => {
                self.pos -= 1;
                self.parenthesized()
            }
            _ => Err(unexpected(&token)),
        }
    }

    /// Parses `'(' expression ')'`.
    fn parenthesized(&mut self) -> Result<Node, ParseError> {
        let open = self.next().ok_or(ParseError::UnexpectedEnd)?;
        debug_assert_eq!(open.kind, TokenKind::OpenParen);

        let inner = self.expression()?;
        match self.next() {
            Some(Token {
                kind: TokenKind::CloseParen,
                ..
            }) => Ok(inner),
            Some(token) => Err(unexpected(&token)),
            None => Err(ParseError::UnclosedParen {
                offset: open.offset,
            }),
        }
    }
}

fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken {
        found: token.kind.to_string(),
        offset: token.offset,
    }
}
