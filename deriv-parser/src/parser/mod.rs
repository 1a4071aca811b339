pub mod ast;
pub mod error;
pub mod fmt;
pub mod op;

use ast::{call::{Call, Func}, expr::Expr, leaf::{split_coefficient, Leaf}};
use error::{Error, kind};
use op::{Associativity, BinOpKind};
use std::ops::Range;
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use tracing::{debug, trace};

/// An entry on the parser's operator stack, waiting to be merged with its operands.
#[derive(Debug, Clone)]
enum Pending {
    /// A binary operator.
    Op {
        op: BinOpKind,
        span: Range<usize>,
    },

    /// A function name, merged with its argument once the matching `)` is found.
    Func {
        coefficient: Option<f64>,
        func: Func,
        name: String,
        span: Range<usize>,
    },

    /// An opening parenthesis.
    OpenParen {
        span: Range<usize>,
    },
}

/// A shunting-yard parser that converts a stream of tokens into an [`Expr`] tree.
///
/// The parser keeps two explicit stacks: one of finished operands, and one of operators,
/// functions and open parentheses that are waiting for their operands. Whenever an operator is
/// popped from the second stack, it is merged with the operands on top of the first stack into a
/// new subtree, which is then pushed back as an operand.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// Operands that have been fully parsed.
    operands: Vec<Expr>,

    /// Operators, functions, and open parentheses waiting to be merged.
    operators: Vec<Pending>,

    /// Whether the next token should begin an operand. When false, the next token should be a
    /// binary operator or a closing parenthesis.
    expect_operand: bool,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self::from_tokens(tokenize_complete(source))
    }

    /// Create a new parser over an already tokenized source.
    pub fn from_tokens(tokens: Box<[Token<'source>]>) -> Self {
        Self {
            tokens,
            cursor: 0,
            operands: Vec::new(),
            operators: Vec::new(),
            expect_operand: true,
        }
    }

    /// Returns a span pointing at the end of the source code.
    fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the next token to be parsed without advancing the cursor. Whitespace tokens are
    /// skipped.
    fn peek_token(&self) -> Option<&Token<'source>> {
        self.tokens[self.cursor..].iter().find(|token| !token.is_whitespace())
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    fn next_token(&mut self) -> Option<Token<'source>> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if !token.is_whitespace() {
                // cloning is cheap: only Range<_> is cloned
                return Some(token.clone());
            }
        }
        None
    }

    /// Parses the entire token stream into a single expression.
    ///
    /// Returns an error if the parentheses are unbalanced, an operator or function is missing an
    /// operand, two operands are not joined by an operator, or a token is not recognized.
    pub fn parse(mut self) -> Result<Expr, Error> {
        if self.peek_token().is_none() {
            return Err(Error::new(vec![self.eof_span()], kind::EmptyExpression));
        }

        while let Some(token) = self.next_token() {
            Self::check_range(&token)?;
            match token.kind {
                TokenKind::Number | TokenKind::Leibniz => {
                    let leaf = Self::parse_leaf(&token)?;
                    self.push_operand(leaf, token.span)?;
                },
                TokenKind::Name => match Func::from_call_name(token.lexeme) {
                    Some((coefficient, func)) => self.push_func(coefficient, func, &token)?,
                    None => {
                        let leaf = Self::parse_leaf(&token)?;
                        self.push_operand(leaf, token.span)?;
                    },
                },
                TokenKind::OpenParen => {
                    if !self.expect_operand {
                        return Err(Error::new(vec![token.span], kind::MissingOperator));
                    }
                    self.operators.push(Pending::OpenParen { span: token.span });
                },
                TokenKind::CloseParen => self.close_paren(token.span)?,
                TokenKind::Add | TokenKind::Sub | TokenKind::Mul | TokenKind::Div | TokenKind::Exp => {
                    // the match arm guarantees this is an operator
                    if let Some(op) = BinOpKind::from_token(token.kind) {
                        self.push_operator(op, token.span)?;
                    }
                },
                TokenKind::Symbol => {
                    return Err(Error::new(vec![token.span], kind::UnexpectedToken {
                        found: token.lexeme.to_string(),
                    }));
                },
                TokenKind::Whitespace => {},
            }
        }

        if self.expect_operand {
            return Err(self.missing_operand_at_top());
        }

        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::OpenParen { span } => {
                    return Err(Error::new(vec![span], kind::UnclosedParenthesis { opening: true }));
                },
                pending => self.merge(pending)?,
            }
        }

        let expr = self.operands.pop()
            .ok_or_else(|| Error::new(vec![self.eof_span()], kind::EmptyExpression))?;
        if let Some(extra) = self.operands.pop() {
            // every operand push is gated on `expect_operand`, so this only happens on a bug
            debug!(?extra, "operand left over after parsing");
            return Err(Error::new(vec![self.eof_span()], kind::MissingOperator));
        }
        Ok(expr)
    }

    /// Returns an error if the number, or the coefficient of the name, in the token is too large
    /// to be represented.
    fn check_range(token: &Token) -> Result<(), Error> {
        let value = match token.kind {
            TokenKind::Number => token.lexeme.parse::<f64>().ok(),
            TokenKind::Name => split_coefficient(token.lexeme).and_then(|(coefficient, _)| coefficient),
            _ => None,
        };
        match value {
            Some(n) if !n.is_finite() => Err(Error::new(vec![token.span.clone()], kind::NumberOutOfRange {
                number: token.lexeme.to_string(),
            })),
            _ => Ok(()),
        }
    }

    /// Builds a leaf from a number, name, or Leibniz token.
    fn parse_leaf(token: &Token) -> Result<Expr, Error> {
        let leaf = match token.kind {
            TokenKind::Number => token.lexeme.parse::<f64>().ok().map(Leaf::Number),
            TokenKind::Leibniz => Leaf::from_leibniz(token.lexeme),
            _ => Leaf::from_name(token.lexeme),
        };
        leaf.map(Expr::Leaf).ok_or_else(|| {
            Error::new(vec![token.span.clone()], kind::UnknownSymbol {
                name: token.lexeme.to_string(),
            })
        })
    }

    /// Pushes a finished operand onto the operand stack.
    fn push_operand(&mut self, expr: Expr, span: Range<usize>) -> Result<(), Error> {
        if !self.expect_operand {
            return Err(Error::new(vec![span], kind::MissingOperator));
        }
        self.operands.push(expr);
        self.expect_operand = false;
        Ok(())
    }

    /// Pushes a function onto the operator stack. The function must be immediately followed by
    /// an opening parenthesis.
    fn push_func(&mut self, coefficient: Option<f64>, func: Func, token: &Token) -> Result<(), Error> {
        if !self.expect_operand {
            return Err(Error::new(vec![token.span.clone()], kind::MissingOperator));
        }
        if self.peek_token().map(|next| next.kind) != Some(TokenKind::OpenParen) {
            return Err(Error::new(vec![token.span.clone()], kind::UnknownSymbol {
                name: token.lexeme.to_string(),
            }));
        }
        self.operators.push(Pending::Func {
            coefficient,
            func,
            name: token.lexeme.to_string(),
            span: token.span.clone(),
        });
        Ok(())
    }

    /// Pushes a binary operator onto the operator stack, first merging any operators on the stack
    /// that bind at least as tightly.
    fn push_operator(&mut self, op: BinOpKind, span: Range<usize>) -> Result<(), Error> {
        if self.expect_operand {
            return Err(Error::new(vec![span], kind::MissingOperand { op: op.to_string() }));
        }

        while let Some(Pending::Op { op: top, .. }) = self.operators.last() {
            let should_merge = top.precedence() > op.precedence()
                || (top.precedence() == op.precedence() && op.associativity() == Associativity::Left);
            if !should_merge {
                break;
            }
            if let Some(pending) = self.operators.pop() {
                self.merge(pending)?;
            }
        }

        self.operators.push(Pending::Op { op, span });
        self.expect_operand = true;
        Ok(())
    }

    /// Merges operators until the matching opening parenthesis is found, then merges the function
    /// that owns the parentheses, if any.
    fn close_paren(&mut self, span: Range<usize>) -> Result<(), Error> {
        if self.expect_operand {
            return Err(self.missing_operand_at_top());
        }

        loop {
            match self.operators.pop() {
                Some(Pending::OpenParen { .. }) => break,
                Some(pending) => self.merge(pending)?,
                None => {
                    return Err(Error::new(vec![span], kind::UnclosedParenthesis { opening: false }));
                },
            }
        }

        if matches!(self.operators.last(), Some(Pending::Func { .. })) {
            if let Some(pending) = self.operators.pop() {
                self.merge(pending)?;
            }
        }
        Ok(())
    }

    /// Pops the operands of the given operator or function and pushes the merged subtree.
    fn merge(&mut self, pending: Pending) -> Result<(), Error> {
        match pending {
            Pending::Op { op, span } => {
                let (rhs, lhs) = match (self.operands.pop(), self.operands.pop()) {
                    (Some(rhs), Some(lhs)) => (rhs, lhs),
                    _ => return Err(Error::new(vec![span], kind::MissingOperand { op: op.to_string() })),
                };
                trace!(%op, "merging binary operator");
                self.operands.push(Expr::binary(lhs, op, rhs));
            },
            Pending::Func { coefficient, func, name, span } => {
                let arg = self.operands.pop()
                    .ok_or_else(|| Error::new(vec![span], kind::MissingOperand { op: name }))?;
                trace!(%func, "merging function call");
                self.operands.push(Expr::Call(Call {
                    coefficient,
                    func,
                    arg: Box::new(arg),
                }));
            },
            Pending::OpenParen { span } => {
                return Err(Error::new(vec![span], kind::UnclosedParenthesis { opening: true }));
            },
        }
        Ok(())
    }

    /// Builds an error for an operand that was expected but never arrived, pointing at whatever
    /// is waiting on top of the operator stack.
    fn missing_operand_at_top(&self) -> Error {
        match self.operators.last() {
            Some(Pending::Op { op, span }) => {
                Error::new(vec![span.clone()], kind::MissingOperand { op: op.to_string() })
            },
            Some(Pending::Func { name, span, .. }) => {
                Error::new(vec![span.clone()], kind::MissingOperand { op: name.clone() })
            },
            Some(Pending::OpenParen { span }) => {
                let op = match self.operators.iter().rev().nth(1) {
                    Some(Pending::Func { name, .. }) => name.clone(),
                    _ => "(".to_string(),
                };
                Error::new(vec![span.clone()], kind::MissingOperand { op })
            },
            None => Error::new(vec![self.eof_span()], kind::EmptyExpression),
        }
    }
}

/// Parses the given source into an expression tree.
pub fn parse(source: &str) -> Result<Expr, Error> {
    let result = Parser::new(source).parse();
    if let Err(err) = &result {
        debug!(source, error = %err, "failed to parse expression");
    }
    result
}

/// Parses an already tokenized source into an expression tree.
pub fn parse_tokens(tokens: &[Token]) -> Result<Expr, Error> {
    Parser::from_tokens(tokens.into()).parse()
}

/// Parses the given source, returning the tree (if any) along with a flag indicating whether the
/// parse succeeded.
///
/// The tree is [`None`] exactly when the flag is false; a partially built tree is never returned.
pub fn parse_with_validity(source: &str) -> (Option<Expr>, bool) {
    match parse(source) {
        Ok(expr) => (Some(expr), true),
        Err(_) => (None, false),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::parser::ast::leaf::Constant;

    #[test]
    fn single_leaf() {
        assert_eq!(parse("x").unwrap(), Expr::symbol('x'));
        assert_eq!(parse("  5.5 ").unwrap(), Expr::number(5.5));
        assert_eq!(parse("pi").unwrap(), Expr::constant(Constant::Pi));
        assert_eq!(parse("dy/dx").unwrap(), Expr::leibniz('y', 'x'));
    }

    #[test]
    fn precedence() {
        assert_eq!(
            parse("1 + 2 * 3").unwrap(),
            Expr::number(1.0) + Expr::number(2.0) * Expr::number(3.0),
        );
        assert_eq!(
            parse("1 * 2 + 3").unwrap(),
            Expr::number(1.0) * Expr::number(2.0) + Expr::number(3.0),
        );
        assert_eq!(
            parse("2 * x ^ 3").unwrap(),
            Expr::number(2.0) * Expr::symbol('x').pow(Expr::number(3.0)),
        );
    }

    #[test]
    fn left_associative() {
        assert_eq!(
            parse("1 - 2 - 3").unwrap(),
            (Expr::number(1.0) - Expr::number(2.0)) - Expr::number(3.0),
        );
        assert_eq!(
            parse("8 / 4 / 2").unwrap(),
            (Expr::number(8.0) / Expr::number(4.0)) / Expr::number(2.0),
        );
    }

    #[test]
    fn right_associative_exp() {
        assert_eq!(
            parse("2 ^ 3 ^ 2").unwrap(),
            Expr::number(2.0).pow(Expr::number(3.0).pow(Expr::number(2.0))),
        );
    }

    #[test]
    fn parenthesized() {
        assert_eq!(
            parse("(1 + 2) * 3").unwrap(),
            (Expr::number(1.0) + Expr::number(2.0)) * Expr::number(3.0),
        );
        assert_eq!(parse("((x))").unwrap(), Expr::symbol('x'));
    }

    #[test]
    fn function_calls() {
        assert_eq!(
            parse("sin(x + 1)").unwrap(),
            Expr::call(Func::Sin, Expr::symbol('x') + Expr::number(1.0)),
        );
        assert_eq!(
            parse("cos(sin(x)) * 2").unwrap(),
            Expr::call(Func::Cos, Expr::call(Func::Sin, Expr::symbol('x'))) * Expr::number(2.0),
        );
        assert_eq!(
            parse("3ln(x)").unwrap(),
            Expr::Call(Call {
                coefficient: Some(3.0),
                func: Func::Ln,
                arg: Box::new(Expr::symbol('x')),
            }),
        );
    }

    #[test]
    fn signed_operands() {
        assert_eq!(parse("x-1").unwrap(), Expr::symbol('x') - Expr::number(1.0));
        assert_eq!(parse("x ^ -1").unwrap(), Expr::symbol('x').pow(Expr::number(-1.0)));
        assert_eq!(parse("-2x").unwrap(), Expr::coefficient_symbol(-2.0, 'x'));
    }

    #[test]
    fn unbalanced_parentheses() {
        let err = parse("(((3 + 2) + 1)").unwrap_err();
        assert_eq!(err.to_string(), "unclosed parenthesis");
        assert_eq!(err.spans, vec![0..1]);

        let err = parse("(1 + (2 + 3)))").unwrap_err();
        assert_eq!(err.to_string(), "unclosed parenthesis");
        assert_eq!(err.spans, vec![13..14]);
    }

    #[test]
    fn missing_operands() {
        assert_eq!(parse("1 +").unwrap_err().to_string(), "missing operand for `+`");
        assert_eq!(parse("* 2").unwrap_err().to_string(), "missing operand for `*`");
        assert_eq!(parse("sin()").unwrap_err().to_string(), "missing operand for `sin`");
        assert_eq!(parse("()").unwrap_err().to_string(), "missing operand for `(`");
    }

    #[test]
    fn missing_operator() {
        let err = parse("2 x").unwrap_err();
        assert_eq!(err.to_string(), "missing operator between operands");
        assert_eq!(err.spans, vec![2..3]);
        assert!(parse("(1)(2)").is_err());
    }

    #[test]
    fn unknown_symbols() {
        assert_eq!(parse("foo + 1").unwrap_err().to_string(), "unknown symbol `foo`");
        assert_eq!(parse("sin x").unwrap_err().to_string(), "unknown symbol `sin`");
        assert_eq!(parse("log_x(2)").unwrap_err().to_string(), "unknown symbol `log_x`");
        assert_eq!(parse("1 % 2").unwrap_err().to_string(), "unexpected token `%`");
    }

    #[test]
    fn numbers_out_of_range() {
        let huge = "9".repeat(400);

        let err = parse(&format!("{} * x", huge)).unwrap_err();
        assert_eq!(err.to_string(), format!("number out of range in `{}`", huge));
        assert_eq!(err.spans, vec![0..400]);

        let err = parse(&format!("x + {}x", huge)).unwrap_err();
        assert_eq!(err.spans, vec![4..405]);

        let err = parse(&format!("{}sin(x)", huge)).unwrap_err();
        assert_eq!(err.spans, vec![0..403]);

        // large but finite numbers still round-trip
        let big = format!("1{}", "0".repeat(300));
        let expr = parse(&format!("{} * x", big)).unwrap();
        assert_eq!(parse(&expr.to_string()).unwrap(), expr);
    }

    #[test]
    fn empty() {
        assert_eq!(parse("").unwrap_err().to_string(), "empty expression");
        assert_eq!(parse("   ").unwrap_err().to_string(), "empty expression");
    }

    #[test]
    fn validity_flag() {
        assert_eq!(parse_with_validity("x + 1"), (Some(Expr::symbol('x') + Expr::number(1.0)), true));
        assert_eq!(parse_with_validity("(x + 1"), (None, false));
    }

    #[test]
    fn from_tokens() {
        let tokens = tokenize_complete("x * 2");
        assert_eq!(parse_tokens(&tokens).unwrap(), Expr::symbol('x') * Expr::number(2.0));
    }
}
