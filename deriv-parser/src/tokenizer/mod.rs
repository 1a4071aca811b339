pub mod token;

use crate::parser::ast::call::Func;
use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
///
/// The iterator is lazy and finite; call this function again to restart from the beginning.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns true if the token ends an operand, meaning a binary operator is expected after it.
fn ends_operand(token: &Token) -> bool {
    match token.kind {
        TokenKind::Number | TokenKind::Leibniz | TokenKind::CloseParen => true,
        TokenKind::Name => Func::from_call_name(token.lexeme).is_none(),
        _ => false,
    }
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows us
/// to backtrack in case of an error.
///
/// A signed number or name (such as `-1` or `-x`) that directly follows an operand is split into
/// a subtraction operator and the unsigned remainder, so that `x-1` is read as `x - 1` instead of
/// two adjacent operands.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens: Vec<Token> = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let lexeme = lexer.slice();
        let kind = result.unwrap_or(TokenKind::Symbol);

        let signed = matches!(kind, TokenKind::Number | TokenKind::Name) && lexeme.starts_with('-');
        let after_operand = tokens
            .iter()
            .rev()
            .find(|token| !token.is_whitespace())
            .is_some_and(ends_operand);

        if signed && after_operand {
            tokens.push(Token {
                span: span.start..span.start + 1,
                kind: TokenKind::Sub,
                lexeme: &lexeme[..1],
            });
            tokens.push(Token {
                span: span.start + 1..span.end,
                kind,
                lexeme: &lexeme[1..],
            });
        } else {
            tokens.push(Token { span, kind, lexeme });
        }
    }

    tokens.into_boxed_slice()
}
