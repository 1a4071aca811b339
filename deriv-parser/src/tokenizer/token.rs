use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    /// A signed or unsigned decimal number, such as `5`, `-2` or `3.14`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    /// An identifier: a variable or constant (`x`, `2x`, `pi`) or a function name (`sin`,
    /// `log_10`, `3cos`).
    #[regex(r"-?([0-9]+(\.[0-9]+)?)?[a-zA-Z][a-zA-Z0-9_.]*")]
    Name,

    /// A Leibniz derivative placeholder, such as `dy/dx`.
    #[regex(r"d[a-zA-Z]/d[a-zA-Z]")]
    Leibniz,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}
