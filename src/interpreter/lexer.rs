use logos::Logos;

use crate::{
    error::{ParseError, ParseResult},
    token::{RawKind, RawToken},
};

/// The lexical grammar of expressions.
///
/// Each variant maps one-to-one onto a [`RawKind`]. Whitespace, including
/// newlines, is skipped.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
enum Lexeme {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    Number,
    /// Identifier tokens naming functions, such as `sin` or `log10`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `+`, `-`, `*`, `/`, `%` and `^`.
    #[regex(r"[-+*/%^]")]
    Operator,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
}

impl From<Lexeme> for RawKind {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Number => Self::Number,
            Lexeme::Identifier => Self::Function,
            Lexeme::Operator => Self::Operator,
            Lexeme::LParen => Self::OpenParen,
            Lexeme::RParen => Self::CloseParen,
            Lexeme::Comma => Self::Separator,
        }
    }
}

/// Splits source text into raw tokens.
///
/// The lexer knows nothing about precedence or arity; it only tags each
/// token with its lexical category and remembers where it came from.
///
/// # Errors
/// Returns [`ParseError::UnexpectedCharacter`] for any character that does
/// not begin a token.
///
/// # Example
/// ```
/// use shunt::{interpreter::lexer::tokenize, token::RawKind};
///
/// let tokens = tokenize("sin(2.5)").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [RawKind::Function, RawKind::OpenParen, RawKind::Number, RawKind::CloseParen]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<RawToken>> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let position = lexer.span().start;
        match lexeme {
            Ok(lexeme) => tokens.push(RawToken::new(lexeme.into(), lexer.slice(), position)),
            Err(()) => {
                return Err(ParseError::UnexpectedCharacter { text: lexer.slice().to_string(),
                                                             position });
            },
        }
    }

    tracing::debug!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}
