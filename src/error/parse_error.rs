use crate::token::Arity;

/// Result type used by the lexer, annotator and sorter.
pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during lexing, annotation or sorting.
pub enum ParseError {
    /// The lexer found a character that starts no token.
    #[error("Error at position {position}: Unexpected character '{text}'.")]
    UnexpectedCharacter {
        /// The unrecognised source text.
        text:     String,
        /// Byte offset in the source.
        position: usize,
    },
    /// An operator symbol has no entry in the operator table for the arity
    /// its position implies.
    #[error("Error at position {position}: Unknown {arity} operator '{symbol}'.")]
    UnknownOperator {
        /// The operator symbol.
        symbol:   String,
        /// The arity resolved from the surrounding tokens.
        arity:    Arity,
        /// Byte offset in the source.
        position: usize,
    },
    /// A closing parenthesis has no opening partner, or an opening one is
    /// never closed.
    #[error("Error at position {position}: Unbalanced parenthesis '{text}'.")]
    UnbalancedParenthesis {
        /// The parenthesis that could not be matched.
        text:     String,
        /// Byte offset in the source.
        position: usize,
    },
    /// An argument separator appeared outside any parenthesised group.
    #[error("Error at position {position}: Separator ',' outside of a function call.")]
    MisplacedSeparator {
        /// Byte offset in the source.
        position: usize,
    },
}
