use crate::token::Arity;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while translating RPN tokens into
/// operations.
pub enum TranslationError {
    /// A number token's text is not a finite number.
    #[error("Error at position {position}: Invalid number literal '{text}'.")]
    InvalidNumberLiteral {
        /// The literal text.
        text:     String,
        /// Byte offset in the source.
        position: usize,
    },
    /// A well-formed number token whose value does not fit in an `f64`.
    #[error("Error at position {position}: Number literal '{text}' is out of range.")]
    NumberOutOfRange {
        /// The literal text.
        text:     String,
        /// Byte offset in the source.
        position: usize,
    },
    /// The registry has no operation for this operator and arity.
    #[error("Error at position {position}: Unsupported {arity} operator '{symbol}'.")]
    UnsupportedOperator {
        /// The operator symbol.
        symbol:   String,
        /// The arity the operator was annotated with.
        arity:    Arity,
        /// Byte offset in the source.
        position: usize,
    },
    /// The registry has no function with this name.
    #[error("Error at position {position}: Unsupported function '{name}'.")]
    UnsupportedFunction {
        /// The function name.
        name:     String,
        /// Byte offset in the source.
        position: usize,
    },
    /// A parenthesis or separator reached the translator. Sorted sequences
    /// never contain these.
    #[error("Error at position {position}: Token '{text}' cannot appear in RPN.")]
    UnexpectedToken {
        /// The token text.
        text:     String,
        /// Byte offset in the source.
        position: usize,
    },
}
