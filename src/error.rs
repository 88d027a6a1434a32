/// Parsing errors.
///
/// Defines all error types that can occur while lexing, annotating, or sorting
/// an expression. These are input-validation failures: unknown characters,
/// unknown operators, and mismatched parentheses.
pub mod parse_error;
/// Translation errors.
///
/// Raised when an RPN token cannot be turned into an executable operation,
/// either because its literal does not parse or because the registry has no
/// entry for it.
pub mod translation_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while running an operation
/// sequence: stack underflow, division by zero, function domain errors, and
/// leftover operands.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::{ParseError, ParseResult};
pub use translation_error::TranslationError;

/// Any failure of the full expression pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Lexing, annotation or sorting failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// An RPN token had no matching operation.
    #[error(transparent)]
    Translation(#[from] TranslationError),
    /// The operation sequence could not be executed.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
