use crate::{
    error::TranslationError,
    interpreter::{operation::Operation, registry::Registry},
    token::{Arity, Token},
};

/// Result type used by the translator.
pub type TranslationResult<T> = Result<T, TranslationError>;

/// Parses a number token's text as a finite `f64`.
///
/// Text made only of digits, `.`, exponent markers and signs that still
/// parses to infinity (`1e400`) overflowed; anything else non-finite, such as
/// `inf` or `NaN`, is not a literal at all.
fn parse_number(text: &str, position: usize) -> TranslationResult<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(value)
            if value.is_infinite()
               && text.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')) =>
        {
            Err(TranslationError::NumberOutOfRange { text: text.to_string(),
                                                     position })
        },
        _ => Err(TranslationError::InvalidNumberLiteral { text: text.to_string(),
                                                          position }),
    }
}

/// Resolves a single RPN token to its operation.
///
/// Operators are looked up in the unary or binary table according to the
/// arity the annotator gave them.
///
/// # Errors
/// See [`translate`].
pub fn translate_token(token: &Token, registry: &Registry) -> TranslationResult<Operation> {
    match token {
        Token::Number(lexeme) => Ok(Operation::Push(parse_number(&lexeme.text, lexeme.position)?)),
        Token::Operator(lexeme, info) => {
            let unsupported = || TranslationError::UnsupportedOperator { symbol:   lexeme.text.clone(),
                                                                         arity:    info.arity,
                                                                         position: lexeme.position, };
            let symbol = lexeme.text.clone();
            match info.arity {
                Arity::Unary => registry.unary(&lexeme.text)
                                        .map(|apply| Operation::Unary { symbol, apply })
                                        .ok_or_else(unsupported),
                Arity::Binary => registry.binary(&lexeme.text)
                                         .map(|apply| Operation::Binary { symbol, apply })
                                         .ok_or_else(unsupported),
            }
        },
        Token::Function(lexeme) => registry.function(&lexeme.text)
                                           .map(|def| Operation::Call { name:  lexeme.text.clone(),
                                                                        arity: def.arity,
                                                                        apply: def.apply, })
                                           .ok_or_else(|| {
                                               TranslationError::UnsupportedFunction { name:     lexeme.text.clone(),
                                                                                       position: lexeme.position, }
                                           }),
        Token::Parenthesis(lexeme, _) | Token::Separator(lexeme) => {
            Err(TranslationError::UnexpectedToken { text:     lexeme.text.clone(),
                                                    position: lexeme.position, })
        },
    }
}

/// Translates an RPN token sequence into executable operations.
///
/// # Errors
/// - [`TranslationError::InvalidNumberLiteral`] if a number's text is not a
///   numeric literal.
/// - [`TranslationError::NumberOutOfRange`] if a well-formed literal such as
///   `1e400` overflows `f64`.
/// - [`TranslationError::UnsupportedOperator`] if `registry` has no operator
///   for the symbol at its arity.
/// - [`TranslationError::UnsupportedFunction`] if `registry` has no function
///   of that name.
/// - [`TranslationError::UnexpectedToken`] for a parenthesis or separator,
///   which a sorted sequence never contains.
///
/// # Example
/// ```
/// use shunt::interpreter::{
///     annotator::annotate, lexer::tokenize, registry::Registry, sorter::sort_to_rpn,
///     translator::translate,
/// };
///
/// let rpn = sort_to_rpn(annotate(&tokenize("-sqrt(4)").unwrap()).unwrap()).unwrap();
/// let operations = translate(&rpn, &Registry::standard()).unwrap();
/// let listing: Vec<_> = operations.iter().map(ToString::to_string).collect();
/// assert_eq!(listing, ["push 4", "call sqrt/1", "unary -"]);
/// ```
pub fn translate(tokens: &[Token], registry: &Registry) -> TranslationResult<Vec<Operation>> {
    let operations = tokens.iter()
                           .map(|token| translate_token(token, registry))
                           .collect::<TranslationResult<Vec<_>>>()?;
    tracing::debug!(count = operations.len(), "translated tokens into operations");
    Ok(operations)
}
