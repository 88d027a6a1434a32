//! # shunt
//!
//! shunt is an arithmetic expression evaluator written in Rust.
//! It lexes an expression, annotates its operators, reorders it into Reverse
//! Polish Notation with the shunting-yard algorithm, translates every token
//! into an operation, and runs the operations on a numeric stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseResult,
    interpreter::{
        annotator::annotate,
        evaluator::evaluate,
        lexer::tokenize,
        registry::Registry,
        sorter::sort_to_rpn,
        translator::translate,
    },
    token::Token,
};

/// Provides the error types of every pipeline stage.
///
/// Each stage family has its own enum so callers can tell input mistakes
/// (parse errors), registry gaps (translation errors) and arithmetic failures
/// (evaluation errors) apart. [`error::Error`] unites them for callers that
/// run the whole pipeline.
pub mod error;
/// Runs the expression pipeline.
///
/// This module ties together lexing, annotation, sorting, translation and
/// evaluation. Each stage consumes the complete output of the previous one and
/// never reaches back into an earlier stage.
///
/// # Responsibilities
/// - Exposes one entry point per stage, composable in order.
/// - Keeps the operator table and registry as explicit values so tests and
///   embedders can swap them.
pub mod interpreter;
/// Defines the token model shared by all stages.
///
/// Raw tokens come from the lexer with only a type tag and text. Annotated
/// tokens are a closed enum whose `Operator` variant carries precedence,
/// associativity and arity.
pub mod token;

pub use error::Error;

/// Evaluates an arithmetic expression with the standard operators and
/// functions.
///
/// # Errors
/// Returns an error if lexing, annotation, sorting, translation or evaluation
/// fails.
///
/// # Examples
/// ```
/// use shunt::evaluate_expression;
///
/// assert_eq!(evaluate_expression("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate_expression("(2+3)*4").unwrap(), 20.0);
///
/// // Division by zero is an error, not an infinity.
/// assert!(evaluate_expression("5/0").is_err());
/// ```
pub fn evaluate_expression(source: &str) -> Result<f64, Error> {
    evaluate_with(source, Registry::shared())
}

/// Evaluates an arithmetic expression against a custom registry.
///
/// The standard operator table is still used for annotation, so every
/// operator symbol must be one of `+ - * / % ^`; functions are unrestricted.
///
/// # Errors
/// Returns an error if any stage fails.
pub fn evaluate_with(source: &str, registry: &Registry) -> Result<f64, Error> {
    evaluate_rpn(&parse_to_rpn(source)?, registry)
}

/// Lexes, annotates and sorts an expression into Reverse Polish Notation.
///
/// # Errors
/// Returns a [`error::ParseError`] if lexing, annotation or sorting fails.
///
/// # Examples
/// ```
/// use shunt::parse_to_rpn;
///
/// let rpn = parse_to_rpn("2^3^2").unwrap();
/// let text: Vec<_> = rpn.iter().map(|t| t.text()).collect();
/// assert_eq!(text, ["2", "3", "2", "^", "^"]);
/// ```
pub fn parse_to_rpn(source: &str) -> ParseResult<Vec<Token>> {
    sort_to_rpn(annotate(&tokenize(source)?)?)
}

/// Translates an RPN sequence against `registry` and evaluates it.
///
/// # Errors
/// Returns an error if translation or evaluation fails.
pub fn evaluate_rpn(rpn: &[Token], registry: &Registry) -> Result<f64, Error> {
    let operations = translate(rpn, registry)?;
    Ok(evaluate(&operations)?)
}
