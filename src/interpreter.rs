/// The lexer module tokenizes source text for the pipeline.
///
/// The lexer reads the raw expression and produces a flat list of minimally
/// typed tokens: numbers, operator symbols, function names, parentheses and
/// separators, each with its source text and byte offset.
pub mod lexer;
/// The annotator module attaches grammar metadata to lexed tokens.
///
/// Each raw token is wrapped in its annotated variant. Operators get their
/// arity resolved from the preceding token and their precedence and
/// associativity from an operator table.
///
/// # Responsibilities
/// - Decides whether `-` and `+` are prefix or infix at each occurrence.
/// - Rejects operator symbols that have no table entry.
pub mod annotator;
/// The sorter module reorders annotated infix tokens into RPN.
///
/// This is the shunting-yard stage. It resolves precedence, associativity,
/// parentheses and function-argument boundaries, and is the only stage that
/// detects unbalanced parentheses.
pub mod sorter;
/// The operation module defines the executable steps of an expression.
pub mod operation;
/// The registry module maps symbols and names to implementations.
///
/// A registry is a plain value holding separate unary-operator,
/// binary-operator and function tables. The standard one covers the usual
/// arithmetic operators and math functions; custom ones can be built for
/// tests or embedding.
pub mod registry;
/// The translator module turns RPN tokens into operations.
pub mod translator;
/// The evaluator module runs an operation sequence on a numeric stack.
///
/// # Responsibilities
/// - Applies operations left to right, detecting stack underflow.
/// - Checks that exactly one value remains and returns it.
pub mod evaluator;
