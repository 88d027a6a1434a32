use crate::{
    error::{ParseError, ParseResult},
    token::{Arity, Associativity, Lexeme, OperatorInfo, Paren, RawKind, RawToken, Token},
};

/// Defines the standard operator table.
///
/// Each entry provides a symbol, the arity it applies to, its precedence and
/// its associativity. The macro produces `STANDARD_OPERATORS`, a static slice
/// that [`OperatorTable::standard`] copies from.
macro_rules! operator_table {
    (
        $(
            ($symbol:literal, $arity:ident) => {
                precedence: $precedence:expr,
                associativity: $associativity:ident $(,)?
            }
        ),* $(,)?
    ) => {
        static STANDARD_OPERATORS: &[(&str, OperatorInfo)] = &[
            $(
                ($symbol, OperatorInfo { precedence:    $precedence,
                                         associativity: Associativity::$associativity,
                                         arity:         Arity::$arity, }),
            )*
        ];
    };
}

operator_table! {
    ("+", Binary) => { precedence: 1, associativity: Left },
    ("-", Binary) => { precedence: 1, associativity: Left },
    ("*", Binary) => { precedence: 2, associativity: Left },
    ("/", Binary) => { precedence: 2, associativity: Left },
    ("%", Binary) => { precedence: 2, associativity: Left },
    ("+", Unary)  => { precedence: 3, associativity: Right },
    ("-", Unary)  => { precedence: 3, associativity: Right },
    ("^", Binary) => { precedence: 4, associativity: Right },
}

/// Precedence, associativity and arity for every known operator symbol.
///
/// A symbol may appear twice, once per arity. The annotator decides which
/// arity applies from context and then looks up the matching entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorTable {
    entries: Vec<(String, OperatorInfo)>,
}

impl OperatorTable {
    /// Creates a table with no operators.
    #[must_use]
    pub const fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// Creates the table of standard arithmetic operators: binary
    /// `+ - * / % ^` and unary `+ -`.
    #[must_use]
    pub fn standard() -> Self {
        let entries = STANDARD_OPERATORS.iter()
                                        .map(|(symbol, info)| ((*symbol).to_string(), *info))
                                        .collect();
        Self { entries }
    }

    /// Adds an operator, replacing any entry with the same symbol and arity.
    #[must_use]
    pub fn with_operator(mut self, symbol: impl Into<String>, info: OperatorInfo) -> Self {
        let symbol = symbol.into();
        self.entries
            .retain(|(existing, existing_info)| *existing != symbol || existing_info.arity != info.arity);
        self.entries.push((symbol, info));
        self
    }

    /// Looks up the metadata for `symbol` used with the given arity.
    #[must_use]
    pub fn lookup(&self, symbol: &str, arity: Arity) -> Option<OperatorInfo> {
        self.entries
            .iter()
            .find(|(existing, info)| existing == symbol && info.arity == arity)
            .map(|(_, info)| *info)
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Decides whether an operator is used as a prefix (unary) operator.
///
/// An operator is unary when nothing precedes it, or when the preceding token
/// cannot end an operand: another operator, an opening parenthesis, or an
/// argument separator. Anything else (a number, a closing parenthesis, a
/// function name) leaves it binary.
fn resolve_arity(previous: Option<&Token>) -> Arity {
    match previous {
        None
        | Some(Token::Operator(..) | Token::Parenthesis(_, Paren::Open) | Token::Separator(_)) => {
            Arity::Unary
        },
        Some(_) => Arity::Binary,
    }
}

/// Annotates raw tokens using the standard operator table.
///
/// See [`annotate_with`].
///
/// # Example
/// ```
/// use shunt::{
///     interpreter::{annotator::annotate, lexer::tokenize},
///     token::{Arity, Token},
/// };
///
/// let tokens = annotate(&tokenize("-2-3").unwrap()).unwrap();
/// let arities: Vec<_> = tokens.iter()
///                             .filter_map(|t| match t {
///                                 Token::Operator(_, info) => Some(info.arity),
///                                 _ => None,
///                             })
///                             .collect();
/// assert_eq!(arities, [Arity::Unary, Arity::Binary]);
/// ```
pub fn annotate(tokens: &[RawToken]) -> ParseResult<Vec<Token>> {
    annotate_with(tokens, &OperatorTable::standard())
}

/// Wraps every raw token in its annotated variant.
///
/// Operators get their arity resolved from the previous token and their
/// precedence and associativity from `table`. Order and count are preserved.
///
/// # Errors
/// Returns [`ParseError::UnknownOperator`] when `table` has no entry for an
/// operator symbol at its resolved arity.
pub fn annotate_with(tokens: &[RawToken], table: &OperatorTable) -> ParseResult<Vec<Token>> {
    let mut annotated: Vec<Token> = Vec::with_capacity(tokens.len());

    for raw in tokens {
        let lexeme = Lexeme::new(raw.text.as_str(), raw.position);
        let token = match raw.kind {
            RawKind::Number => Token::Number(lexeme),
            RawKind::Function => Token::Function(lexeme),
            RawKind::OpenParen => Token::Parenthesis(lexeme, Paren::Open),
            RawKind::CloseParen => Token::Parenthesis(lexeme, Paren::Close),
            RawKind::Separator => Token::Separator(lexeme),
            RawKind::Operator => {
                let arity = resolve_arity(annotated.last());
                let info = table.lookup(&raw.text, arity)
                                .ok_or_else(|| ParseError::UnknownOperator { symbol: raw.text.clone(),
                                                                             arity,
                                                                             position: raw.position })?;
                Token::Operator(lexeme, info)
            },
        };
        tracing::trace!(token = %token, "annotated");
        annotated.push(token);
    }

    tracing::debug!(count = annotated.len(), "annotated tokens");
    Ok(annotated)
}
