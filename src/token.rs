use std::fmt;

/// The type tag attached to a token by the lexer.
///
/// Lexed tokens only know what they look like, not what they mean: a `-` is
/// an `Operator` here whether it ends up negating or subtracting. The
/// annotator resolves that later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawKind {
    /// Numeric literal such as `42` or `1.5e-3`.
    Number,
    /// Operator symbol such as `+` or `^`.
    Operator,
    /// Identifier naming a function, such as `sin`.
    Function,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `,` between function arguments.
    Separator,
}

impl fmt::Display for RawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "Number",
            Self::Operator => "Operator",
            Self::Function => "Function",
            Self::OpenParen | Self::CloseParen => "Parenthesis",
            Self::Separator => "Separator",
        };
        f.write_str(name)
    }
}

/// A minimally typed token as produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    /// The lexical category.
    pub kind:     RawKind,
    /// The exact source text of the token.
    pub text:     String,
    /// Byte offset of the token in the source.
    pub position: usize,
}

impl RawToken {
    /// Creates a raw token.
    #[must_use]
    pub fn new(kind: RawKind, text: impl Into<String>, position: usize) -> Self {
        Self { kind,
               text: text.into(),
               position }
    }
}

/// Source text and location shared by every annotated token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    /// The exact source text.
    pub text:     String,
    /// Byte offset in the source.
    pub position: usize,
}

impl Lexeme {
    /// Creates a lexeme.
    #[must_use]
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        Self { text: text.into(),
               position }
    }
}

/// Direction in which chained operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

/// Number of operands an operator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// One operand, written before it (`-x`).
    Unary,
    /// Two operands, written around it (`x - y`).
    Binary,
}

impl Arity {
    /// The number of stack operands this arity consumes.
    #[must_use]
    pub const fn operands(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unary => f.write_str("unary"),
            Self::Binary => f.write_str("binary"),
        }
    }
}

/// Grammar metadata resolved for an operator during annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperatorInfo {
    /// Binding strength; higher binds tighter.
    pub precedence:    u32,
    /// Tie-break for equal precedence.
    pub associativity: Associativity,
    /// Operand count.
    pub arity:         Arity,
}

/// Which side of a parenthesised group a parenthesis token opens or closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paren {
    Open,
    Close,
}

/// An annotated token.
///
/// Every consumer matches on the variant, so operator metadata is only ever
/// reachable through an `Operator` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A numeric literal, still in textual form.
    Number(Lexeme),
    /// An operator with its resolved precedence, associativity and arity.
    Operator(Lexeme, OperatorInfo),
    /// A function name.
    Function(Lexeme),
    /// An opening or closing parenthesis.
    Parenthesis(Lexeme, Paren),
    /// An argument separator.
    Separator(Lexeme),
}

impl Token {
    /// Returns the source text and position of the token.
    #[must_use]
    pub const fn lexeme(&self) -> &Lexeme {
        match self {
            Self::Number(lexeme)
            | Self::Operator(lexeme, _)
            | Self::Function(lexeme)
            | Self::Parenthesis(lexeme, _)
            | Self::Separator(lexeme) => lexeme,
        }
    }

    /// Returns the source text of the token.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.lexeme().text
    }

    /// Returns the byte offset of the token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.lexeme().position
    }

    /// Returns the human-readable type name of the token.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "Number",
            Self::Operator(..) => "Operator",
            Self::Function(_) => "Function",
            Self::Parenthesis(..) => "Parenthesis",
            Self::Separator(_) => "Separator",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operator(lexeme, info) => write!(f,
                                                   "{} {} {} {}",
                                                   self.type_name(),
                                                   lexeme.text,
                                                   info.arity,
                                                   info.precedence),
            _ => write!(f, "{} {}", self.type_name(), self.text()),
        }
    }
}
