/// Standard operator and function implementations.
///
/// Every builtin is a plain function pointer so the registry stays `Sync` and
/// can be shared between threads without locking.
pub mod builtin;

use std::{collections::HashMap, sync::LazyLock};

use crate::interpreter::operation::{BinaryFn, FunctionFn, UnaryFn};

/// A registered function: its fixed argument count and implementation.
#[derive(Debug, Clone, Copy)]
pub struct FunctionDef {
    /// Number of arguments popped from the stack.
    pub arity: usize,
    /// The implementation, called with the arguments in source order.
    pub apply: FunctionFn,
}

/// Defines the standard builtins by generating static lookup tables.
///
/// The macro produces:
/// - `UNARY_OPERATORS`, `BINARY_OPERATORS` (symbol to implementation),
/// - `BUILTIN_TABLE` (function name to [`FunctionDef`]),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtins {
    (
        unary { $($unary:literal => $unary_fn:expr),* $(,)? }
        binary { $($binary:literal => $binary_fn:expr),* $(,)? }
        functions {
            $(
                $name:literal => {
                    arity: $arity:expr,
                    func: $func:expr $(,)?
                }
            ),* $(,)?
        }
    ) => {
        static UNARY_OPERATORS: &[(&str, UnaryFn)] = &[$(($unary, $unary_fn),)*];
        static BINARY_OPERATORS: &[(&str, BinaryFn)] = &[$(($binary, $binary_fn),)*];
        static BUILTIN_TABLE: &[(&str, FunctionDef)] = &[
            $(
                ($name, FunctionDef { arity: $arity, apply: $func }),
            )*
        ];
        /// Names of all functions in the standard registry.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtins! {
    unary {
        "-" => builtin::negate,
        "+" => builtin::identity,
    }
    binary {
        "+" => builtin::add,
        "-" => builtin::subtract,
        "*" => builtin::multiply,
        "/" => builtin::divide,
        "%" => builtin::remainder,
        "^" => builtin::power,
    }
    functions {
        "sin"     => { arity: 1, func: builtin::sin },
        "cos"     => { arity: 1, func: builtin::cos },
        "tan"     => { arity: 1, func: builtin::tan },
        "asin"    => { arity: 1, func: builtin::asin },
        "acos"    => { arity: 1, func: builtin::acos },
        "atan"    => { arity: 1, func: builtin::atan },
        "sinh"    => { arity: 1, func: builtin::sinh },
        "cosh"    => { arity: 1, func: builtin::cosh },
        "tanh"    => { arity: 1, func: builtin::tanh },
        "exp"     => { arity: 1, func: builtin::exp },
        "ln"      => { arity: 1, func: builtin::ln },
        "log10"   => { arity: 1, func: builtin::log10 },
        "sqrt"    => { arity: 1, func: builtin::sqrt },
        "abs"     => { arity: 1, func: builtin::abs },
        "floor"   => { arity: 1, func: builtin::floor },
        "ceil"    => { arity: 1, func: builtin::ceil },
        "round"   => { arity: 1, func: builtin::round },
        "sign"    => { arity: 1, func: builtin::sign },
        "radians" => { arity: 1, func: builtin::radians },
        "degrees" => { arity: 1, func: builtin::degrees },
        "log"     => { arity: 2, func: builtin::log },
        "atan2"   => { arity: 2, func: builtin::atan2 },
        "min"     => { arity: 2, func: builtin::min },
        "max"     => { arity: 2, func: builtin::max },
    }
}

static STANDARD: LazyLock<Registry> = LazyLock::new(Registry::standard);

/// Maps operator symbols and function names to their implementations.
///
/// Unary and binary operators live in separate tables, so one symbol can mean
/// different things at different arities (`-x` versus `x - y`). A registry is
/// built once and only read afterwards; the translator takes it by reference.
///
/// # Example
/// ```
/// use shunt::interpreter::registry::Registry;
///
/// let registry = Registry::empty().with_binary("max", |a, b| Ok(a.max(b)))
///                                 .with_function("twice", 1, |args| Ok(2.0 * args[0]));
///
/// assert!(registry.binary("max").is_some());
/// assert!(registry.unary("max").is_none());
/// assert_eq!(registry.function("twice").map(|f| f.arity), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    unary:     HashMap<String, UnaryFn>,
    binary:    HashMap<String, BinaryFn>,
    functions: HashMap<String, FunctionDef>,
}

impl Registry {
    /// Creates a registry with no operators or functions.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the standard registry: unary `- +`, binary `+ - * / % ^`, and
    /// every function in [`BUILTIN_FUNCTIONS`].
    #[must_use]
    pub fn standard() -> Self {
        let unary = UNARY_OPERATORS.iter()
                                   .map(|(symbol, apply)| ((*symbol).to_string(), *apply))
                                   .collect();
        let binary = BINARY_OPERATORS.iter()
                                     .map(|(symbol, apply)| ((*symbol).to_string(), *apply))
                                     .collect();
        let functions = BUILTIN_TABLE.iter()
                                     .map(|(name, def)| ((*name).to_string(), *def))
                                     .collect();
        Self { unary,
               binary,
               functions }
    }

    /// Returns the process-wide standard registry.
    ///
    /// It is built on first use and never modified afterwards.
    #[must_use]
    pub fn shared() -> &'static Self {
        &STANDARD
    }

    /// Registers a unary operator, replacing any previous one with the same
    /// symbol.
    #[must_use]
    pub fn with_unary(mut self, symbol: impl Into<String>, apply: UnaryFn) -> Self {
        self.unary.insert(symbol.into(), apply);
        self
    }

    /// Registers a binary operator, replacing any previous one with the same
    /// symbol.
    #[must_use]
    pub fn with_binary(mut self, symbol: impl Into<String>, apply: BinaryFn) -> Self {
        self.binary.insert(symbol.into(), apply);
        self
    }

    /// Registers a function taking exactly `arity` arguments, replacing any
    /// previous one with the same name.
    #[must_use]
    pub fn with_function(mut self, name: impl Into<String>, arity: usize, apply: FunctionFn) -> Self {
        self.functions.insert(name.into(), FunctionDef { arity, apply });
        self
    }

    /// Looks up a unary operator.
    #[must_use]
    pub fn unary(&self, symbol: &str) -> Option<UnaryFn> {
        self.unary.get(symbol).copied()
    }

    /// Looks up a binary operator.
    #[must_use]
    pub fn binary(&self, symbol: &str) -> Option<BinaryFn> {
        self.binary.get(symbol).copied()
    }

    /// Looks up a function.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<FunctionDef> {
        self.functions.get(name).copied()
    }
}
