use std::fmt;

use crate::interpreter::evaluator::{EvalResult, Stack};

/// Implementation of a unary operator.
pub type UnaryFn = fn(f64) -> EvalResult<f64>;
/// Implementation of a binary operator, called as `(left, right)`.
pub type BinaryFn = fn(f64, f64) -> EvalResult<f64>;
/// Implementation of a function, called with its arguments in source order.
pub type FunctionFn = fn(&[f64]) -> EvalResult<f64>;

/// One executable step of a translated expression.
///
/// Operations hold no state beyond their identity, so a translated sequence
/// can be evaluated any number of times.
#[derive(Debug, Clone)]
pub enum Operation {
    /// Pushes a literal.
    Push(f64),
    /// Pops one operand and pushes `apply(operand)`.
    Unary {
        /// The operator symbol, for diagnostics.
        symbol: String,
        /// The operator implementation.
        apply:  UnaryFn,
    },
    /// Pops the right then the left operand and pushes `apply(left, right)`.
    Binary {
        /// The operator symbol, for diagnostics.
        symbol: String,
        /// The operator implementation.
        apply:  BinaryFn,
    },
    /// Pops `arity` arguments and pushes the function's result.
    Call {
        /// The function name, for diagnostics.
        name:  String,
        /// Number of arguments taken from the stack.
        arity: usize,
        /// The function implementation.
        apply: FunctionFn,
    },
}

impl Operation {
    /// Runs this operation against `stack`.
    ///
    /// # Errors
    /// Returns [`EvalError::StackUnderflow`](crate::error::EvalError) if the
    /// stack holds fewer operands than the operation needs, and propagates
    /// any error raised by the operator or function itself.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::{evaluator::Stack, operation::Operation, registry::Registry};
    ///
    /// let registry = Registry::standard();
    /// let minus = Operation::Binary { symbol: "-".into(),
    ///                                 apply:  registry.binary("-").unwrap(), };
    ///
    /// let mut stack = Stack::new();
    /// Operation::Push(7.0).apply(&mut stack).unwrap();
    /// Operation::Push(2.0).apply(&mut stack).unwrap();
    /// minus.apply(&mut stack).unwrap();
    /// assert_eq!(stack.values(), [5.0]);
    /// ```
    pub fn apply(&self, stack: &mut Stack) -> EvalResult<()> {
        let value = match self {
            Self::Push(value) => *value,
            Self::Unary { symbol, apply } => {
                let operands = stack.pop_operands(symbol, 1)?;
                apply(operands[0])?
            },
            Self::Binary { symbol, apply } => {
                let operands = stack.pop_operands(symbol, 2)?;
                apply(operands[0], operands[1])?
            },
            Self::Call { name, arity, apply } => {
                let arguments = stack.pop_operands(name, *arity)?;
                apply(arguments.as_slice())?
            },
        };
        stack.push(value);
        Ok(())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push(value) => write!(f, "push {value}"),
            Self::Unary { symbol, .. } => write!(f, "unary {symbol}"),
            Self::Binary { symbol, .. } => write!(f, "binary {symbol}"),
            Self::Call { name, arity, .. } => write!(f, "call {name}/{arity}"),
        }
    }
}
