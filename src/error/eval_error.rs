#[derive(Debug, Clone, PartialEq, thiserror::Error)]
/// Represents all errors that can occur while evaluating an operation
/// sequence.
pub enum EvalError {
    /// An operation needed more operands than the stack held.
    #[error("Stack underflow: '{operation}' needs {needed} operand(s) but only {available} available.")]
    StackUnderflow {
        /// The symbol or name of the failing operation.
        operation: String,
        /// Operands required.
        needed:    usize,
        /// Operands present.
        available: usize,
    },
    /// Division or remainder by exact zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// A function argument lies outside the function's domain.
    #[error("Invalid argument to '{name}': {details}.")]
    InvalidArgument {
        /// The function or operator name.
        name:    String,
        /// What was wrong with the argument.
        details: String,
    },
    /// Evaluation finished with a stack size other than one.
    #[error("Malformed expression: evaluation left {remaining} value(s) on the stack.")]
    MalformedExpression {
        /// The number of values left.
        remaining: usize,
    },
}
