use crate::{error::EvalError, interpreter::operation::Operation};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// The operand stack an operation sequence runs against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stack {
    values: Vec<f64>,
}

impl Stack {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Pushes a value on top.
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Removes the top `count` values and returns them bottom first, so for a
    /// binary operator the result is `[left, right]`.
    ///
    /// # Errors
    /// Returns [`EvalError::StackUnderflow`] naming `operation` when fewer than
    /// `count` values are present. The stack is left untouched in that case.
    pub fn pop_operands(&mut self, operation: &str, count: usize) -> EvalResult<Vec<f64>> {
        let available = self.values.len();
        if available < count {
            return Err(EvalError::StackUnderflow { operation: operation.to_string(),
                                                   needed: count,
                                                   available });
        }
        Ok(self.values.split_off(available - count))
    }

    /// The values currently on the stack, bottom first.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Runs an RPN operation sequence and returns the single remaining value.
///
/// Operations are applied left to right against a fresh [`Stack`].
///
/// # Errors
/// - Any error raised by an operation, such as
///   [`EvalError::StackUnderflow`] or [`EvalError::DivisionByZero`].
/// - [`EvalError::MalformedExpression`] if the sequence leaves anything other
///   than exactly one value.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::evaluate, operation::Operation};
///
/// assert_eq!(evaluate(&[Operation::Push(4.0)]).unwrap(), 4.0);
/// assert!(evaluate(&[]).is_err());
/// ```
pub fn evaluate(operations: &[Operation]) -> EvalResult<f64> {
    let mut stack = Stack::new();

    for operation in operations {
        operation.apply(&mut stack)?;
        tracing::trace!(%operation, depth = stack.len(), "applied");
    }

    match stack.values() {
        [value] => {
            tracing::debug!(result = value, "evaluated expression");
            Ok(*value)
        },
        values => Err(EvalError::MalformedExpression { remaining: values.len() }),
    }
}
