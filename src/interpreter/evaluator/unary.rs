use std::io::Write;

use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation. Anything but a number is a fault.
    /// - `Not`: logical negation of the operand's truthiness. Never fails.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use prism::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// type Eval = Interpreter<Vec<u8>>;
    ///
    /// let v = Eval::eval_unary(UnaryOperator::Negate, &Value::Number(5.0), 1).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// let v = Eval::eval_unary(UnaryOperator::Not, &Value::Nil, 1).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => value.as_number()
                                          .map(|n| Value::Number(-n))
                                          .ok_or(RuntimeError::OperandMustBeNumber { line }),
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
        }
    }
}
