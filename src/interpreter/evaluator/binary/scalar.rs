use std::{io::Write, rc::Rc};

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates an arithmetic operation.
    ///
    /// `+` adds two numbers or concatenates two strings; every other
    /// combination is a fault. `-`, `*` and `/` take numbers only. Division
    /// follows IEEE-754, so dividing by zero yields an infinity or `NaN`
    /// rather than a fault.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul` or `Div`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use prism::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let joined = Interpreter::<Vec<u8>>::eval_scalar_op(BinaryOperator::Add,
    ///                                                     &Value::from("foo"),
    ///                                                     &Value::from("bar"),
    ///                                                     1).unwrap();
    /// assert_eq!(joined, Value::from("foobar"));
    ///
    /// let mixed = Interpreter::<Vec<u8>>::eval_scalar_op(BinaryOperator::Add,
    ///                                                    &Value::from("a"),
    ///                                                    &Value::Number(1.0),
    ///                                                    1);
    /// assert!(mixed.is_err());
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        if op == Add {
            return match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::String(a), Value::String(b)) => Ok(Value::String(concat(a, b))),
                _ => Err(RuntimeError::OperandsMustBeNumbersOrStrings { line }),
            };
        }

        let (Some(a), Some(b)) = (left.as_number(), right.as_number()) else {
            return Err(RuntimeError::OperandsMustBeNumbers { line });
        };

        Ok(Value::Number(match op {
                             Sub => a - b,
                             Mul => a * b,
                             Div => a / b,
                             _ => unreachable!("eval_scalar_op used with non arithmetic operator"),
                         }))
    }
}

/// Builds a fresh string holding `a` followed by `b`. Neither input changes.
fn concat(a: &str, b: &str) -> Rc<str> {
    let mut joined = String::with_capacity(a.len() + b.len());
    joined.push_str(a);
    joined.push_str(b);
    Rc::from(joined)
}
