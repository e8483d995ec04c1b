use std::io::Write;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` accept any operands: values of different types are never
    /// equal, and numbers compare with IEEE-754 rules. The relational
    /// operators need two numbers.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use prism::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let less = Interpreter::<Vec<u8>>::eval_comparison(BinaryOperator::Less,
    ///                                                    &Value::Number(3.0),
    ///                                                    &Value::Number(5.0),
    ///                                                    1);
    /// assert_eq!(less.unwrap(), Value::Bool(true));
    ///
    /// let equal = Interpreter::<Vec<u8>>::eval_comparison(BinaryOperator::Equal,
    ///                                                     &Value::Nil,
    ///                                                     &Value::Bool(false),
    ///                                                     1);
    /// assert_eq!(equal.unwrap(), Value::Bool(false));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        match op {
            Equal => return Ok(Value::Bool(left == right)),
            NotEqual => return Ok(Value::Bool(left != right)),
            _ => {},
        }

        let (Some(a), Some(b)) = (left.as_number(), right.as_number()) else {
            return Err(RuntimeError::OperandsMustBeNumbers { line });
        };

        Ok(Value::Bool(match op {
                           Greater => a > b,
                           GreaterEqual => a >= b,
                           Less => a < b,
                           LessEqual => a <= b,
                           _ => unreachable!("eval_comparison used with non comparison operator"),
                       }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Eval = Interpreter<Vec<u8>>;

    fn compare(op: BinaryOperator, left: &Value, right: &Value) -> bool {
        match Eval::eval_comparison(op, left, right, 1).unwrap() {
            Value::Bool(b) => b,
            other => panic!("expected a boolean, found {other}"),
        }
    }

    #[test]
    fn relational_operators() {
        let one = Value::Number(1.0);
        let two = Value::Number(2.0);

        assert!(compare(BinaryOperator::Less, &one, &two));
        assert!(compare(BinaryOperator::LessEqual, &one, &one));
        assert!(!compare(BinaryOperator::Greater, &one, &two));
        assert!(compare(BinaryOperator::GreaterEqual, &two, &one));
    }

    #[test]
    fn equality_across_types() {
        assert!(compare(BinaryOperator::Equal, &Value::Nil, &Value::Nil));
        assert!(compare(BinaryOperator::NotEqual, &Value::Number(0.0), &Value::from("0")));
        assert!(compare(BinaryOperator::Equal, &Value::from("a"), &Value::from("a")));
        assert!(!compare(BinaryOperator::Equal, &Value::Nil, &Value::Bool(false)));
    }

    #[test]
    fn nan_is_unequal_to_itself() {
        let nan = Value::Number(f64::NAN);

        assert!(!compare(BinaryOperator::Equal, &nan, &nan));
        assert!(compare(BinaryOperator::NotEqual, &nan, &nan));
        assert!(!compare(BinaryOperator::Less, &nan, &Value::Number(1.0)));
    }

    #[test]
    fn relational_operators_need_numbers() {
        let error = Eval::eval_comparison(BinaryOperator::Less,
                                          &Value::from("a"),
                                          &Value::from("b"),
                                          3).unwrap_err();

        assert_eq!(error.to_string(), "Operands must be numbers.");
        assert_eq!(error.line(), 3);
    }
}
