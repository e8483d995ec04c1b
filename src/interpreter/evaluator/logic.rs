use std::io::Write;

use crate::{
    ast::{Expr, LogicalOperator},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates `and` / `or` with short-circuiting.
    ///
    /// The left operand is always evaluated. `or` returns it when it is
    /// truthy and `and` returns it when it is falsy; otherwise the right
    /// operand is evaluated and returned. The result is the operand value
    /// itself, never a coerced boolean.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The logical operator.
    /// - `right`: Right operand expression, evaluated only when needed.
    ///
    /// # Returns
    /// The value of whichever operand decided the result.
    ///
    /// # Example
    /// ```
    /// use prism::{
    ///     ast::{Expr, LiteralValue, LogicalOperator},
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let mut interpreter = Interpreter::new(Vec::new());
    /// let nil = Expr::Literal { value: LiteralValue::Nil };
    /// let value = interpreter.eval_logical(&nil,
    ///                                      LogicalOperator::Or,
    ///                                      &Expr::literal("yes"))
    ///                        .unwrap();
    ///
    /// assert_eq!(value, Value::from("yes"));
    /// ```
    pub fn eval_logical(&mut self,
                        left: &Expr,
                        op: LogicalOperator,
                        right: &Expr)
                        -> EvalResult<Value> {
        let left = self.evaluate(left)?;

        let decided = match op {
            LogicalOperator::Or => left.is_truthy(),
            LogicalOperator::And => !left.is_truthy(),
        };

        if decided { Ok(left) } else { self.evaluate(right) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{BinaryOperator, LiteralValue},
        interpreter::token::{Token, TokenKind},
    };

    fn nil() -> Expr {
        Expr::Literal { value: LiteralValue::Nil }
    }

    fn undefined() -> Expr {
        Expr::Variable { name: Token::new(TokenKind::Identifier, "missing", 1) }
    }

    #[test]
    fn returns_operand_values() {
        let mut interpreter = Interpreter::new(Vec::new());

        let or = interpreter.eval_logical(&nil(), LogicalOperator::Or, &Expr::literal(2.0));
        assert_eq!(or.unwrap(), Value::Number(2.0));

        let and = interpreter.eval_logical(&Expr::literal(1.0), LogicalOperator::And, &Expr::literal("x"));
        assert_eq!(and.unwrap(), Value::from("x"));

        let and = interpreter.eval_logical(&Expr::literal(false), LogicalOperator::And, &Expr::literal(1.0));
        assert_eq!(and.unwrap(), Value::Bool(false));
    }

    #[test]
    fn right_operand_is_skipped_when_decided() {
        let mut interpreter = Interpreter::new(Vec::new());

        let or = interpreter.eval_logical(&Expr::literal(true), LogicalOperator::Or, &undefined());
        assert_eq!(or.unwrap(), Value::Bool(true));

        let and = interpreter.eval_logical(&nil(), LogicalOperator::And, &undefined());
        assert_eq!(and.unwrap(), Value::Nil);

        let faulting = Expr::Binary { left:  Box::new(Expr::literal(1.0)),
                                      op:    BinaryOperator::Add,
                                      right: Box::new(nil()),
                                      line:  1, };
        let or = interpreter.eval_logical(&Expr::literal(0.0), LogicalOperator::Or, &faulting);
        assert_eq!(or.unwrap(), Value::Number(0.0));
    }

    #[test]
    fn right_operand_runs_when_needed() {
        let mut interpreter = Interpreter::new(Vec::new());

        assert!(interpreter.eval_logical(&Expr::literal(false), LogicalOperator::Or, &undefined())
                           .is_err());
    }
}
