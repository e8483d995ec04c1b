use std::{io::Write, mem, rc::Rc};

use tracing::trace;

use crate::{
    ast::Stmt,
    interpreter::{
        environment::{Environment, SharedEnvironment},
        evaluator::core::{EvalResult, Interpreter},
    },
};

impl<W: Write> Interpreter<W> {
    /// Runs a block's statements in a fresh child scope.
    ///
    /// The previous scope is restored before returning, whether the block
    /// completes or a statement inside it faults. Declarations made inside the
    /// block are discarded with the child scope; assignments to outer
    /// variables persist.
    ///
    /// # Parameters
    /// - `statements`: The block body.
    ///
    /// # Returns
    /// `Ok(())`, or the first fault raised inside the block.
    ///
    /// # Example
    /// ```
    /// use prism::{
    ///     error::Diagnostics,
    ///     interpreter::{evaluator::core::Interpreter, lexer::scan, parser::parse, value::Value},
    /// };
    ///
    /// let mut diagnostics = Diagnostics::new();
    /// let tokens = scan("var a = 1; { var b = 2; a = a + b; }", &mut diagnostics);
    /// let program = parse(&tokens, &mut diagnostics);
    ///
    /// let mut interpreter = Interpreter::new(Vec::new());
    /// interpreter.interpret(&program, &mut diagnostics);
    ///
    /// assert_eq!(interpreter.variable("a"), Some(Value::Number(3.0)));
    /// assert_eq!(interpreter.variable("b"), None);
    /// ```
    pub fn execute_block(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        let child = Environment::with_enclosing(Rc::clone(&self.environment)).shared();
        let previous = self.push_scope(child);

        let result = statements.iter()
                               .try_for_each(|statement| self.execute(statement));

        self.pop_scope(previous);
        result
    }

    /// Makes `scope` current and hands back the scope it replaced.
    fn push_scope(&mut self, scope: SharedEnvironment) -> SharedEnvironment {
        let previous = mem::replace(&mut self.environment, scope);
        trace!(depth = self.scope_depth(), "push scope");
        previous
    }

    /// Reinstates a scope returned by [`Self::push_scope`].
    fn pop_scope(&mut self, previous: SharedEnvironment) {
        trace!(depth = self.scope_depth(), "pop scope");
        self.environment = previous;
    }

    /// Number of scopes between the current one and the globals, inclusive.
    #[must_use]
    pub fn scope_depth(&self) -> usize {
        self.environment.borrow().depth()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        error::Diagnostics,
        interpreter::{lexer::scan, parser::parse, value::Value},
    };

    fn run(interpreter: &mut Interpreter<Vec<u8>>, source: &str) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan(source, &mut diagnostics);
        let program = parse(&tokens, &mut diagnostics);
        interpreter.interpret(&program, &mut diagnostics);
        diagnostics
    }

    fn printed(interpreter: Interpreter<Vec<u8>>) -> String {
        String::from_utf8(interpreter.into_output()).unwrap()
    }

    #[test]
    fn shadowing_is_undone_at_block_exit() {
        let mut interpreter = Interpreter::new(Vec::new());
        run(&mut interpreter,
            "var a = \"global\"; { var a = \"local\"; print a; } print a;");

        assert_eq!(printed(interpreter), "local\nglobal\n");
    }

    #[test]
    fn nested_blocks_see_every_enclosing_scope() {
        let mut interpreter = Interpreter::new(Vec::new());
        run(&mut interpreter,
            "var a = 1; { var b = 2; { var c = 3; print a + b + c; } }");

        assert_eq!(printed(interpreter), "6\n");
    }

    #[test]
    fn scope_is_restored_after_a_fault() {
        let mut interpreter = Interpreter::new(Vec::new());
        let diagnostics = run(&mut interpreter, "var a = 1; { var a = 2; { print -nil; } }");

        assert!(diagnostics.had_runtime_error());
        assert_eq!(interpreter.scope_depth(), 1);
        assert_eq!(interpreter.variable("a"), Some(Value::Number(1.0)));
    }

    #[test]
    fn loop_bodies_get_a_fresh_scope_each_iteration() {
        let mut interpreter = Interpreter::new(Vec::new());
        run(&mut interpreter,
            "var i = 0; while (i < 2) { var seen; print seen; seen = i; i = i + 1; }");

        assert_eq!(printed(interpreter), "nil\nnil\n");
    }

    #[test]
    fn empty_block_is_a_no_op() {
        let mut interpreter = Interpreter::new(Vec::new());
        let diagnostics = run(&mut interpreter, "{}");

        assert!(diagnostics.is_empty());
        assert_eq!(interpreter.scope_depth(), 1);
    }
}
