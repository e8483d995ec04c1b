use std::io::{self, Write};

use tracing::{debug, trace};

use crate::{
    ast::{Expr, Stmt},
    error::{Diagnostics, RuntimeError},
    interpreter::{
        environment::{Environment, SharedEnvironment},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the fault.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes statements and evaluates expressions.
///
/// The interpreter owns the current scope chain and the sink that `print`
/// writes to. Globals persist across calls to [`Interpreter::interpret`], so
/// one interpreter can serve a whole REPL session.
///
/// ## Usage
///
/// Pass any [`Write`] implementation as the output: standard output for the
/// command line, a `Vec<u8>` to capture what a program prints.
pub struct Interpreter<W: Write> {
    pub(super) environment: SharedEnvironment,
    pub(super) output:      W,
}

impl Interpreter<io::Stdout> {
    /// Creates an interpreter printing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter with an empty global scope.
    ///
    /// # Example
    /// ```
    /// use prism::interpreter::evaluator::core::Interpreter;
    ///
    /// let interpreter = Interpreter::new(Vec::new());
    /// assert_eq!(interpreter.variable("x"), None);
    /// ```
    #[must_use]
    pub fn new(output: W) -> Self {
        Self { environment: Environment::new().shared(),
               output }
    }

    /// The sink `print` writes to.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the interpreter and returns its sink.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads a variable as seen from the current scope, walking outward to
    /// the globals.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<Value> {
        self.environment.borrow().lookup(name)
    }

    /// Runs a program.
    ///
    /// Statements run in order. The first runtime fault is reported into
    /// `diagnostics` and the rest of the program is skipped; effects of the
    /// statements that already ran, including output, remain.
    ///
    /// # Parameters
    /// - `statements`: The parsed program.
    /// - `diagnostics`: Receives the fault, if any.
    ///
    /// # Example
    /// ```
    /// use prism::{
    ///     error::Diagnostics,
    ///     interpreter::{evaluator::core::Interpreter, lexer::scan, parser::parse},
    /// };
    ///
    /// let mut diagnostics = Diagnostics::new();
    /// let tokens = scan("print 1; print -nil; print 2;", &mut diagnostics);
    /// let program = parse(&tokens, &mut diagnostics);
    ///
    /// let mut interpreter = Interpreter::new(Vec::new());
    /// interpreter.interpret(&program, &mut diagnostics);
    ///
    /// assert_eq!(interpreter.output(), b"1\n");
    /// assert!(diagnostics.had_runtime_error());
    /// ```
    pub fn interpret(&mut self, statements: &[Stmt], diagnostics: &mut Diagnostics) {
        debug!(statements = statements.len(), "interpreting program");
        for statement in statements {
            if let Err(error) = self.execute(statement) {
                diagnostics.report_runtime(error);
                return;
            }
        }
    }

    /// Executes a single statement.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Returns
    /// `Ok(())`, or the first fault raised while executing it.
    pub fn execute(&mut self, statement: &Stmt) -> EvalResult<()> {
        match statement {
            Stmt::Expression { expr } => {
                self.evaluate(expr)?;
                Ok(())
            },
            Stmt::Print { expr, line } => {
                let value = self.evaluate(expr)?;
                self.print(&value, *line)
            },
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                trace!(name = %name.lexeme, %value, "define");
                self.environment.borrow_mut().define(&name.lexeme, value);
                Ok(())
            },
            Stmt::Block { statements } => self.execute_block(statements),
            Stmt::If { condition,
                       then_branch,
                       else_branch, } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            },
            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    self.execute(body)?;
                }
                Ok(())
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// evaluated left to right.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed value, or the fault that stopped evaluation.
    ///
    /// # Example
    /// ```
    /// use prism::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let mut interpreter = Interpreter::new(Vec::new());
    /// let sum = Expr::Binary { left:  Box::new(Expr::literal("a")),
    ///                          op:    BinaryOperator::Add,
    ///                          right: Box::new(Expr::literal("b")),
    ///                          line:  1, };
    ///
    /// assert_eq!(interpreter.evaluate(&sum).unwrap(), Value::from("ab"));
    /// ```
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(Value::from(value)),
            Expr::Grouping { inner } => self.evaluate(inner),
            Expr::Variable { name } => self.environment.borrow().get(name),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.environment
                    .borrow_mut()
                    .assign(name, value.clone())?;
                Ok(value)
            },
            Expr::Unary { op, operand, line } => {
                let operand = self.evaluate(operand)?;
                Self::eval_unary(*op, &operand, *line)
            },
            Expr::Binary { left,
                           op,
                           right,
                           line, } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::Logical { left, op, right, .. } => self.eval_logical(left, *op, right),
        }
    }

    fn print(&mut self, value: &Value, line: usize) -> EvalResult<()> {
        writeln!(self.output, "{value}").map_err(|source| RuntimeError::Output { source, line })?;
        self.output
            .flush()
            .map_err(|source| RuntimeError::Output { source, line })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::{lexer::scan, parser::parse};

    fn run(source: &str) -> (String, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan(source, &mut diagnostics);
        let program = parse(&tokens, &mut diagnostics);
        assert!(!diagnostics.had_error(), "{source}");

        let mut interpreter = Interpreter::new(Vec::new());
        interpreter.interpret(&program, &mut diagnostics);
        let output = String::from_utf8(interpreter.into_output()).unwrap();
        (output, diagnostics)
    }

    fn output(source: &str) -> String {
        let (output, diagnostics) = run(source);
        assert!(diagnostics.is_empty(), "{source}");
        output
    }

    fn fault(source: &str) -> String {
        let (_, diagnostics) = run(source);
        let rendered: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
        assert_eq!(rendered.len(), 1, "{source}");
        rendered[0].clone()
    }

    #[test]
    fn arithmetic_follows_precedence() {
        assert_eq!(output("print 1 + 2 * 3;"), "7\n");
        assert_eq!(output("print (1 + 2) * 3;"), "9\n");
        assert_eq!(output("print 10 - 4 - 3;"), "3\n");
        assert_eq!(output("print 7 / 2;"), "3.5\n");
    }

    #[test]
    fn uninitialized_variables_are_nil() {
        assert_eq!(output("var a; print a;"), "nil\n");
    }

    #[test]
    fn redeclaring_a_global_replaces_it() {
        assert_eq!(output("var a = 1; var a = \"two\"; print a;"), "two\n");
    }

    #[test]
    fn assignment_yields_the_assigned_value() {
        assert_eq!(output("var a; var b; a = b = 3; print a; print b;"), "3\n3\n");
    }

    #[test]
    fn if_else_picks_a_branch() {
        assert_eq!(output("if (nil) print 1; else print 2;"), "2\n");
        assert_eq!(output("if (0) print 1; else print 2;"), "1\n");
        assert_eq!(output("if (false) print 1;"), "");
    }

    #[test]
    fn while_counts_up() {
        assert_eq!(output("var i = 0; while (i < 3) { print i; i = i + 1; }"),
                   "0\n1\n2\n");
        assert_eq!(output("while (false) print 1;"), "");
    }

    #[test]
    fn faults_stop_the_program_but_keep_output() {
        let (output, diagnostics) = run("print 1;\nprint -\"x\";\nprint 2;");

        assert_eq!(output, "1\n");
        assert!(diagnostics.had_runtime_error());
        assert_eq!(diagnostics.exit_code(), 70);
    }

    #[test]
    fn undefined_variables_fault() {
        assert_eq!(fault("print y;"), "Undefined variable 'y'.\n[line 1]");
        assert_eq!(fault("\ny = 1;"), "Undefined variable 'y'.\n[line 2]");
    }

    #[test]
    fn failed_assignment_does_not_define() {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan("z = 1;", &mut diagnostics);
        let program = parse(&tokens, &mut diagnostics);
        let mut interpreter = Interpreter::new(Vec::new());
        interpreter.interpret(&program, &mut diagnostics);

        assert!(diagnostics.had_runtime_error());
        assert_eq!(interpreter.variable("z"), None);
    }

    #[test]
    fn globals_survive_between_runs() {
        let mut interpreter = Interpreter::new(Vec::new());
        for line in ["var a = 1;", "print -true;", "a = a + 1;", "print a;"] {
            let mut diagnostics = Diagnostics::new();
            let tokens = scan(line, &mut diagnostics);
            let program = parse(&tokens, &mut diagnostics);
            interpreter.interpret(&program, &mut diagnostics);
        }

        assert_eq!(interpreter.output(), b"2\n");
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn output_failures_are_runtime_faults() {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan("\nprint 1;", &mut diagnostics);
        let program = parse(&tokens, &mut diagnostics);
        let mut interpreter = Interpreter::new(BrokenSink);
        interpreter.interpret(&program, &mut diagnostics);

        let error = diagnostics.iter().next().map(ToString::to_string);
        assert_eq!(error.as_deref(), Some("Could not write output: closed\n[line 2]"));
    }
}
