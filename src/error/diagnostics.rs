use std::fmt;

use tracing::debug;

use crate::error::{RuntimeError, SyntaxError};

/// Exit status for a clean run.
pub const EXIT_OK: u8 = 0;
/// Exit status after a scanning or parsing error.
pub const EXIT_SYNTAX_ERROR: u8 = 65;
/// Exit status after an unrecovered runtime fault.
pub const EXIT_RUNTIME_ERROR: u8 = 70;

/// One reported problem.
#[derive(Debug)]
pub enum Diagnostic {
    /// Reported by the lexer or parser.
    Syntax(SyntaxError),
    /// Reported by the evaluator.
    Runtime(RuntimeError),
}

/// Formats the diagnostic the way it is written to the error stream.
///
/// Syntax errors render as `[line N] Error...: message`, runtime faults as
/// `message` followed by `[line N]` on the next line.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(error) => write!(f, "{error}"),
            Self::Runtime(error) => write!(f, "{error}\n[line {}]", error.line()),
        }
    }
}

/// Reports gathered while scanning, parsing and running one unit of source.
///
/// A unit is a script file or a single REPL line; create a fresh value for
/// each so that errors never leak into unrelated input.
#[derive(Debug, Default)]
pub struct Diagnostics {
    reports:           Vec<Diagnostic>,
    had_error:         bool,
    had_runtime_error: bool,
}

impl Diagnostics {
    /// Creates an empty set of diagnostics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a scanning or parsing error and sets the sticky error flag.
    pub fn report_syntax(&mut self, error: SyntaxError) {
        debug!(%error, "syntax error");
        self.had_error = true;
        self.reports.push(Diagnostic::Syntax(error));
    }

    /// Records a runtime fault and sets the sticky runtime-error flag.
    pub fn report_runtime(&mut self, error: RuntimeError) {
        debug!(%error, line = error.line(), "runtime error");
        self.had_runtime_error = true;
        self.reports.push(Diagnostic::Runtime(error));
    }

    /// Whether scanning or parsing failed. A program with this flag set must
    /// not be evaluated.
    #[must_use]
    pub const fn had_error(&self) -> bool {
        self.had_error
    }

    /// Whether evaluation was aborted by a runtime fault.
    #[must_use]
    pub const fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Whether nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Iterates over reports in the order they were made.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.reports.iter()
    }

    /// Process exit status for a script run: 65 after a syntax error, 70
    /// after a runtime fault, 0 otherwise.
    ///
    /// # Example
    /// ```
    /// use prism::error::{Diagnostics, RuntimeError};
    ///
    /// let mut diagnostics = Diagnostics::new();
    /// assert_eq!(diagnostics.exit_code(), 0);
    ///
    /// diagnostics.report_runtime(RuntimeError::OperandsMustBeNumbers { line: 1 });
    /// assert_eq!(diagnostics.exit_code(), 70);
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.had_error {
            EXIT_SYNTAX_ERROR
        } else if self.had_runtime_error {
            EXIT_RUNTIME_ERROR
        } else {
            EXIT_OK
        }
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type IntoIter = std::slice::Iter<'a, Diagnostic>;
    type Item = &'a Diagnostic;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.iter()
    }
}
