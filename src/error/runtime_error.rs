use std::io;

use thiserror::Error;

/// Represents all faults that can occur while evaluating a program.
///
/// The display form is the bare message; [`Diagnostic`](super::Diagnostic)
/// appends the line when reporting.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Unary `-` applied to a non-number.
    #[error("Operand must be a number.")]
    OperandMustBeNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic or comparison with a non-number operand.
    #[error("Operands must be numbers.")]
    OperandsMustBeNumbers {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `+` applied to anything but two numbers or two strings.
    #[error("Operands must be two numbers or two strings.")]
    OperandsMustBeNumbersOrStrings {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Read of or assignment to a name no enclosing scope defines.
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The output sink rejected a `print`.
    #[error("Could not write output: {source}")]
    Output {
        /// The underlying I/O failure.
        source: io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl RuntimeError {
    /// The source line the fault points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::OperandMustBeNumber { line }
            | Self::OperandsMustBeNumbers { line }
            | Self::OperandsMustBeNumbersOrStrings { line }
            | Self::UndefinedVariable { line, .. }
            | Self::Output { line, .. } => *line,
        }
    }
}
