//! # prism
//!
//! prism is a tree-walking interpreter for a small dynamically typed scripting
//! language written in Rust. It scans, parses and evaluates programs built
//! from numbers, strings, booleans, `nil`, global and block-scoped variables,
//! `print`, `if`/`else`, `while`, and short-circuiting `and`/`or`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use tracing::debug;

use crate::{
    error::Diagnostics,
    interpreter::{evaluator::core::Interpreter, lexer::scan, parser::parse},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums and the operator types
/// that represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Keeps the operator line or identifier token on nodes that can fault at
///   runtime, for error reporting.
pub mod ast;
/// Provides error types and diagnostics for scanning, parsing and evaluation.
///
/// This module defines every error that can be raised while lexing, parsing
/// or evaluating code, and the [`Diagnostics`] collector that records them
/// for one unit of source.
///
/// # Responsibilities
/// - Defines error enums for all failure modes, each carrying a line number.
/// - Formats reports exactly as they are written to the error stream.
/// - Maps the outcome of a run to a process exit status.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together tokens, lexing, parsing, scopes, values and
/// evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, environment and
///   evaluator.
/// - Provides entry points for each phase.
pub mod interpreter;
/// Developer views of a program.
///
/// Read-only renderings of the token stream and the syntax tree. They never
/// affect how a program runs.
pub mod visualize;

/// Scans, parses and runs one unit of source.
///
/// Syntax errors are all collected first; if there are any, nothing is
/// evaluated. Otherwise the program runs in `interpreter`, whose globals carry
/// over to the next call.
///
/// # Parameters
/// - `source`: The program text.
/// - `interpreter`: The interpreter to run it in.
///
/// # Returns
/// Everything reported while handling `source`.
///
/// # Examples
/// ```
/// use prism::{interpreter::evaluator::core::Interpreter, run};
///
/// let mut interpreter = Interpreter::new(Vec::new());
///
/// let diagnostics = run("var greeting = \"hi\";", &mut interpreter);
/// assert!(diagnostics.is_empty());
///
/// let diagnostics = run("print greeting + \" there\";", &mut interpreter);
/// assert!(diagnostics.is_empty());
/// assert_eq!(interpreter.output(), b"hi there\n");
///
/// // Syntax errors stop the whole unit before anything runs.
/// let diagnostics = run("print 1; print 2 +;", &mut interpreter);
/// assert_eq!(diagnostics.exit_code(), 65);
/// assert_eq!(interpreter.output(), b"hi there\n");
/// ```
pub fn run<W: Write>(source: &str, interpreter: &mut Interpreter<W>) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();

    let tokens = scan(source, &mut diagnostics);
    let statements = parse(&tokens, &mut diagnostics);

    if diagnostics.had_error() {
        debug!("skipping evaluation after syntax errors");
        return diagnostics;
    }

    interpreter.interpret(&statements, &mut diagnostics);
    diagnostics
}

/// Runs `source` in a fresh interpreter and captures what it prints.
///
/// # Examples
/// ```
/// use prism::run_capturing;
///
/// let (output, diagnostics) = run_capturing("var a = 1; { var a = 2; print a; } print a;");
/// assert_eq!(output, "2\n1\n");
/// assert!(diagnostics.is_empty());
///
/// let (output, diagnostics) = run_capturing("print 1; print -\"x\";");
/// assert_eq!(output, "1\n");
/// assert_eq!(diagnostics.exit_code(), 70);
/// ```
#[must_use]
pub fn run_capturing(source: &str) -> (String, Diagnostics) {
    let mut interpreter = Interpreter::new(Vec::new());
    let diagnostics = run(source, &mut interpreter);
    let output = String::from_utf8_lossy(&interpreter.into_output()).into_owned();
    (output, diagnostics)
}
