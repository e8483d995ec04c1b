/// Scanning and parsing errors.
///
/// Defines the errors detected before evaluation: unexpected characters,
/// unterminated strings, missing tokens and invalid assignment targets.
pub mod syntax_error;
/// Runtime errors.
///
/// Contains all faults that can be raised during evaluation, such as operand
/// type mismatches and references to undefined variables.
pub mod runtime_error;
/// Collected reports for one compilation unit.
///
/// Replaces process-wide error flags with an explicit object that the lexer,
/// parser and evaluator report into and the driver inspects afterwards.
pub mod diagnostics;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use runtime_error::RuntimeError;
pub use syntax_error::{Location, SyntaxError};
