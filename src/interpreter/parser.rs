/// Entry points of the parser.
///
/// Contains `parse`, which turns a whole token sequence into statements, and
/// the expression entry point with its assignment rule.
pub mod core;

/// Statement and declaration parsing.
///
/// Handles `var`, `print`, `if`, `while` and expression statements, and the
/// declaration boundary where syntax errors are caught and the parser
/// resynchronizes.
pub mod statement;

/// Block parsing.
///
/// Parses `{ ... }` sequences of declarations.
pub mod block;

/// Binary operator parsing.
///
/// Implements the left-associative precedence levels from logical `or` down
/// to multiplication.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix operators, literals, variable references and parenthesized
/// groups.
pub mod unary;

/// Parser utilities.
///
/// Provides the token cursor shared by all parsing functions.
pub mod utils;

pub use self::core::parse;
