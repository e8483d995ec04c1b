/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, comparison and equality. Both
/// operands are always evaluated, left first.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Short-circuiting `and` / `or`.
pub mod logic;

/// Core evaluation logic and interpreter state.
///
/// Contains the [`Interpreter`](core::Interpreter), statement execution and
/// expression dispatch.
pub mod core;

/// Scope handling for blocks.
///
/// Opens a child scope for every block and guarantees the previous scope is
/// restored however the block ends.
pub mod utils;
