/// Operator dispatch.
///
/// Routes each binary operator to the arithmetic or comparison handler.
pub mod core;
/// Arithmetic on numbers and string concatenation.
pub mod scalar;
/// Relational comparison and equality.
pub mod comparison;
