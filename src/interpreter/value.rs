use std::{fmt, rc::Rc};

use crate::ast::LiteralValue;

/// Represents a runtime value in the interpreter.
///
/// This enum models every value a program can compute, store in a variable or
/// print. There are no other runtime types.
///
/// Equality is the language's `==`: values of different variants are never
/// equal, `nil` equals only `nil`, and numbers compare with IEEE-754 rules
/// (so `NaN` is not equal to itself).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value.
    Nil,
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// An immutable string. Cloning shares the text.
    String(Rc<str>),
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Nil => Self::Nil,
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::String(s) => Self::String(Rc::clone(s)),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(Rc::from(v))
    }
}

impl Value {
    /// Maps the value to a boolean for control flow.
    ///
    /// `nil` and `false` are falsy; every other value, including `0` and the
    /// empty string, is truthy.
    ///
    /// # Example
    /// ```
    /// use prism::interpreter::value::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }

    /// Returns the number inside, if any.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Formats a value the way `print` shows it.
///
/// Integral numbers drop the fractional part (`7`, not `7.0`); other numbers
/// use the shortest decimal form that reads back to the same value. Strings
/// are written without quotes.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_print_without_trailing_zero() {
        assert_eq!(Value::Number(7.0).to_string(), "7");
        assert_eq!(Value::Number(-3.0).to_string(), "-3");
        assert_eq!(Value::Number(3.5).to_string(), "3.5");
        assert_eq!(Value::Number(0.1).to_string(), "0.1");
        assert_eq!(Value::Number(f64::INFINITY).to_string(), "inf");
    }

    #[test]
    fn other_values_print_plainly() {
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::from("a b").to_string(), "a b");
    }

    #[test]
    fn equality_never_crosses_types() {
        assert_eq!(Value::Nil, Value::Nil);
        assert_ne!(Value::Nil, Value::Bool(false));
        assert_ne!(Value::Number(1.0), Value::from("1"));
        assert_ne!(Value::Number(0.0), Value::Bool(false));
        assert_eq!(Value::from("ab"), Value::from("ab"));
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    }

    #[test]
    fn literals_convert() {
        assert_eq!(Value::from(&LiteralValue::Nil), Value::Nil);
        assert_eq!(Value::from(&LiteralValue::from(2.0)), Value::Number(2.0));
        assert_eq!(Value::from(&LiteralValue::from("s")), Value::from("s"));
    }
}
