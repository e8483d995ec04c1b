use std::fmt;

use thiserror::Error;

use crate::interpreter::token::{Token, TokenKind};

/// Where in the token stream a syntax error was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// The parser ran into the end of input.
    AtEnd,
    /// The parser stopped at the token with this lexeme.
    AtLexeme(String),
}

impl Location {
    /// Describes the position of `token`.
    #[must_use]
    pub fn of(token: &Token) -> Self {
        match token.kind {
            TokenKind::Eof => Self::AtEnd,
            _ => Self::AtLexeme(token.lexeme.clone()),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtEnd => f.write_str(" at end"),
            Self::AtLexeme(lexeme) => write!(f, " at '{lexeme}'"),
        }
    }
}

/// Represents all errors that can occur during scanning or parsing.
///
/// The display form is the complete report line, e.g.
/// `[line 3] Error at ';': Expect expression.`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A character that starts no token.
    #[error("[line {line}] Error: Unexpected character.")]
    UnexpectedCharacter {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Input ended inside a string literal.
    #[error("[line {line}] Error: Unterminated string.")]
    UnterminatedString {
        /// The source line where input ended.
        line: usize,
    },
    /// No expression could start at this token.
    #[error("[line {line}] Error{location}: Expect expression.")]
    ExpectedExpression {
        /// The offending token.
        location: Location,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A required token was missing.
    #[error("[line {line}] Error{location}: {message}")]
    MissingToken {
        /// What the parser expected, e.g. `Expect ';' after value.`
        message:  &'static str,
        /// The token found instead.
        location: Location,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The left side of `=` is not a variable.
    #[error("[line {line}] Error{location}: Invalid assignment target.")]
    InvalidAssignmentTarget {
        /// The `=` token.
        location: Location,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl SyntaxError {
    /// The source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line }
            | Self::UnterminatedString { line }
            | Self::ExpectedExpression { line, .. }
            | Self::MissingToken { line, .. }
            | Self::InvalidAssignmentTarget { line, .. } => *line,
        }
    }
}
