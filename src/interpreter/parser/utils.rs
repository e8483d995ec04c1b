use std::{iter::Peekable, slice};

use tracing::trace;

use crate::{
    error::{Location, SyntaxError},
    interpreter::{
        parser::core::ParseResult,
        token::{Token, TokenKind},
    },
};

/// Cursor over the scanner's tokens.
///
/// Wraps a peekable iterator and remembers the last consumed token, which the
/// resynchronization rule needs. It never moves past the final token, so
/// peeking at the end keeps returning the end-of-input marker. Errors that do
/// not abort parsing are collected here in report order.
pub struct TokenStream<'a> {
    tokens:   Peekable<slice::Iter<'a, Token>>,
    last:     &'a Token,
    previous: Option<&'a Token>,
    reports:  Vec<SyntaxError>,
}

impl<'a> TokenStream<'a> {
    /// Creates a cursor at the first token, or `None` for an empty slice.
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Option<Self> {
        let last = tokens.last()?;
        Some(Self { tokens: tokens.iter().peekable(),
                    last,
                    previous: None,
                    reports: Vec::new() })
    }

    /// Returns the current token without consuming it.
    pub fn peek(&mut self) -> &'a Token {
        self.tokens.peek().copied().unwrap_or(self.last)
    }

    /// The most recently consumed token.
    #[must_use]
    pub const fn previous(&self) -> Option<&'a Token> {
        self.previous
    }

    /// Whether the cursor sits on the end-of-input marker.
    pub fn is_at_end(&mut self) -> bool {
        self.tokens
            .peek()
            .is_none_or(|token| token.kind == TokenKind::Eof)
    }

    /// Consumes and returns the current token. At the end of input the
    /// end-of-input marker is returned and the cursor stays put.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if !self.is_at_end() {
            self.tokens.next();
        }
        self.previous = Some(token);
        token
    }

    /// Whether the current token has the given kind. Always `false` at the end
    /// of input.
    pub fn check(&mut self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Consumes the current token if it has one of the given kinds.
    pub fn match_kinds(&mut self, kinds: &[TokenKind]) -> Option<&'a Token> {
        if kinds.iter().any(|kind| self.check(*kind)) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consumes a token of the expected kind, or fails with `message` at the
    /// current token.
    pub fn consume(&mut self, kind: TokenKind, message: &'static str) -> ParseResult<&'a Token> {
        if self.check(kind) {
            return Ok(self.advance());
        }

        let found = self.peek();
        Err(SyntaxError::MissingToken { message,
                                        location: Location::of(found),
                                        line: found.line })
    }

    /// Records an error that does not abort the current statement.
    pub fn report(&mut self, error: SyntaxError) {
        self.reports.push(error);
    }

    /// Skips tokens until a likely statement boundary.
    ///
    /// The offending token is always discarded. Skipping stops right after a
    /// `;` or in front of a keyword that starts a statement.
    pub fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous()
                   .is_some_and(|token| token.kind == TokenKind::Semicolon)
            {
                return;
            }
            if TokenKind::STATEMENT_KEYWORDS.contains(&self.peek().kind) {
                return;
            }
            trace!(token = %self.peek(), "discarding token");
            self.advance();
        }
    }

    /// Hands back all collected errors in report order.
    #[must_use]
    pub fn into_reports(self) -> Vec<SyntaxError> {
        self.reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Diagnostics, interpreter::lexer::scan};

    fn tokens(source: &str) -> Vec<Token> {
        scan(source, &mut Diagnostics::new())
    }

    #[test]
    fn empty_slice_has_no_cursor() {
        assert!(TokenStream::new(&[]).is_none());
    }

    #[test]
    fn never_moves_past_end() {
        let tokens = tokens("x");
        let mut stream = TokenStream::new(&tokens).unwrap();

        assert_eq!(stream.advance().kind, TokenKind::Identifier);
        assert!(stream.is_at_end());
        assert_eq!(stream.advance().kind, TokenKind::Eof);
        assert_eq!(stream.peek().kind, TokenKind::Eof);
        assert!(!stream.check(TokenKind::Eof));
    }

    #[test]
    fn consume_reports_location() {
        let tokens = tokens("(1");
        let mut stream = TokenStream::new(&tokens).unwrap();
        stream.advance();
        stream.advance();

        let error = stream.consume(TokenKind::RightParen, "Expect ')' after expression.")
                          .unwrap_err();
        assert_eq!(error.to_string(),
                   "[line 1] Error at end: Expect ')' after expression.");
    }

    #[test]
    fn synchronize_stops_after_semicolon() {
        let tokens = tokens("1 2 3; x");
        let mut stream = TokenStream::new(&tokens).unwrap();
        stream.synchronize();

        assert_eq!(stream.peek().lexeme, "x");
    }

    #[test]
    fn synchronize_stops_before_statement_keyword() {
        let tokens = tokens("+ 1 2 while");
        let mut stream = TokenStream::new(&tokens).unwrap();
        stream.synchronize();

        assert_eq!(stream.peek().kind, TokenKind::While);
    }
}
