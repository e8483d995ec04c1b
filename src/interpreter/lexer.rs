use logos::Logos;
use tracing::{debug, trace};

use crate::{
    error::{Diagnostics, SyntaxError},
    interpreter::token::{LexerExtras, Literal, Token, TokenKind},
};

/// Scans source text into tokens.
///
/// The returned sequence always ends with exactly one [`TokenKind::Eof`]
/// token. Scanning never fails as a call: an unexpected character is
/// reported and skipped, and an unterminated string is reported and ends the
/// scan. Callers check [`Diagnostics::had_error`] before trusting the result.
///
/// # Example
/// ```
/// use prism::{
///     error::Diagnostics,
///     interpreter::{lexer::scan, token::TokenKind},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = scan("var answer = 42;", &mut diagnostics);
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Var,
///             TokenKind::Identifier,
///             TokenKind::Equal,
///             TokenKind::Number,
///             TokenKind::Semicolon,
///             TokenKind::Eof]);
/// assert!(!diagnostics.had_error());
/// ```
pub fn scan(source: &str, diagnostics: &mut Diagnostics) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras::default());

    while let Some(kind) = lexer.next() {
        let line = lexer.extras.line;
        match kind {
            Ok(TokenKind::UnterminatedString) => {
                diagnostics.report_syntax(SyntaxError::UnterminatedString { line });
                break;
            },
            Ok(kind) => tokens.push(make_token(kind, lexer.slice(), line)),
            Err(()) => {
                trace!(line, slice = lexer.slice(), "unexpected character");
                diagnostics.report_syntax(SyntaxError::UnexpectedCharacter { line });
            },
        }
    }

    tokens.push(Token::eof(lexer.extras.line));
    debug!(count = tokens.len(), "scanned tokens");
    tokens
}

/// Builds the token record for one lexeme, attaching literals to numbers and
/// strings.
fn make_token(kind: TokenKind, slice: &str, line: usize) -> Token {
    match kind {
        // The regex only admits digit runs, so parsing cannot fail.
        TokenKind::Number => {
            let value = slice.parse().unwrap_or(f64::NAN);
            Token::with_literal(kind, slice, Literal::Number(value), line)
        },
        TokenKind::String => {
            let text = &slice[1..slice.len() - 1];
            Token::with_literal(kind, slice, Literal::String(text.to_string()), line)
        },
        _ => Token::new(kind, slice, line),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut diagnostics = Diagnostics::new();
        scan(source, &mut diagnostics).iter().map(|t| t.kind).collect()
    }

    fn messages(diagnostics: &Diagnostics) -> Vec<String> {
        diagnostics.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn empty_source_is_just_eof() {
        assert_eq!(kinds(""), [TokenKind::Eof]);
        assert_eq!(kinds("  \t\r\n "), [TokenKind::Eof]);
    }

    #[test]
    fn two_character_operators_win() {
        assert_eq!(kinds("! != = == < <= > >="),
                   [TokenKind::Bang,
                    TokenKind::BangEqual,
                    TokenKind::Equal,
                    TokenKind::EqualEqual,
                    TokenKind::Less,
                    TokenKind::LessEqual,
                    TokenKind::Greater,
                    TokenKind::GreaterEqual,
                    TokenKind::Eof]);
    }

    #[test]
    fn comments_run_to_end_of_line() {
        assert_eq!(kinds("1 / 2 // 3 * 4\n5"),
                   [TokenKind::Number,
                    TokenKind::Slash,
                    TokenKind::Number,
                    TokenKind::Number,
                    TokenKind::Eof]);
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(kinds("and andy or orchid _x nil while"),
                   [TokenKind::And,
                    TokenKind::Identifier,
                    TokenKind::Or,
                    TokenKind::Identifier,
                    TokenKind::Identifier,
                    TokenKind::Nil,
                    TokenKind::While,
                    TokenKind::Eof]);
    }

    #[test]
    fn trailing_dot_is_not_part_of_number() {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan("12.5 7.", &mut diagnostics);

        assert_eq!(tokens[0].literal, Some(Literal::Number(12.5)));
        assert_eq!(tokens[1].lexeme, "7");
        assert_eq!(tokens[1].literal, Some(Literal::Number(7.0)));
        assert_eq!(tokens[2].kind, TokenKind::Dot);
        assert_eq!(tokens[3].kind, TokenKind::Eof);
    }

    #[test]
    fn strings_carry_their_text_and_count_lines() {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan("\"one\ntwo\" x", &mut diagnostics);

        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "\"one\ntwo\"");
        assert_eq!(tokens[0].literal, Some(Literal::String("one\ntwo".into())));
        assert_eq!(tokens[0].line, 2);
        assert_eq!(tokens[1].line, 2);
        assert!(!diagnostics.had_error());
    }

    #[test]
    fn literals_only_on_numbers_and_strings() {
        let mut diagnostics = Diagnostics::new();
        for token in scan("var s = \"a\" + 1 or true;", &mut diagnostics) {
            let expects_literal = matches!(token.kind, TokenKind::Number | TokenKind::String);
            assert_eq!(token.literal.is_some(), expects_literal, "{token}");
        }
    }

    #[test]
    fn newlines_advance_line_numbers() {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan("a\n\nb // c\nd", &mut diagnostics);
        let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();

        assert_eq!(lines, [1, 3, 4, 4]);
    }

    #[test]
    fn unexpected_characters_are_reported_and_skipped() {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan("a @ b\n#", &mut diagnostics);
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

        assert_eq!(kinds, [TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]);
        assert_eq!(messages(&diagnostics),
                   ["[line 1] Error: Unexpected character.",
                    "[line 2] Error: Unexpected character."]);
        assert!(diagnostics.had_error());
    }

    #[test]
    fn unterminated_string_ends_the_scan() {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan("print \"abc\ndef", &mut diagnostics);
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

        assert_eq!(kinds, [TokenKind::Print, TokenKind::Eof]);
        assert_eq!(messages(&diagnostics), ["[line 2] Error: Unterminated string."]);
    }
}
