use std::{collections::BTreeMap, fmt::Write};

use crate::interpreter::token::{Token, TokenCategory, TokenKind};

/// ANSI escape codes for terminal output.
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const KEYWORD: &str = "\x1b[34m"; // Blue
    pub const IDENTIFIER: &str = "\x1b[32m"; // Green
    pub const LITERAL: &str = "\x1b[33m"; // Yellow
    pub const OPERATOR: &str = "\x1b[35m"; // Purple
    pub const DELIMITER: &str = "\x1b[31m"; // Red
    pub const LINE_NUMBER: &str = "\x1b[36m"; // Cyan
}

const RULE_WIDTH: usize = 65;

/// Colour a token is drawn in.
const fn color_of(kind: TokenKind) -> &'static str {
    match kind.category() {
        TokenCategory::Keyword => colors::KEYWORD,
        TokenCategory::Identifier => colors::IDENTIFIER,
        TokenCategory::Literal => colors::LITERAL,
        TokenCategory::Operator => colors::OPERATOR,
        TokenCategory::Delimiter => colors::DELIMITER,
        TokenCategory::Other => colors::RESET,
    }
}

/// Renders the full token report: highlighted source, then the token table.
///
/// # Parameters
/// - `source`: The text that was scanned.
/// - `tokens`: The scanner's output for `source`.
///
/// # Returns
/// The report as a string with embedded ANSI colour codes.
///
/// # Example
/// ```
/// use prism::{error::Diagnostics, interpreter::lexer::scan, visualize::render_tokens};
///
/// let source = "print 1;";
/// let tokens = scan(source, &mut Diagnostics::new());
/// let report = render_tokens(source, &tokens);
///
/// assert!(report.contains("=== TOKEN LIST ==="));
/// assert!(report.contains("PRINT"));
/// ```
#[must_use]
pub fn render_tokens(source: &str, tokens: &[Token]) -> String {
    let mut out = String::new();
    render_source(&mut out, source, tokens);
    render_table(&mut out, tokens);
    out
}

fn gutter(out: &mut String, line: usize) {
    let _ = write!(out, "{}{line:>4} |{} ", colors::LINE_NUMBER, colors::RESET);
}

/// Copies untokenized text (whitespace, comments) and starts a new gutter
/// after each line break.
fn copy_plain(out: &mut String, text: &str, line: &mut usize) {
    for c in text.chars() {
        out.push(c);
        if c == '\n' {
            *line += 1;
            gutter(out, *line);
        }
    }
}

fn render_source(out: &mut String, source: &str, tokens: &[Token]) {
    let _ = write!(out,
                   "{}\n=== SOURCE CODE WITH HIGHLIGHTING ==={}\n\n",
                   colors::BOLD,
                   colors::RESET);

    let mut cursor = 0;
    let mut line = 1;
    gutter(out, line);

    for token in tokens.iter().filter(|token| token.kind != TokenKind::Eof) {
        let Some(offset) = source[cursor..].find(token.lexeme.as_str()) else {
            continue;
        };
        let start = cursor + offset;

        copy_plain(out, &source[cursor..start], &mut line);

        let _ = write!(out, "{}", color_of(token.kind));
        copy_plain(out, &token.lexeme, &mut line);
        out.push_str(colors::RESET);

        cursor = start + token.lexeme.len();
    }

    copy_plain(out, &source[cursor..], &mut line);
    out.push_str("\n\n");
}

fn render_table(out: &mut String, tokens: &[Token]) {
    let _ = write!(out, "{}=== TOKEN LIST ==={}\n\n", colors::BOLD, colors::RESET);
    let _ = writeln!(out, "{:<5}{:<20}{:<30}LINE", "IDX", "TYPE", "LEXEME");
    let rule = "-".repeat(RULE_WIDTH);
    let _ = writeln!(out, "{rule}");

    let mut by_line: BTreeMap<usize, Vec<&Token>> = BTreeMap::new();
    for token in tokens {
        by_line.entry(token.line).or_default().push(token);
    }

    for (group, (line, line_tokens)) in by_line.iter().enumerate() {
        if group > 0 {
            let _ = writeln!(out, "{rule}");
        }
        for (index, token) in line_tokens.iter().enumerate() {
            let _ = writeln!(out,
                             "{index:<5}{}{:<20}{:<30}{}{line}",
                             color_of(token.kind),
                             token.kind.name(),
                             token.lexeme,
                             colors::RESET);
        }
    }

    out.push('\n');
}
