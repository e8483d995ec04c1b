use tracing::debug;

use crate::{
    ast::{Expr, Stmt},
    error::{Diagnostics, Location, SyntaxError},
    interpreter::{
        parser::{binary::parse_logical_or, statement::parse_declaration, utils::TokenStream},
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a whole program.
///
/// Parsing is best effort: every syntax error is reported into `diagnostics`,
/// the parser skips to the next statement boundary, and carries on so that
/// independent mistakes are all reported in one pass. Statements that failed
/// to parse are left out of the result, so callers must check
/// [`Diagnostics::had_error`] before running it.
///
/// Grammar: `program := declaration* EOF`
///
/// # Example
/// ```
/// use prism::{
///     error::Diagnostics,
///     interpreter::{lexer::scan, parser::parse},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = scan("print 1 +; print (2;", &mut diagnostics);
/// let statements = parse(&tokens, &mut diagnostics);
///
/// assert!(statements.is_empty());
/// assert_eq!(diagnostics.iter().count(), 2);
/// ```
pub fn parse(tokens: &[Token], diagnostics: &mut Diagnostics) -> Vec<Stmt> {
    let Some(mut stream) = TokenStream::new(tokens) else {
        return Vec::new();
    };

    let mut statements = Vec::new();
    while !stream.is_at_end() {
        if let Some(statement) = parse_declaration(&mut stream) {
            statements.push(statement);
        }
    }

    let reports = stream.into_reports();
    debug!(statements = statements.len(),
           errors = reports.len(),
           "parsed program");
    for error in reports {
        diagnostics.report_syntax(error);
    }

    statements
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := assignment`
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_assignment(tokens)
}

/// Parses an assignment, which is right-associative.
///
/// The left side is parsed as an ordinary expression first. When `=` follows,
/// the right side is parsed recursively and the left side must turn out to be
/// a bare variable. Any other target is reported without aborting the
/// statement, and the left side is returned unchanged.
///
/// Grammar: `assignment := IDENTIFIER "=" assignment | logic_or`
pub fn parse_assignment(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let expr = parse_logical_or(tokens)?;

    let Some(equals) = tokens.match_kinds(&[TokenKind::Equal]) else {
        return Ok(expr);
    };
    let value = parse_assignment(tokens)?;

    match expr {
        Expr::Variable { name } => Ok(Expr::Assign { name,
                                                     value: Box::new(value) }),
        target => {
            tokens.report(SyntaxError::InvalidAssignmentTarget { location:
                                                                     Location::of(equals),
                                                                 line: equals.line });
            Ok(target)
        },
    }
}
