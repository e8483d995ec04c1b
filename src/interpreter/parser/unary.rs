use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::{Location, SyntaxError},
    interpreter::{
        parser::{
            core::{ParseResult, parse_expression},
            utils::TokenStream,
        },
        token::{Literal, TokenKind},
    },
};

/// Parses prefix operators, which are right-associative: `!-x` is `!(-x)`.
///
/// Grammar: `unary := ( "!" | "-" ) unary | primary`
pub fn parse_unary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let Some(operator) = tokens.match_kinds(&[TokenKind::Bang, TokenKind::Minus]) else {
        return parse_primary(tokens);
    };

    let op = match operator.kind {
        TokenKind::Bang => UnaryOperator::Not,
        _ => UnaryOperator::Negate,
    };
    let operand = parse_unary(tokens)?;

    Ok(Expr::Unary { op,
                     operand: Box::new(operand),
                     line: operator.line })
}

/// Parses literals, variable references and parenthesized expressions.
///
/// Grammar:
/// ```text
/// primary := NUMBER | STRING | "true" | "false" | "nil"
///          | IDENTIFIER | "(" expression ")"
/// ```
///
/// # Errors
/// - `ExpectedExpression` when no expression can start at the current token.
/// - `MissingToken` when a group is not closed.
pub fn parse_primary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let token = tokens.peek();

    let expr = match (token.kind, &token.literal) {
        (TokenKind::False, _) => Expr::literal(false),
        (TokenKind::True, _) => Expr::literal(true),
        (TokenKind::Nil, _) => Expr::Literal { value: LiteralValue::Nil },
        (TokenKind::Number, Some(Literal::Number(n))) => Expr::literal(*n),
        (TokenKind::String, Some(Literal::String(s))) => Expr::literal(s.as_str()),
        (TokenKind::Identifier, _) => Expr::Variable { name: token.clone() },
        (TokenKind::LeftParen, _) => {
            tokens.advance();
            let inner = parse_expression(tokens)?;
            tokens.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
            return Ok(Expr::Grouping { inner: Box::new(inner) });
        },
        _ => {
            return Err(SyntaxError::ExpectedExpression { location: Location::of(token),
                                                         line:     token.line, });
        },
    };

    tokens.advance();
    Ok(expr)
}
