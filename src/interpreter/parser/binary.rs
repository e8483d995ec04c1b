use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    interpreter::{
        parser::{core::ParseResult, unary::parse_unary, utils::TokenStream},
        token::TokenKind,
    },
};

/// Parses `or` chains.
///
/// Grammar: `logic_or := logic_and ( "or" logic_and )*`
pub fn parse_logical_or(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_logical_and(tokens)?;
    while let Some(operator) = tokens.match_kinds(&[TokenKind::Or]) {
        let right = parse_logical_and(tokens)?;
        left = Expr::Logical { left:  Box::new(left),
                               op:    LogicalOperator::Or,
                               right: Box::new(right),
                               line:  operator.line, };
    }
    Ok(left)
}

/// Parses `and` chains.
///
/// Grammar: `logic_and := equality ( "and" equality )*`
pub fn parse_logical_and(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_equality(tokens)?;
    while let Some(operator) = tokens.match_kinds(&[TokenKind::And]) {
        let right = parse_equality(tokens)?;
        left = Expr::Logical { left:  Box::new(left),
                               op:    LogicalOperator::And,
                               right: Box::new(right),
                               line:  operator.line, };
    }
    Ok(left)
}

/// Parses equality operators.
///
/// Grammar: `equality := comparison ( ( "!=" | "==" ) comparison )*`
pub fn parse_equality(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens, parse_comparison, |op| {
        matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
    })
}

/// Parses relational operators.
///
/// Grammar: `comparison := term ( ( ">" | ">=" | "<" | "<=" ) term )*`
pub fn parse_comparison(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens, parse_term, |op| {
        matches!(op,
                 BinaryOperator::Greater
                 | BinaryOperator::GreaterEqual
                 | BinaryOperator::Less
                 | BinaryOperator::LessEqual)
    })
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `term := factor ( ( "-" | "+" ) factor )*`
pub fn parse_term(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens, parse_factor, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication and division expressions.
///
/// Grammar: `factor := unary ( ( "/" | "*" ) unary )*`
pub fn parse_factor(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens, parse_unary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    })
}

/// Builds a left-leaning tree for one precedence level.
///
/// Operands come from `operand`, the next-higher level. The loop keeps
/// consuming operators as long as `accepts` admits them, so `a - b - c`
/// becomes `(a - b) - c`.
fn parse_left_associative(tokens: &mut TokenStream<'_>,
                          operand: fn(&mut TokenStream<'_>) -> ParseResult<Expr>,
                          accepts: fn(BinaryOperator) -> bool)
                          -> ParseResult<Expr> {
    let mut left = operand(tokens)?;
    loop {
        let token = tokens.peek();
        if let Some(op) = token_to_binary_operator(token.kind)
           && accepts(op)
        {
            tokens.advance();
            let right = operand(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line: token.line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for every kind that is not an equality, comparison or
/// arithmetic operator (including `and`/`or`, which are parsed as logical
/// expressions).
///
/// # Example
/// ```
/// use prism::{
///     ast::BinaryOperator,
///     interpreter::{parser::binary::token_to_binary_operator, token::TokenKind},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus), Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
