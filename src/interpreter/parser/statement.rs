use tracing::debug;

use crate::{
    ast::Stmt,
    interpreter::{
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::TokenStream,
        },
        token::TokenKind,
    },
};

/// Parses one declaration and recovers from syntax errors.
///
/// This is the error boundary of the parser. A failure anywhere inside the
/// declaration is recorded, the stream is resynchronized to the next
/// statement boundary and `None` is returned so the caller can keep going.
///
/// Grammar: `declaration := varDecl | statement`
pub fn parse_declaration(tokens: &mut TokenStream<'_>) -> Option<Stmt> {
    let result = if tokens.match_kinds(&[TokenKind::Var]).is_some() {
        parse_var_declaration(tokens)
    } else {
        parse_statement(tokens)
    };

    match result {
        Ok(statement) => Some(statement),
        Err(error) => {
            debug!(%error, "synchronizing after syntax error");
            tokens.report(error);
            tokens.synchronize();
            None
        },
    }
}

/// Parses the rest of a variable declaration after `var`.
///
/// Grammar: `varDecl := "var" IDENTIFIER ( "=" expression )? ";"`
fn parse_var_declaration(tokens: &mut TokenStream<'_>) -> ParseResult<Stmt> {
    let name = tokens.consume(TokenKind::Identifier, "Expect variable name.")?
                     .clone();

    let initializer = match tokens.match_kinds(&[TokenKind::Equal]) {
        Some(_) => Some(parse_expression(tokens)?),
        None => None,
    };

    tokens.consume(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;
    Ok(Stmt::Var { name, initializer })
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - a `print` statement,
/// - a block,
/// - an `if` statement,
/// - a `while` loop,
/// - an expression used as a statement.
///
/// Grammar: `statement := printStmt | block | ifStmt | whileStmt | exprStmt`
pub fn parse_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Stmt> {
    if let Some(keyword) = tokens.match_kinds(&[TokenKind::Print]) {
        return parse_print(tokens, keyword.line);
    }
    if tokens.match_kinds(&[TokenKind::LeftBrace]).is_some() {
        return Ok(Stmt::Block { statements: parse_block(tokens)? });
    }
    if tokens.match_kinds(&[TokenKind::If]).is_some() {
        return parse_if(tokens);
    }
    if tokens.match_kinds(&[TokenKind::While]).is_some() {
        return parse_while(tokens);
    }

    let expr = parse_expression(tokens)?;
    tokens.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
    Ok(Stmt::Expression { expr })
}

/// Grammar: `printStmt := "print" expression ";"`
fn parse_print(tokens: &mut TokenStream<'_>, line: usize) -> ParseResult<Stmt> {
    let expr = parse_expression(tokens)?;
    tokens.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
    Ok(Stmt::Print { expr, line })
}

/// Parses an `if` statement with an optional `else` branch.
///
/// An `else` always binds to the nearest `if`.
///
/// Grammar: `ifStmt := "if" "(" expression ")" statement ( "else" statement )?`
fn parse_if(tokens: &mut TokenStream<'_>) -> ParseResult<Stmt> {
    tokens.consume(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
    let condition = parse_expression(tokens)?;
    tokens.consume(TokenKind::RightParen, "Expect ')' after if condition.")?;

    let then_branch = Box::new(parse_statement(tokens)?);
    let else_branch = match tokens.match_kinds(&[TokenKind::Else]) {
        Some(_) => Some(Box::new(parse_statement(tokens)?)),
        None => None,
    };

    Ok(Stmt::If { condition,
                  then_branch,
                  else_branch })
}

/// Grammar: `whileStmt := "while" "(" expression ")" statement`
fn parse_while(tokens: &mut TokenStream<'_>) -> ParseResult<Stmt> {
    tokens.consume(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
    let condition = parse_expression(tokens)?;
    tokens.consume(TokenKind::RightParen, "Expect ')' after condition.")?;
    let body = Box::new(parse_statement(tokens)?);

    Ok(Stmt::While { condition, body })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        ast::Expr,
        error::Diagnostics,
        interpreter::{lexer::scan, parser::parse},
    };

    fn parse_source(source: &str) -> (Vec<Stmt>, Vec<String>) {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan(source, &mut diagnostics);
        let statements = parse(&tokens, &mut diagnostics);
        (statements, diagnostics.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn var_without_initializer() {
        let (statements, errors) = parse_source("var x;");

        assert!(errors.is_empty());
        let [Stmt::Var { name, initializer }] = statements.as_slice() else {
            panic!("expected a single declaration, found {statements:?}");
        };
        assert_eq!(name.lexeme, "x");
        assert_eq!(*initializer, None);
    }

    #[test]
    fn else_binds_to_nearest_if() {
        let (statements, errors) = parse_source("if (a) if (b) print 1; else print 2;");

        assert!(errors.is_empty());
        let [Stmt::If { then_branch, else_branch: None, .. }] = statements.as_slice() else {
            panic!("outer if should have no else: {statements:?}");
        };
        assert!(matches!(then_branch.as_ref(), Stmt::If { else_branch: Some(_), .. }));
    }

    #[test]
    fn while_with_block_body() {
        let (statements, errors) = parse_source("while (x > 0) { x = x - 1; }");

        assert!(errors.is_empty());
        let [Stmt::While { body, .. }] = statements.as_slice() else {
            panic!("expected a while loop");
        };
        let Stmt::Block { statements } = body.as_ref() else {
            panic!("expected a block body");
        };
        assert!(matches!(statements.as_slice(),
                         [Stmt::Expression { expr: Expr::Assign { .. } }]));
    }

    #[test]
    fn declarations_are_not_statements() {
        let (_, errors) = parse_source("if (true) var x = 1;");

        assert_eq!(errors, ["[line 1] Error at 'var': Expect expression."]);
    }

    #[test]
    fn missing_parentheses_are_reported() {
        let (_, errors) = parse_source("if x) print 1;\nwhile (x print 2;");

        assert_eq!(errors,
                   ["[line 1] Error at 'x': Expect '(' after 'if'.",
                    "[line 2] Error at 'print': Expect ')' after condition."]);
    }

    #[test]
    fn reserved_words_cannot_start_expressions() {
        let (statements, errors) = parse_source("return 1;\nprint 2;");

        assert_eq!(errors, ["[line 1] Error at 'return': Expect expression."]);
        assert_eq!(statements, [Stmt::Print { expr: Expr::literal(2.0),
                                   line: 2, }]);
    }
}
