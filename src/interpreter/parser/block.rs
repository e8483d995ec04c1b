use crate::{
    ast::Stmt,
    interpreter::{
        parser::{core::ParseResult, statement::parse_declaration, utils::TokenStream},
        token::TokenKind,
    },
};

/// Parses the declarations of a block up to and including the closing `}`.
///
/// The opening `{` has already been consumed. Declarations inside the block
/// recover from their own errors, so one bad line does not hide the rest of
/// the block.
///
/// Grammar: `block := "{" declaration* "}"`
pub fn parse_block(tokens: &mut TokenStream<'_>) -> ParseResult<Vec<Stmt>> {
    let mut statements = Vec::new();

    while !tokens.check(TokenKind::RightBrace) && !tokens.is_at_end() {
        if let Some(statement) = parse_declaration(tokens) {
            statements.push(statement);
        }
    }

    tokens.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
    Ok(statements)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::{Expr, Stmt},
        error::Diagnostics,
        interpreter::{lexer::scan, parser::parse},
    };

    #[test]
    fn nested_blocks() {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan("{ var a = 1; { print a; } }", &mut diagnostics);
        let statements = parse(&tokens, &mut diagnostics);

        assert!(!diagnostics.had_error());
        let [Stmt::Block { statements: outer }] = statements.as_slice() else {
            panic!("expected one block");
        };
        assert_eq!(outer.len(), 2);
        assert!(matches!(&outer[1], Stmt::Block { statements } if statements.len() == 1));
    }

    #[test]
    fn unclosed_block_reports_at_end() {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan("{ print 1;", &mut diagnostics);
        parse(&tokens, &mut diagnostics);

        let errors: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
        assert_eq!(errors, ["[line 1] Error at end: Expect '}' after block."]);
    }

    #[test]
    fn errors_inside_block_do_not_hide_later_statements() {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan("{ print ; print 2; }", &mut diagnostics);
        let statements = parse(&tokens, &mut diagnostics);

        assert_eq!(diagnostics.iter().count(), 1);
        assert_eq!(statements,
                   [Stmt::Block { statements: vec![Stmt::Print { expr: Expr::literal(2.0),
                                                                      line: 1, }] }]);
    }
}
