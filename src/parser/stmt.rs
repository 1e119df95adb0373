use crate::{
    ast::{
        ast::Stmt,
        expressions::IdentifierExpr,
        statements::{ExpressionStmt, LetStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Parses one top-level statement.
///
/// Tokens with a registered statement handler use it; everything else is
/// tried as an expression statement. When that fails too, the expression's
/// own diagnostic is recorded here and an `InvalidStatement` error naming
/// the offending token is returned.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();
    if let Some(handler) = handler {
        return handler(parser);
    }

    match parse_expression_stmt(parser) {
        Ok(stmt) => Ok(stmt),
        Err(error) => {
            parser.report_error(error);
            Err(Error::new(ErrorImpl::InvalidStatement {
                kind: parser.current_token_kind(),
            }))
        }
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Let)?;

    let name = parser.expect(TokenKind::Identifier)?.value;

    parser.expect(TokenKind::Assignment)?;

    let value = parse_expr(parser, BindingPower::Lowest)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Let(LetStmt {
        name: IdentifierExpr { value: name },
        value,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Expression(ExpressionStmt { expression }))
}
