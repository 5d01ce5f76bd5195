use crate::{
    ast::ast::{Node, VarType},
    errors::errors::{Diagnostic, Error},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_arithmetic_expr, parse_condition},
    parser::Parser,
};

/// program := statement (DELIM statement)* EOF
///
/// The global scope lives for the whole parse; delimiters (including blank
/// lines) between statements are skipped.
pub fn parse_program(parser: &mut Parser) -> Result<Node, Error> {
    parser.enter_scope("global");

    let mut statements = vec![];
    loop {
        match parser.current_kind() {
            TokenKind::Eof => break,
            TokenKind::Delimiter => {
                parser.advance()?;
            }
            _ => {
                if let Some(statement) = parse_stmt(parser)? {
                    statements.push(statement);
                }
            }
        }
    }

    parser.leave_scope();

    Ok(Node::Program(statements))
}

/// statement := declaration | assignment | if_stmt | while_stmt
///
/// Yields `None` when the statement had to be abandoned; the parser has
/// already resynchronized at the next statement boundary in that case.
pub fn parse_stmt(parser: &mut Parser) -> Result<Option<Node>, Error> {
    match parser.current_kind() {
        TokenKind::Keyword if matches!(parser.current_value(), "int" | "float") => {
            parse_declaration(parser)
        }
        TokenKind::Identifier => parse_assignment(parser),
        TokenKind::Keyword if parser.current_value() == "if" => parse_if_stmt(parser),
        TokenKind::Keyword if parser.current_value() == "while" => parse_while_stmt(parser),
        _ => {
            parser.record(Diagnostic::InvalidStatement);
            parser.synchronize()?;
            Ok(None)
        }
    }
}

/// declaration := ('int'|'float') IDENT ('=' expr)?
pub fn parse_declaration(parser: &mut Parser) -> Result<Option<Node>, Error> {
    let ty = VarType::from_keyword(parser.current_value());
    parser.advance()?;

    let name = match parser.expect(TokenKind::Identifier)? {
        Some(token) => token.value,
        None => {
            parser.synchronize()?;
            return Ok(None);
        }
    };

    // Declare on sight: the binding exists before the initializer is
    // parsed. A duplicate keeps the first binding.
    if parser.check_not_declared(&name) {
        parser.declare(&name, ty);
    }

    let value = if parser.is_operator(&["="]) {
        parser.advance()?;
        let expr = parse_arithmetic_expr(parser)?;
        parser.check_type_match(ty, expr.ty());
        Some(Box::new(expr))
    } else {
        None
    };

    Ok(Some(Node::Declaration { name, ty, value }))
}

/// assignment := IDENT '=' expr
pub fn parse_assignment(parser: &mut Parser) -> Result<Option<Node>, Error> {
    let name = parser.advance()?.value;

    if parser.expect_value(TokenKind::Operator, "=")?.is_none() {
        parser.synchronize()?;
        return Ok(None);
    }

    let expr = parse_arithmetic_expr(parser)?;

    // Resolve the target after the right-hand side, so diagnostics from the
    // expression precede the resolution diagnostics in the list.
    parser.resolve_use(&name);
    let var_ty = parser.type_of(&name);
    parser.check_type_match(var_ty, expr.ty());

    Ok(Some(Node::Assignment {
        name,
        value: Box::new(expr),
    }))
}

/// if_stmt := 'if' condition 'then' '{' statement* '}' ('else' '{' statement* '}')?
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Option<Node>, Error> {
    parser.advance()?;

    let condition = parse_condition(parser)?;
    parser.expect_value(TokenKind::Keyword, "then")?;
    let then_block = parse_block(parser, "if")?;

    let else_block = if parser.is_keyword("else") {
        parser.advance()?;
        parse_block(parser, "else")?
    } else {
        vec![]
    };

    Ok(Some(Node::If {
        condition: Box::new(condition),
        then_block,
        else_block,
    }))
}

/// while_stmt := 'while' condition 'do' '{' statement* '}'
pub fn parse_while_stmt(parser: &mut Parser) -> Result<Option<Node>, Error> {
    parser.advance()?;

    let condition = parse_condition(parser)?;
    parser.expect_value(TokenKind::Keyword, "do")?;
    let block = parse_block(parser, "while")?;

    Ok(Some(Node::While {
        condition: Box::new(condition),
        block,
    }))
}

/// A braced statement block. The scope is entered before its statements are
/// parsed and left immediately after the closing brace, on every path, so
/// enter/leave always pair up -- including for unclosed blocks cut off at
/// EOF.
pub fn parse_block(parser: &mut Parser, label: &str) -> Result<Vec<Node>, Error> {
    if parser.expect_value(TokenKind::Scope, "{")?.is_none() {
        parser.synchronize()?;
        return Ok(vec![]);
    }

    parser.enter_scope(label);

    let mut statements = vec![];
    loop {
        match parser.current_kind() {
            TokenKind::Eof => break,
            TokenKind::Delimiter => {
                parser.advance()?;
            }
            TokenKind::Scope if parser.current_value() == "}" => break,
            _ => {
                if let Some(statement) = parse_stmt(parser)? {
                    statements.push(statement);
                }
            }
        }
    }

    parser.expect_value(TokenKind::Scope, "}")?;
    parser.leave_scope();

    Ok(statements)
}
