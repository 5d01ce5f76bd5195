use crate::{
    ast::ast::{FactorValue, Node, VarType},
    errors::errors::{Diagnostic, Error},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// condition := expr comparator expr
///
/// Any operator token is accepted as the comparator. When it is missing,
/// the offending token is left in place -- it is usually the `then`/`do`
/// keyword the enclosing statement still needs -- and the right operand is
/// stubbed with an error factor.
pub fn parse_condition(parser: &mut Parser) -> Result<Node, Error> {
    let left = parse_arithmetic_expr(parser)?;

    let (operator, right) = match parser.expect(TokenKind::Operator)? {
        Some(token) => (token.value, parse_arithmetic_expr(parser)?),
        None => (String::new(), error_factor()),
    };

    Ok(Node::Condition {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    })
}

/// expr := term (('+'|'-') term)*
///
/// Left-associative fold; each step stamps the result type, downgrading to
/// the `none` sentinel on operand mismatch while still producing the node.
pub fn parse_arithmetic_expr(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = parse_term(parser)?;

    while parser.is_operator(&["+", "-"]) {
        let operator = parser.advance()?.value;
        let right = parse_term(parser)?;
        let ty = parser.check_type_match(node.ty(), right.ty());

        node = Node::Arithmetic {
            operator,
            left: Box::new(node),
            right: Box::new(right),
            ty,
        };
    }

    Ok(node)
}

/// term := factor (('*'|'/') factor)*
pub fn parse_term(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = parse_factor(parser)?;

    while parser.is_operator(&["*", "/"]) {
        let operator = parser.advance()?.value;
        let right = parse_factor(parser)?;
        let ty = parser.check_type_match(node.ty(), right.ty());

        node = Node::Term {
            operator,
            left: Box::new(node),
            right: Box::new(right),
            ty,
        };
    }

    Ok(node)
}

/// factor := NUMBER | FNUMBER | IDENT | '(' expr ')'
pub fn parse_factor(parser: &mut Parser) -> Result<Node, Error> {
    match parser.current_kind() {
        TokenKind::Number => {
            let token = parser.advance()?;
            match token.value.parse::<i64>() {
                Ok(value) => Ok(Node::Factor {
                    value: FactorValue::Int(value),
                    ty: VarType::Int,
                }),
                Err(_) => {
                    parser.record(Diagnostic::InvalidNumber { token: token.value });
                    Ok(error_factor())
                }
            }
        }
        TokenKind::FNumber => {
            let token = parser.advance()?;
            match token.value.parse::<f64>() {
                Ok(value) => Ok(Node::Factor {
                    value: FactorValue::Float(value),
                    ty: VarType::Float,
                }),
                Err(_) => {
                    parser.record(Diagnostic::InvalidNumber { token: token.value });
                    Ok(error_factor())
                }
            }
        }
        TokenKind::Identifier => {
            let name = parser.advance()?.value;

            let ty = if parser.resolve_use(&name) {
                parser.type_of(&name)
            } else {
                VarType::None
            };

            Ok(Node::Factor {
                value: FactorValue::Identifier(name),
                ty,
            })
        }
        TokenKind::Parenthesis if parser.current_value() == "(" => {
            parser.advance()?;
            let expr = parse_arithmetic_expr(parser)?;
            parser.expect_value(TokenKind::Parenthesis, ")")?;

            Ok(expr)
        }
        _ => {
            parser.record(Diagnostic::InvalidFactor);

            // Consume the offender for forward progress, unless it is a
            // structural token the enclosing rule needs to see.
            if !matches!(
                parser.current_kind(),
                TokenKind::Keyword | TokenKind::Scope | TokenKind::Delimiter | TokenKind::Eof
            ) {
                parser.advance()?;
            }

            Ok(error_factor())
        }
    }
}

fn error_factor() -> Node {
    Node::Factor {
        value: FactorValue::Int(0),
        ty: VarType::None,
    }
}
