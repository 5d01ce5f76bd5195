//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and floats)
//! - Operators, including the two-character forms
//! - Parentheses, block braces, and statement delimiters
//! - Fatal error cases

use super::{lexer::tokenize, tokens::TokenKind};

#[test]
fn test_tokenize_keywords() {
    let source = "int float if else while do then".to_string();
    let tokens = tokenize(source, Some("test.mini".to_string())).unwrap();

    for token in &tokens[..7] {
        assert_eq!(token.kind, TokenKind::Keyword);
    }
    assert_eq!(tokens[0].value, "int");
    assert_eq!(tokens[1].value, "float");
    assert_eq!(tokens[2].value, "if");
    assert_eq!(tokens[3].value, "else");
    assert_eq!(tokens[4].value, "while");
    assert_eq!(tokens[5].value, "do");
    assert_eq!(tokens[6].value, "then");
    assert_eq!(tokens[7].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar_123 _underscore CamelCase iff".to_string();
    let tokens = tokenize(source, Some("test.mini".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar_123");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "_underscore");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "CamelCase");
    // Keyword prefix does not make an identifier a keyword
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "iff");
    assert_eq!(tokens[5].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 100.5".to_string();
    let tokens = tokenize(source, Some("test.mini".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::FNumber);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].kind, TokenKind::FNumber);
    assert_eq!(tokens[3].value, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_trailing_fractional_separator() {
    let source = "5.".to_string();
    let tokens = tokenize(source, Some("test.mini".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::FNumber);
    assert_eq!(tokens[0].value, "5.");
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / == != <= >= = < >".to_string();
    let tokens = tokenize(source, Some("test.mini".to_string())).unwrap();

    let expected = ["+", "-", "*", "/", "==", "!=", "<=", ">=", "=", "<", ">"];
    for (token, value) in tokens.iter().zip(expected.iter()) {
        assert_eq!(token.kind, TokenKind::Operator);
        assert_eq!(token.value, *value);
    }
    assert_eq!(tokens[11].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_adjacent_compound_operators() {
    let source = "a<=b".to_string();
    let tokens = tokenize(source, Some("test.mini".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Operator);
    assert_eq!(tokens[1].value, "<=");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_parentheses_and_braces_are_distinct() {
    let source = "( ) { }".to_string();
    let tokens = tokenize(source, Some("test.mini".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Parenthesis);
    assert_eq!(tokens[0].value, "(");
    assert_eq!(tokens[1].kind, TokenKind::Parenthesis);
    assert_eq!(tokens[1].value, ")");
    assert_eq!(tokens[2].kind, TokenKind::Scope);
    assert_eq!(tokens[2].value, "{");
    assert_eq!(tokens[3].kind, TokenKind::Scope);
    assert_eq!(tokens[3].value, "}");
}

#[test]
fn test_tokenize_newline_is_delimiter() {
    let source = "int x = 1\nint y = 2".to_string();
    let tokens = tokenize(source, Some("test.mini".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Operator);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[4].kind, TokenKind::Delimiter);
    assert_eq!(tokens[5].kind, TokenKind::Keyword);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let source = "  int \t x \r =   42  ".to_string();
    let tokens = tokenize(source, Some("test.mini".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Operator);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[4].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_empty_source() {
    let source = "".to_string();
    let tokens = tokenize(source, Some("test.mini".to_string())).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let source = "int x = @".to_string();
    let result = tokenize(source, Some("test.mini".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "UnrecognisedCharacter");
}

#[test]
fn test_tokenize_bare_exclamation_is_fatal() {
    let source = "a ! b".to_string();
    let result = tokenize(source, Some("test.mini".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "IncompleteOperator");
}

#[test]
fn test_tokenize_not_equals_is_accepted() {
    let source = "a != b".to_string();
    let tokens = tokenize(source, Some("test.mini".to_string())).unwrap();

    assert_eq!(tokens[1].kind, TokenKind::Operator);
    assert_eq!(tokens[1].value, "!=");
}

#[test]
fn test_tokenize_mixed_expression() {
    let source = "x + 5 * (y - 3)".to_string();
    let tokens = tokenize(source, Some("test.mini".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Operator);
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[3].kind, TokenKind::Operator);
    assert_eq!(tokens[4].kind, TokenKind::Parenthesis);
    assert_eq!(tokens[5].kind, TokenKind::Identifier);
    assert_eq!(tokens[6].kind, TokenKind::Operator);
    assert_eq!(tokens[7].kind, TokenKind::Number);
    assert_eq!(tokens[8].kind, TokenKind::Parenthesis);
    assert_eq!(tokens[9].kind, TokenKind::Eof);
}

#[test]
fn test_lazy_next_token() {
    let mut lexer = super::lexer::Lexer::new("while x do".to_string(), None);

    let first = lexer.next_token().unwrap();
    assert_eq!(first.kind, TokenKind::Keyword);
    assert_eq!(first.value, "while");

    let second = lexer.next_token().unwrap();
    assert_eq!(second.kind, TokenKind::Identifier);

    let third = lexer.next_token().unwrap();
    assert_eq!(third.kind, TokenKind::Keyword);

    let fourth = lexer.next_token().unwrap();
    assert_eq!(fourth.kind, TokenKind::Eof);

    // Exhausted input keeps answering with the EOF sentinel
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
}
