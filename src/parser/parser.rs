//! Parser state and checker actions.
//!
//! The parser owns the lazy lexer, one token of lookahead, the scope stack,
//! and the diagnostics list. Grammar rules live in `stmt.rs` and `expr.rs`
//! as free functions over `&mut Parser`; semantic checking is fused into
//! those rules rather than running as a separate pass, because declare-on-
//! sight and shadow search depend on traversal order.
//!
//! Only lexical errors propagate as `Err`. Every syntax or semantic issue
//! records one diagnostic and the parser keeps going; `synchronize` and the
//! factor-level recovery guarantee forward progress on malformed input.

use crate::{
    ast::ast::{Node, VarType},
    errors::errors::{Diagnostic, Error},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    scope::scope::ScopeStack,
};

use super::stmt::parse_program;

pub struct Parser {
    lexer: Lexer,
    /// The single token of lookahead.
    current: Token,
    scopes: ScopeStack,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    /// Creates a parser, pulling the first token of lookahead.
    pub fn new(mut lexer: Lexer) -> Result<Self, Error> {
        let current = lexer.next_token()?;

        Ok(Parser {
            lexer,
            current,
            scopes: ScopeStack::new(),
            diagnostics: vec![],
        })
    }

    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn current_value(&self) -> &str {
        &self.current.value
    }

    pub fn at_eof(&self) -> bool {
        self.current.kind == TokenKind::Eof
    }

    /// Advances to the next token and returns the consumed one.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.current.kind == TokenKind::Keyword && self.current.value == keyword
    }

    pub fn is_operator(&self, operators: &[&str]) -> bool {
        self.current.kind == TokenKind::Operator
            && operators.contains(&self.current.value.as_str())
    }

    /// Consumes a token of the expected kind, or records a diagnostic and
    /// leaves the token in place.
    pub fn expect(&mut self, expected: TokenKind) -> Result<Option<Token>, Error> {
        if self.current.kind == expected {
            Ok(Some(self.advance()?))
        } else {
            let found = self.current.kind;
            self.record(Diagnostic::UnexpectedToken { expected, found });
            Ok(None)
        }
    }

    /// Like `expect`, but also pins the lexeme. Needed where one kind covers
    /// several lexemes (`{` vs `}`, `=` among the operators).
    pub fn expect_value(
        &mut self,
        expected: TokenKind,
        value: &str,
    ) -> Result<Option<Token>, Error> {
        if self.current.kind == expected && self.current.value == value {
            Ok(Some(self.advance()?))
        } else {
            let found = self.current.value.clone();
            self.record(Diagnostic::UnexpectedLexeme {
                expected: String::from(value),
                found,
            });
            Ok(None)
        }
    }

    /// Abandons the remainder of the current statement: consumes at least
    /// one token (unless already at EOF), then skips to the next statement
    /// delimiter, closing block brace, or EOF.
    pub fn synchronize(&mut self) -> Result<(), Error> {
        if self.at_eof() {
            return Ok(());
        }

        self.advance()?;

        loop {
            match self.current.kind {
                TokenKind::Eof | TokenKind::Delimiter => break,
                TokenKind::Scope if self.current.value == "}" => break,
                _ => {
                    self.advance()?;
                }
            }
        }

        Ok(())
    }

    pub fn record(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn enter_scope(&mut self, label: &str) {
        self.scopes.enter(label);
    }

    pub fn leave_scope(&mut self) {
        self.scopes.leave();
    }

    pub fn scope_depth(&self) -> usize {
        self.scopes.depth()
    }

    /// Duplicate-declaration check: true when the name is still free in the
    /// innermost scope, otherwise records a diagnostic.
    pub fn check_not_declared(&mut self, name: &str) -> bool {
        if self.scopes.is_declared_in_current(name) {
            self.record(Diagnostic::AlreadyDeclared {
                name: String::from(name),
            });
            false
        } else {
            true
        }
    }

    pub fn declare(&mut self, name: &str, ty: VarType) {
        self.scopes.declare(name, ty);
    }

    /// Resolves a use of `name` against the scope stack, innermost scope
    /// first, recording a diagnostic when it is not bound anywhere.
    pub fn resolve_use(&mut self, name: &str) -> bool {
        if self.scopes.lookup(name).is_some() {
            true
        } else {
            self.record(Diagnostic::NotDeclared {
                name: String::from(name),
            });
            false
        }
    }

    pub fn type_of(&self, name: &str) -> VarType {
        self.scopes.type_of(name)
    }

    /// Compares two operand types and yields the result type. A mismatch
    /// between concrete types records one diagnostic and downgrades to the
    /// `none` sentinel; a sentinel on either side downgrades silently so a
    /// single root cause does not cascade.
    pub fn check_type_match(&mut self, left: VarType, right: VarType) -> VarType {
        if left.is_none() || right.is_none() {
            VarType::None
        } else if left == right {
            left
        } else {
            self.record(Diagnostic::TypeMismatch { left, right });
            VarType::None
        }
    }
}

/// Parses a token stream into an AST root.
///
/// Returns the parser alongside the root so callers can inspect the
/// diagnostics list and scope-stack state after the run. `Err` only for
/// fatal lexical errors.
pub fn parse(lexer: Lexer) -> Result<(Parser, Node), Error> {
    let mut parser = Parser::new(lexer)?;
    let program = parse_program(&mut parser)?;

    Ok((parser, program))
}
