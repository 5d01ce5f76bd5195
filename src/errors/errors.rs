use std::fmt::Display;

use thiserror::Error;

use crate::{ast::ast::VarType, lexer::tokens::TokenKind, Position};

/// A fatal error: lexical analysis hit input it cannot tokenize. Unlike
/// diagnostics, this aborts the whole pipeline.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::IncompleteOperator => "IncompleteOperator",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::IncompleteOperator => {
                ErrorTip::Suggestion(String::from("`!` is only valid as part of `!=`"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("`!` not followed by `=`")]
    IncompleteOperator,
}

/// A recoverable syntax or semantic issue. Diagnostics are appended to the
/// parse's ordered list and rendered to the user as plain strings; they
/// never interrupt the parse.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Diagnostic {
    #[error("Variable {name} has already been declared in the current scope")]
    AlreadyDeclared { name: String },
    #[error("Variable {name} has not been declared in the current or any enclosing scopes")]
    NotDeclared { name: String },
    #[error("Type Mismatch between {left} and {right}")]
    TypeMismatch { left: VarType, right: VarType },
    #[error("Invalid statement")]
    InvalidStatement,
    #[error("Invalid factor")]
    InvalidFactor,
    #[error("Invalid number {token}")]
    InvalidNumber { token: String },
    #[error("Expected token of type {expected}, but found {found}")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("Expected token `{expected}`, but found `{found}`")]
    UnexpectedLexeme { expected: String, found: String },
}
