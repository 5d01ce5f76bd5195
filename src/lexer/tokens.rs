use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("int");
        set.insert("float");
        set.insert("if");
        set.insert("else");
        set.insert("while");
        set.insert("do");
        set.insert("then");
        set
    };
}

/// The lexical classes of the language. Deliberately coarse: the lexeme
/// itself lives in `Token::value`, so `+` and `==` are both `Operator`.
/// `Parenthesis` covers grouping `(` `)` while `Scope` covers the block
/// braces `{` `}` -- distinct kinds because they drive different parser
/// states.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Number,
    FNumber,
    Identifier,
    Keyword,
    Operator,
    Parenthesis,
    Scope,
    Delimiter,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.value)
    }
}
