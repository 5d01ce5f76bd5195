use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, KEYWORDS};

pub type PatternHandler = fn(&mut Lexer, &Regex) -> Result<Option<Token>, Error>;

pub struct TokenPattern {
    regex: Regex,
    handler: PatternHandler,
}

lazy_static! {
    /// Ordered pattern table; the first pattern matching at the cursor wins,
    /// so multi-character operators sit above their single-character prefixes
    /// and the bare `!` trap sits below `!=`.
    static ref PATTERNS: Vec<TokenPattern> = vec![
        TokenPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        TokenPattern { regex: Regex::new("[0-9]+(\\.[0-9]*)?").unwrap(), handler: number_handler },
        TokenPattern { regex: Regex::new("[ \t\r\x0c]+").unwrap(), handler: skip_handler },
        TokenPattern { regex: Regex::new("\n").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Delimiter, "\n") },
        TokenPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "==") },
        TokenPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "!=") },
        TokenPattern { regex: Regex::new("<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "<=") },
        TokenPattern { regex: Regex::new(">=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, ">=") },
        TokenPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "=") },
        TokenPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "<") },
        TokenPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, ">") },
        TokenPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "+") },
        TokenPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "-") },
        TokenPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "*") },
        TokenPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "/") },
        TokenPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Parenthesis, "(") },
        TokenPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Parenthesis, ")") },
        TokenPattern { regex: Regex::new("\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Scope, "{") },
        TokenPattern { regex: Regex::new("\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Scope, "}") },
        TokenPattern { regex: Regex::new("!").unwrap(), handler: bang_handler },
    ];
}

/// Lazy tokenizer over an in-memory source string. State is a single forward
/// read cursor; tokens are produced one at a time through `next_token`.
pub struct Lexer {
    source: String,
    pos: i32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("input"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn pos(&self) -> i32 {
        self.pos
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn advance_n(&mut self, n: i32) {
        self.pos += n;
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos as usize..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }

    /// Returns the next token, or the EOF sentinel once input is exhausted.
    ///
    /// An unrecognised character, or a `!` not followed by `=`, aborts the
    /// whole analysis with a fatal `Error` -- no resynchronization is
    /// attempted at the lexical level.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        while !self.at_eof() {
            let mut matched: Option<&TokenPattern> = None;

            for pattern in PATTERNS.iter() {
                if let Some(found) = pattern.regex.find(self.remainder()) {
                    if found.start() == 0 {
                        matched = Some(pattern);
                        break;
                    }
                }
            }

            let pattern = match matched {
                Some(pattern) => pattern,
                None => {
                    return Err(Error::new(
                        ErrorImpl::UnrecognisedCharacter { character: self.at() },
                        Position(self.pos as u32, Rc::clone(&self.file)),
                    ))
                }
            };

            if let Some(token) = (pattern.handler)(self, &pattern.regex)? {
                return Ok(token);
            }
        }

        Ok(MK_TOKEN!(
            TokenKind::Eof,
            String::from("EOF"),
            Span {
                start: Position(self.pos as u32, Rc::clone(&self.file)),
                end: Position(self.pos as u32, Rc::clone(&self.file)),
            }
        ))
    }
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let value = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    let kind = if KEYWORDS.contains(value.as_str()) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };

    let token = MK_TOKEN!(
        kind,
        value.clone(),
        Span {
            start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
            end: Position((lexer.pos + value.len() as i32) as u32, Rc::clone(&lexer.file)),
        }
    );
    lexer.advance_n(value.len() as i32);

    Ok(Some(token))
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let value = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    // A fractional separator anywhere in the lexeme makes it a float literal.
    let kind = if value.contains('.') {
        TokenKind::FNumber
    } else {
        TokenKind::Number
    };

    let token = MK_TOKEN!(
        kind,
        value.clone(),
        Span {
            start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
            end: Position((lexer.pos + value.len() as i32) as u32, Rc::clone(&lexer.file)),
        }
    );
    lexer.advance_n(value.len() as i32);

    Ok(Some(token))
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let matched = regex.find(lexer.remainder()).unwrap().end();
    lexer.advance_n(matched as i32);

    Ok(None)
}

fn bang_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<Option<Token>, Error> {
    Err(Error::new(
        ErrorImpl::IncompleteOperator,
        Position(lexer.pos as u32, Rc::clone(&lexer.file)),
    ))
}

/// Eagerly drains the lexer into a token list ending with the EOF sentinel.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);

        if done {
            break;
        }
    }

    Ok(tokens)
}
