#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::ast::Node,
    errors::errors::{Diagnostic, Error, ErrorTip},
    lexer::lexer::Lexer,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod scope;

extern crate regex;

#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// The outcome of one front-end invocation: the AST root as built (usable
/// when `diagnostics` is empty) and every recoverable issue in the order it
/// was recorded.
#[derive(Debug)]
pub struct Analysis {
    pub program: Node,
    pub diagnostics: Vec<Diagnostic>,
}

impl Analysis {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Renders the diagnostics as human-readable strings.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.to_string()).collect()
    }
}

/// Runs the whole front end over an in-memory source string.
///
/// Builds a fresh lexer, parser, and scope stack per call; nothing is shared
/// between invocations. Returns `Err` only for fatal lexical errors -- syntax
/// and semantic issues are collected into `Analysis::diagnostics` and never
/// abort the parse.
pub fn analyze(source: &str, file: Option<String>) -> Result<Analysis, Error> {
    let lexer = Lexer::new(String::from(source), file);
    let (parser, program) = parse(lexer)?;

    Ok(Analysis {
        program,
        diagnostics: parser.into_diagnostics(),
    })
}

pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len().saturating_sub(1));

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    (line_number, String::new(), 0)
}

pub fn display_error(error: &Error, source: &str) {
    /*
        Error: name (tip)
        -> input
           |
        20 | int a = @
           | --------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", position.1);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let source = "int a = 5\nfloat b = 2.5\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 4);
        assert_eq!(line_number, 1);
        assert_eq!(line, "int a = 5\n");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 16);
        assert_eq!(line_number, 2);
        assert_eq!(line, "float b = 2.5\n");
        assert_eq!(line_pos, 6);
    }

    #[test]
    fn test_get_line_at_position_past_end() {
        let (line_number, _, _) = super::get_line_at_position("int a = 5", 200);
        assert_eq!(line_number, 1);
    }
}
