//! Lexical analysis module for the front end.
//!
//! This module contains the lexer that converts source text into a lazy,
//! one-at-a-time sequence of tokens. It handles:
//!
//! - Tokenization of source text using regex patterns
//! - Recognition of keywords, identifiers, and numeric literals
//! - Multi-character operators via ordered pattern matching
//! - Newlines as statement delimiters; other whitespace is skipped
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
