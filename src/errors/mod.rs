//! Error types and error handling for the front end.
//!
//! This module defines the two error families of the pipeline:
//!
//! - `Error`/`ErrorImpl`: fatal lexical errors carrying a source position
//! - `Diagnostic`: recoverable syntax and semantic issues, collected into
//!   an ordered list during parsing and rendered as message strings

pub mod errors;
