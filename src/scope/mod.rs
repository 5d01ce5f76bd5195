//! Nested lexical scope tracking for the checker.
//!
//! This module maintains the stack of scopes the parser mutates while it
//! walks the program:
//!
//! - A scope is created when a block is entered and discarded when left
//! - Declarations always land in the innermost scope
//! - Name resolution searches innermost to outermost, so nested scopes
//!   may shadow outer bindings

pub mod scope;
