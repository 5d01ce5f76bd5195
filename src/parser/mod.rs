//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the single-pass, one-token-lookahead recursive
//! descent parser. Semantic checking runs inline with parsing:
//!
//! - Statement parsing (declarations, assignments, control flow)
//! - Expression parsing over the factor/term/expression precedence levels
//! - Scope stack mutation around block boundaries
//! - Type resolution stamped onto nodes at construction time
//! - Diagnostic accumulation with guaranteed forward progress on
//!   malformed input

pub mod expr;
pub mod parser;
pub mod stmt;
