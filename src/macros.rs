//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-text tokens
//!
//! These macros reduce boilerplate in the lexer pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for fixed-text token patterns.
///
/// Generates a handler function that advances the read cursor past the
/// matched text and yields a token with the given kind.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal string value (used for length calculation)
///
/// # Example
///
/// ```ignore
/// TokenPattern {
///     regex: Regex::new("==").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "=="),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            let token = MK_TOKEN!(
                $kind,
                String::from($value),
                Span {
                    start: Position(lexer.pos() as u32, lexer.file()),
                    end: Position(
                        (lexer.pos() + $value.len() as i32) as u32,
                        lexer.file()
                    )
                }
            );
            lexer.advance_n($value.len() as i32);
            Ok(Some(token))
        }
    };
}
