//! Utility macros for the parser.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span between two byte offsets
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!("entity".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($value:expr, $span:expr) => {
        Token {
            value: $value,
            span: $span,
        }
    };
}

/// Creates a Span from a start and end byte offset.
///
/// # Example
///
/// ```ignore
/// let span = MK_SPAN!(0, 6);
/// ```
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $end:expr) => {
        Span {
            start: Position($start as u32),
            end: Position($end as u32),
        }
    };
}
