//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::slicer::Direction;
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::InsufficientTokens {
            expected: 3,
            found: 2,
        },
        Position(0),
    );

    assert_eq!(error.get_error_name(), "SyntaxError");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::InsufficientTokens {
            expected: 2,
            found: 1,
        },
        Position(42),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_insufficient_tokens_message() {
    let error = Error::new(
        ErrorImpl::InsufficientTokens {
            expected: 3,
            found: 1,
        },
        Position(0),
    );
    assert_eq!(error.to_string(), "Insufficient tokens; expected 3");

    let error = Error::new(
        ErrorImpl::InsufficientTokens {
            expected: 2,
            found: 1,
        },
        Position(0),
    );
    assert_eq!(error.to_string(), "Insufficient tokens; expected 2");
}

#[test]
fn test_unsupported_visitor_error() {
    let error = Error::new(
        ErrorImpl::UnsupportedVisitor {
            group_size: 2,
            direction: Direction::LeftToRight,
        },
        Position(0),
    );

    assert_eq!(error.get_error_name(), "UnsupportedVisitor");
    assert_eq!(
        error.to_string(),
        "visitor does not support group size 2 read left-to-right"
    );
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_kind() {
    let error = Error::new(
        ErrorImpl::InsufficientTokens {
            expected: 2,
            found: 1,
        },
        Position(0),
    );

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::InsufficientTokens {
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::InsufficientTokens {
            expected: 3,
            found: 2,
        },
        Position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => {
            assert_eq!(tip, "Found 2 dangling token(s) where a group of 3 was expected")
        }
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
