//! Unit tests for the slicer module.

use rstest::rstest;

use super::{Direction, Slice, Slicer};
use crate::lexer::lexer::tokenize;

fn values(slice: Slice) -> Vec<String> {
    match slice {
        Slice::Group(tokens) => tokens.into_iter().map(|t| t.value).collect(),
        other => panic!("Expected a group, got {:?}", other),
    }
}

#[test]
fn test_slice_left_to_right() {
    let mut slicer = Slicer::new(tokenize("a:b:c:d:e", ':'), Direction::LeftToRight);

    assert_eq!(values(slicer.slice(3)), vec!["a", "b", "c"]);
    assert_eq!(values(slicer.slice(2)), vec!["d", "e"]);
    assert_eq!(slicer.slice(2), Slice::EndOfInput);
}

#[test]
fn test_slice_right_to_left_keeps_source_order() {
    let mut slicer = Slicer::new(tokenize("a:b:c:d:e", ':'), Direction::RightToLeft);

    assert_eq!(values(slicer.slice(3)), vec!["c", "d", "e"]);
    assert_eq!(values(slicer.slice(2)), vec!["a", "b"]);
    assert_eq!(slicer.slice(2), Slice::EndOfInput);
}

#[rstest]
#[case(Direction::LeftToRight)]
#[case(Direction::RightToLeft)]
fn test_slice_empty_stream(#[case] direction: Direction) {
    let mut slicer = Slicer::new(vec![], direction);

    assert!(slicer.is_empty());
    assert_eq!(slicer.slice(1), Slice::EndOfInput);
    assert_eq!(slicer.slice(3), Slice::EndOfInput);
}

#[rstest]
#[case(1, 3)]
#[case(2, 3)]
#[case(1, 2)]
fn test_slice_incomplete(#[case] available: usize, #[case] n: usize) {
    let source = vec!["x"; available].join(":");
    let mut slicer = Slicer::new(tokenize(&source, ':'), Direction::RightToLeft);

    assert_eq!(
        slicer.slice(n),
        Slice::Incomplete {
            found: available,
            expected: n
        }
    );
}

#[test]
fn test_slice_incomplete_leaves_cursor_unchanged() {
    let mut slicer = Slicer::new(tokenize("a:b", ':'), Direction::RightToLeft);

    assert!(matches!(slicer.slice(3), Slice::Incomplete { .. }));
    assert_eq!(slicer.remaining(), 2);
    assert_eq!(values(slicer.slice(2)), vec!["a", "b"]);
}

#[test]
fn test_slice_exact_fit() {
    let mut slicer = Slicer::new(tokenize("a:b:c", ':'), Direction::RightToLeft);

    assert_eq!(values(slicer.slice(3)), vec!["a", "b", "c"]);
    assert!(slicer.is_empty());
    assert_eq!(slicer.slice(2), Slice::EndOfInput);
}

#[test]
fn test_slice_single_stray_token_is_incomplete() {
    let mut slicer = Slicer::new(tokenize("x:a:b:c", ':'), Direction::RightToLeft);

    assert_eq!(values(slicer.slice(3)), vec!["a", "b", "c"]);
    assert_eq!(
        slicer.slice(2),
        Slice::Incomplete {
            found: 1,
            expected: 2
        }
    );
}

#[test]
fn test_position_points_at_first_remaining_token() {
    let mut slicer = Slicer::new(tokenize("xy:a:b:c", ':'), Direction::RightToLeft);
    assert_eq!(slicer.position().0, 0);

    let mut ltr = Slicer::new(tokenize("a:b:c:xy", ':'), Direction::LeftToRight);
    ltr.slice(3);
    assert_eq!(ltr.position().0, 6);

    slicer.slice(3);
    slicer.slice(1);
    assert!(slicer.is_empty());
    assert_eq!(slicer.position().0, 0);
}

#[test]
fn test_direction_display() {
    assert_eq!(Direction::LeftToRight.to_string(), "left-to-right");
    assert_eq!(Direction::RightToLeft.to_string(), "right-to-left");
    assert!(Direction::RightToLeft.is_rtl());
    assert!(!Direction::LeftToRight.is_rtl());
}
