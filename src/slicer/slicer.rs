use std::fmt::Display;

use log::trace;

use crate::{lexer::tokens::Token, Position};

/// Which end of the token stream groups are pulled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

impl Direction {
    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::RightToLeft)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::LeftToRight => write!(f, "left-to-right"),
            Direction::RightToLeft => write!(f, "right-to-left"),
        }
    }
}

/// Outcome of pulling one group from a [`Slicer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slice {
    /// Exactly the requested number of tokens, in source order.
    Group(Vec<Token>),
    /// No tokens were left. This is the normal end of a parse.
    EndOfInput,
    /// Some tokens were left, but fewer than requested.
    Incomplete { found: usize, expected: usize },
}

/// Cursor over an owned token stream.
///
/// The tokens that have not been consumed yet always form one contiguous
/// window `front..back`. Groups are taken from the front or the back of that
/// window depending on the direction, and are always handed out in their
/// original left-to-right order.
#[derive(Debug, Clone)]
pub struct Slicer {
    tokens: Vec<Token>,
    front: usize,
    back: usize,
    direction: Direction,
}

impl Slicer {
    pub fn new(tokens: Vec<Token>, direction: Direction) -> Self {
        let back = tokens.len();

        Slicer {
            tokens,
            front: 0,
            back,
            direction,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.back - self.front
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Start of the first unconsumed token, used to point diagnostics at the
    /// part of the input that could not be grouped.
    pub fn position(&self) -> Position {
        if self.is_empty() {
            return Position::null();
        }

        self.tokens[self.front].span.start
    }

    /// Pulls the next `n` tokens.
    ///
    /// The cursor only moves when a full group is available; an incomplete
    /// pull leaves every token in place.
    pub fn slice(&mut self, n: usize) -> Slice {
        debug_assert!(n > 0, "group size must be positive");

        let remaining = self.remaining();

        if remaining == 0 {
            return Slice::EndOfInput;
        }

        if remaining < n {
            trace!("Slice of {} cut short, {} token(s) left", n, remaining);
            return Slice::Incomplete {
                found: remaining,
                expected: n,
            };
        }

        let (start, end) = match self.direction {
            Direction::LeftToRight => (self.front, self.front + n),
            Direction::RightToLeft => (self.back - n, self.back),
        };

        match self.direction {
            Direction::LeftToRight => self.front = end,
            Direction::RightToLeft => self.back = start,
        }

        trace!("Sliced tokens {}..{} ({})", start, end, self.direction);
        Slice::Group(self.tokens[start..end].to_vec())
    }
}
