use std::fmt::Display;

use thiserror::Error;

use crate::{slicer::Direction, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InsufficientTokens { .. } => "SyntaxError",
            ErrorImpl::UnsupportedVisitor { .. } => "UnsupportedVisitor",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InsufficientTokens { expected, found } => ErrorTip::Suggestion(format!(
                "Found {} dangling token(s) where a group of {} was expected",
                found, expected
            )),
            ErrorImpl::UnsupportedVisitor { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Insufficient tokens; expected {expected}")]
    InsufficientTokens { expected: usize, found: usize },
    #[error("visitor does not support group size {group_size} read {direction}")]
    UnsupportedVisitor {
        group_size: usize,
        direction: Direction,
    },
}
