//! Constants describing the resource/relation language.

use crate::slicer::Direction;

/// Separates tokens in the source string.
pub const DELIMITER: char = ':';

/// Number of tokens the parser treats as one unit when feeding the visitor.
pub const GROUP_SIZE: usize = 1;

/// Groups are authored left-to-right but consumed from the right.
pub const DIRECTION: Direction = Direction::RightToLeft;

/// Tokens making up the root group: `property:relation:entity`.
pub const ROOT_NODE_SIZE: usize = 3;

/// Tokens making up every child group: `relation:entity`.
pub const CHILD_NODE_SIZE: usize = 2;
