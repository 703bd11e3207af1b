//! Fixed-size grouping of tokens.
//!
//! The slicer pulls `n` tokens at a time from a token stream and tells apart
//! a stream that ended cleanly from one that ran out in the middle of a group.

pub mod slicer;

pub use slicer::{Direction, Slice, Slicer};

#[cfg(test)]
mod tests;
