//! Parser module for building node chains.
//!
//! This module contains the parser that drives a visitor over a tokenized
//! string. It provides:
//!
//! - `parse` - collect every node of a string at once
//! - `parse_lazy` - yield nodes one step at a time
//! - `parse_gen` / `parse_with` - the same loop over any visitor
//!
//! A parse stops at the first group that is cut short and reports it as a
//! syntax error.

pub mod parser;
