//! Visitor module turning token groups into nodes.
//!
//! A visitor decides which grammar the parser speaks. It:
//!
//! - Negotiates the group size and reading direction it supports
//! - Builds a root node from the first group and child nodes afterwards
//! - Reports groups cut short as syntax errors

pub mod visitor;
