//! Lexical analysis module for the parser.
//!
//! This module contains the lexer (tokenizer) that converts an input string
//! into a stream of tokens for grouping. It handles:
//!
//! - Splitting on the grammar delimiter using a regex pattern
//! - Preserving empty tokens between adjacent delimiters
//! - Token span tracking for error reporting

pub mod lexer;
pub mod tokens;
