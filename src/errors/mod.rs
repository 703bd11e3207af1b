//! Error types and error handling for the parser.
//!
//! This module defines the errors a parse can end with. It includes:
//!
//! - An error structure carrying the source position of the failure
//! - The `SyntaxError` raised when a token group is cut short
//! - Error naming and tips used when rendering diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
