//! Error types and error handling for the front end.
//!
//! This module defines the single error type returned by the lexer and the
//! parser. It includes:
//!
//! - Error structures with source position information
//! - Lexical and syntactic error variants
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
