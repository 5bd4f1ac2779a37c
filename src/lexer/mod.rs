//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of keywords, builtin type names and identifiers
//! - Decoding of integer, char and string literals
//! - Token position tracking (offset, line, column) for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
