//! Lexical analysis module for the tokenizer.
//!
//! This module contains everything between raw source text and a sequence
//! of classified tokens:
//!
//! - Comment and line-structure removal (preprocessor)
//! - The scanning state machine with longest-match classification
//! - The token model: keywords, symbols, integer and string constants, identifiers
//! - A forward token stream with random access for downstream consumers
//! - Source position tracking for error reporting

pub mod lexer;
pub mod preprocessor;
pub mod stream;
pub mod tokens;

#[cfg(test)]
mod tests;
