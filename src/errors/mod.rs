//! Error types and error handling for the tokenizer.
//!
//! This module defines the error types raised while turning a source file
//! into tokens. It includes:
//!
//! - Error structures carrying the source position of the failure
//! - Variants for I/O, preprocessing, lexing and token stream misuse
//! - Stable error names and suggestions used by diagnostics

pub mod errors;
