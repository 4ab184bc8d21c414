use std::fmt::Display;

use thiserror::Error;

use crate::{config::MAX_INTEGER, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// True for errors caused by calling the token stream against its
    /// preconditions rather than by the input text.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UnexpectedEndOfInput | ErrorImpl::NoCurrentToken
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::FileNotFound { .. } => "FileNotFound",
            ErrorImpl::IoError { .. } => "IOError",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::IntegerOutOfRange { .. } => "IntegerOutOfRange",
            ErrorImpl::InvalidIdentifier { .. } => "InvalidIdentifier",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::NoCurrentToken => "NoCurrentToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::FileNotFound { path } => {
                ErrorTip::Suggestion(format!("No readable file at `{}`", path))
            }
            ErrorImpl::IoError { message } => ErrorTip::Suggestion(message.clone()),
            ErrorImpl::UnterminatedComment => ErrorTip::Suggestion(String::from(
                "Block comment is never closed, add a matching `*/`",
            )),
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String constants must close with `\"` on the line they start",
            )),
            ErrorImpl::IntegerOutOfRange { literal } => ErrorTip::Suggestion(format!(
                "Integer constant `{}` is above the limit of {}",
                literal, MAX_INTEGER
            )),
            ErrorImpl::InvalidIdentifier { token } => ErrorTip::Suggestion(format!(
                "`{}` is not a valid identifier, use letters, digits and `_`",
                token
            )),
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::None,
            ErrorImpl::NoCurrentToken => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.position)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("file not found: {path:?}")]
    FileNotFound { path: String },
    #[error("i/o error: {message}")]
    IoError { message: String },
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("unterminated string constant")]
    UnterminatedString,
    #[error("integer constant out of range: {literal:?}")]
    IntegerOutOfRange { literal: String },
    #[error("invalid identifier: {token:?}")]
    InvalidIdentifier { token: String },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("no current token, advance has not been called")]
    NoCurrentToken,
}
