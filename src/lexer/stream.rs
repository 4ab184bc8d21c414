//! Forward token stream over a tokenized source file.
//!
//! The whole file is tokenized up front, so the stream can also be peeked,
//! indexed and rewound by a parser that needs more than one pass.

use std::rc::Rc;

use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{lexer::Lexer, tokens::Token};

#[derive(Debug, Clone)]
pub struct TokenStream {
    /// All tokens of the source, in order
    tokens: Vec<Token>,
    /// Index of the token the next `advance` makes current
    pos: usize,
    /// Where the source ends, used for end-of-input errors
    end: Position,
}

impl TokenStream {
    /// Tokenizes `source` completely. Input errors surface here, before any
    /// token is handed out.
    pub fn new(source: &str, file: Option<String>) -> Result<Self, Error> {
        let lexer = Lexer::new(source, file)?;
        let buffer = lexer.buffer();
        let end = buffer.position_at(buffer.len());

        let tokens = lexer.collect::<Result<Vec<Token>, Error>>()?;
        debug!(file = %end.file, tokens = tokens.len(), "token stream ready");

        Ok(TokenStream {
            tokens,
            pos: 0,
            end,
        })
    }

    pub fn from_tokens(tokens: Vec<Token>, file: Rc<String>) -> Self {
        let end = tokens
            .last()
            .map(|token| token.span.end.clone())
            .unwrap_or_else(|| Position::file_only(file));

        TokenStream {
            tokens,
            pos: 0,
            end,
        }
    }

    pub fn has_more(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Makes the next token current and returns it.
    pub fn advance(&mut self) -> Result<&Token, Error> {
        if !self.has_more() {
            return Err(Error::new(ErrorImpl::UnexpectedEndOfInput, self.end.clone()));
        }

        self.pos += 1;
        Ok(&self.tokens[self.pos - 1])
    }

    /// The token made current by the last `advance`.
    pub fn current(&self) -> Result<&Token, Error> {
        match self.pos.checked_sub(1) {
            Some(index) => Ok(&self.tokens[index]),
            None => Err(Error::new(
                ErrorImpl::NoCurrentToken,
                Position::file_only(Rc::clone(&self.end.file)),
            )),
        }
    }

    /// The token the next `advance` would return.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Rewinds to before the first token; `current` fails again until the
    /// next `advance`.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}
