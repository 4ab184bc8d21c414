use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    config::MAX_INTEGER,
    errors::errors::{Error, ErrorImpl},
    Span, MK_TOKEN,
};

use super::{
    preprocessor::{self, SourceBuffer},
    tokens::{Keyword, Symbol, Token, TokenKind},
};

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// Scanner states. Every call to [`Lexer::next_token`] starts in
/// `SkippingDelimiters` and leaves through exactly one of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    SkippingDelimiters,
    InSymbol(Symbol),
    InString,
    InNumber,
    InWord,
}

pub fn is_delimiter(c: char) -> bool {
    c.is_whitespace()
}

fn ends_word(c: char) -> bool {
    is_delimiter(c) || Symbol::is_symbol(c) || c == '"'
}

#[derive(Debug, Clone)]
pub struct Lexer {
    buffer: SourceBuffer,
    pos: usize,
    failed: bool,
}

impl Lexer {
    /// Preprocesses `source` and positions the cursor at its start.
    pub fn new(source: &str, file: Option<String>) -> Result<Lexer, Error> {
        let file_name = Rc::new(file.unwrap_or_else(|| String::from("<input>")));
        let buffer = preprocessor::build(source, file_name)?;

        Ok(Lexer::from_buffer(buffer))
    }

    pub fn from_buffer(buffer: SourceBuffer) -> Lexer {
        Lexer {
            buffer,
            pos: 0,
            failed: false,
        }
    }

    pub fn buffer(&self) -> &SourceBuffer {
        &self.buffer
    }

    pub fn at(&self) -> Option<char> {
        self.buffer.get(self.pos)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.buffer.len()
    }

    /// True when another token follows the cursor. Trailing delimiters do not
    /// count, and a lexer that has reported an error has nothing left.
    pub fn has_next(&self) -> bool {
        if self.failed {
            return false;
        }

        let mut pos = self.pos;
        while let Some(c) = self.buffer.get(pos) {
            if !is_delimiter(c) {
                return true;
            }
            pos += 1;
        }

        false
    }

    /// Scans the next token. Fails with `UnexpectedEndOfInput` when
    /// [`has_next`](Self::has_next) is false; any other error ends the scan.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        if self.failed {
            return Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput,
                self.buffer.position_at(self.pos),
            ));
        }

        let result = self.scan();

        match &result {
            Ok(token) => trace!(token = %token, position = %token.span.start, "emitted token"),
            Err(error) if !error.is_contract_violation() => {
                debug!(error = %error, "lexing stopped");
                self.failed = true;
                self.pos = self.buffer.len();
            }
            Err(_) => {}
        }

        result
    }

    fn scan(&mut self) -> Result<Token, Error> {
        let mut state = LexState::SkippingDelimiters;
        let mut start = self.pos;

        loop {
            match state {
                LexState::SkippingDelimiters => {
                    let Some(c) = self.at() else {
                        return Err(Error::new(
                            ErrorImpl::UnexpectedEndOfInput,
                            self.buffer.position_at(self.pos),
                        ));
                    };

                    if is_delimiter(c) {
                        self.pos += 1;
                        continue;
                    }

                    start = self.pos;
                    state = if let Some(symbol) = Symbol::from_char(c) {
                        LexState::InSymbol(symbol)
                    } else if c == '"' {
                        LexState::InString
                    } else if c.is_ascii_digit() {
                        LexState::InNumber
                    } else {
                        LexState::InWord
                    };
                }
                LexState::InSymbol(symbol) => return Ok(self.read_symbol(symbol, start)),
                LexState::InString => return self.read_string(start),
                LexState::InNumber => return self.read_number(start),
                LexState::InWord => return self.read_word(start),
            }
        }
    }

    fn span(&self, start: usize) -> Span {
        Span {
            start: self.buffer.position_at(start),
            end: self.buffer.position_at(self.pos),
        }
    }

    fn read_symbol(&mut self, symbol: Symbol, start: usize) -> Token {
        self.pos += 1;

        MK_TOKEN!(TokenKind::Symbol(symbol), self.span(start))
    }

    fn read_string(&mut self, start: usize) -> Result<Token, Error> {
        let mut pos = start + 1;

        loop {
            if self.buffer.is_line_break(pos) {
                return Err(Error::new(
                    ErrorImpl::UnterminatedString,
                    self.buffer.position_at(start),
                ));
            }

            match self.buffer.get(pos) {
                Some('"') => break,
                Some(_) => pos += 1,
                None => {
                    return Err(Error::new(
                        ErrorImpl::UnterminatedString,
                        self.buffer.position_at(start),
                    ))
                }
            }
        }

        let value = self.buffer.slice(start + 1, pos);
        self.pos = pos + 1;

        Ok(MK_TOKEN!(TokenKind::StringConstant(value), self.span(start)))
    }

    fn read_number(&mut self, start: usize) -> Result<Token, Error> {
        while self.at().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }

        let literal = self.buffer.slice(start, self.pos);
        let value = match literal.parse::<u16>() {
            Ok(value) if value <= MAX_INTEGER => value,
            _ => {
                return Err(Error::new(
                    ErrorImpl::IntegerOutOfRange { literal },
                    self.buffer.position_at(start),
                ))
            }
        };

        Ok(MK_TOKEN!(TokenKind::IntegerConstant(value), self.span(start)))
    }

    fn read_word(&mut self, start: usize) -> Result<Token, Error> {
        while self.at().is_some_and(|c| !ends_word(c)) {
            self.pos += 1;
        }

        let word = self.buffer.slice(start, self.pos);

        let kind = if let Some(keyword) = Keyword::lookup(&word) {
            TokenKind::Keyword(keyword)
        } else if IDENTIFIER_PATTERN.is_match(&word) {
            TokenKind::Identifier(word)
        } else {
            return Err(Error::new(
                ErrorImpl::InvalidIdentifier { token: word },
                self.buffer.position_at(start),
            ));
        };

        Ok(MK_TOKEN!(kind, self.span(start)))
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }

        Some(self.next_token())
    }
}

pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let lex = Lexer::new(source, file)?;
    let file_name = Rc::clone(lex.buffer().file());

    let tokens = lex.collect::<Result<Vec<Token>, Error>>()?;

    debug!(file = %file_name, tokens = tokens.len(), "tokenized source");
    Ok(tokens)
}
