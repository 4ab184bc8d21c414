//! Comment and line-structure removal.
//!
//! Raw source is cleaned one physical line at a time: surrounding whitespace
//! is trimmed, block comments are dropped whole, line comments are cut off
//! and every kept line is followed by a single [`LINE_DELIMITER`]. The result
//! is an immutable [`SourceBuffer`] that still knows where each of its
//! characters came from in the original text.

use std::rc::Rc;

use tracing::debug;

use crate::{
    config::{BLOCK_COMMENT_CLOSE, BLOCK_COMMENT_OPEN, LINE_COMMENT, LINE_DELIMITER},
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Where a kept line begins in the buffer and in the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineStart {
    offset: usize,
    line: u32,
    column: u32,
}

/// The cleaned character sequence handed to the lexer.
///
/// Offsets are character indices. Two tokens that were on different lines in
/// the original are always separated by at least one delimiter.
#[derive(Debug, Clone)]
pub struct SourceBuffer {
    chars: Vec<char>,
    lines: Vec<LineStart>,
    /// Offsets of the delimiters inserted at original line ends, ascending.
    line_breaks: Vec<usize>,
    file: Rc<String>,
}

impl SourceBuffer {
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn get(&self, offset: usize) -> Option<char> {
        self.chars.get(offset).copied()
    }

    pub fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end.min(self.chars.len())].iter().collect()
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// True when `offset` holds a delimiter that replaced an original line end.
    pub fn is_line_break(&self, offset: usize) -> bool {
        self.line_breaks.binary_search(&offset).is_ok()
    }

    /// Maps a buffer offset back to its line and column in the original text.
    pub fn position_at(&self, offset: usize) -> Position {
        let index = self
            .lines
            .partition_point(|start| start.offset <= offset)
            .saturating_sub(1);

        match self.lines.get(index) {
            Some(start) => Position::new(
                start.line,
                start.column + (offset.saturating_sub(start.offset)) as u32,
                Rc::clone(&self.file),
            ),
            None => Position::new(1, 1, Rc::clone(&self.file)),
        }
    }

    fn push_line(&mut self, text: &str, line: u32, column: u32) {
        self.lines.push(LineStart {
            offset: self.chars.len(),
            line,
            column,
        });
        self.chars.extend(text.chars());
        self.line_breaks.push(self.chars.len());
        self.chars.push(LINE_DELIMITER);
    }
}

/// Builds the cleaned buffer for `raw`.
///
/// Fails only with `UnterminatedComment`, positioned at the opening marker.
pub fn build(raw: &str, file: Rc<String>) -> Result<SourceBuffer, Error> {
    let mut buffer = SourceBuffer {
        chars: Vec::with_capacity(raw.len()),
        lines: vec![],
        line_breaks: vec![],
        file,
    };

    let mut comment_lines = 0usize;
    let mut lines = raw.lines().enumerate();

    while let Some((index, raw_line)) = lines.next() {
        let line_number = index as u32 + 1;
        let trimmed = raw_line.trim();
        let column = leading_whitespace(raw_line) as u32 + 1;

        if let Some(mut rest) = trimmed.strip_prefix(BLOCK_COMMENT_OPEN) {
            let opened_at = Position::new(line_number, column, Rc::clone(&buffer.file));

            while !rest.contains(BLOCK_COMMENT_CLOSE) {
                match lines.next() {
                    Some((_, next_line)) => rest = next_line,
                    None => return Err(Error::new(ErrorImpl::UnterminatedComment, opened_at)),
                }
                comment_lines += 1;
            }

            comment_lines += 1;
            continue;
        }

        buffer.push_line(strip_line_comment(trimmed), line_number, column);
    }

    debug!(
        file = %buffer.file,
        lines = buffer.lines.len(),
        comment_lines,
        chars = buffer.len(),
        "preprocessed source"
    );

    Ok(buffer)
}

/// Cuts `line` at the first line comment marker outside a string constant.
pub fn strip_line_comment(line: &str) -> &str {
    let mut in_string = false;

    for (index, c) in line.char_indices() {
        if c == '"' {
            in_string = !in_string;
        } else if !in_string && line[index..].starts_with(LINE_COMMENT) {
            return &line[..index];
        }
    }

    line
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().count() - line.trim_start().chars().count()
}
