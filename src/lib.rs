#![allow(clippy::module_inception)]

use std::{
    fmt::{Display, Write},
    rc::Rc,
};

use crate::errors::errors::{Error, ErrorTip};

pub mod config;
pub mod driver;
pub mod errors;
pub mod lexer;
pub mod logging;
pub mod macros;
pub mod serializer;

extern crate regex;

/// A location in the original source text. Lines and columns are 1-based;
/// line 0 marks a position that does not point into any source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }

    pub fn null() -> Self {
        Position::new(0, 0, Rc::new(String::from("<null>")))
    }

    /// A position naming a file but no location inside it.
    pub fn file_only(file: Rc<String>) -> Self {
        Position::new(0, 0, file)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.file)
        } else {
            write!(f, "{}:{}:{}", self.file, self.line, self.column)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the text of the 1-based `line` in `source`, without its line ending.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .lines()
        .nth((line - 1) as usize)
}


/// Writes a diagnostic for `error` to stderr, quoting the offending line of
/// `source` when the error carries a location.
pub fn display_error(error: &Error, source: Option<&str>) {
    eprint!("{}", format_error(error, source));
}

/// Builds the text printed by [`display_error`].
pub fn format_error(error: &Error, source: Option<&str>) -> String {
    /*
        Error: UnterminatedString (...)
        -> Main.jack:3:17
          |
        3 | let s = "oops;
          | --------^
    */

    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(output, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(output, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }

    let position = error.get_position();
    let _ = writeln!(output, "-> {}", position);

    let Some(line_text) = source.and_then(|source| get_line_at_position(source, position.line))
    else {
        return output;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(output, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let _ = writeln!(output, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    let _ = writeln!(output, "{:>padding$} {:->arrows$}", "|", "^");
    output
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start();
    (trimmed, string.chars().count() - trimmed.chars().count())
}
