//! File-level entry points used by the command line tool.
//!
//! Output is rendered completely in memory and only then written, so a
//! failed run never leaves a partial artifact behind.

use std::{
    fs, io,
    path::{Path, PathBuf},
    rc::Rc,
};

use tracing::{info, warn};

use crate::{
    config::{has_source_extension, output_path_for, SOURCE_EXTENSION},
    errors::errors::{Error, ErrorImpl},
    lexer::stream::TokenStream,
    serializer::serializer::render,
    Position,
};

fn io_error(error: io::Error, path: &Path) -> Error {
    let file = Rc::new(path.to_string_lossy().into_owned());

    let kind = match error.kind() {
        io::ErrorKind::NotFound => ErrorImpl::FileNotFound {
            path: file.to_string(),
        },
        _ => ErrorImpl::IoError {
            message: error.to_string(),
        },
    };

    Error::new(kind, Position::file_only(file))
}

/// Reads the whole source file into memory.
pub fn read_source(path: &Path) -> Result<String, Error> {
    if !has_source_extension(path) {
        warn!(path = %path.display(), "input is not a .{} file", SOURCE_EXTENSION);
    }

    if path.exists() && !path.is_file() {
        return Err(Error::new(
            ErrorImpl::FileNotFound {
                path: path.to_string_lossy().into_owned(),
            },
            Position::file_only(Rc::new(path.to_string_lossy().into_owned())),
        ));
    }

    fs::read_to_string(path).map_err(|error| io_error(error, path))
}

/// Tokenizes `source` (the contents of `input`) and writes the rendered
/// tokens next to it. Returns the path written.
pub fn tokenize_to_file(input: &Path, source: &str) -> Result<PathBuf, Error> {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    let stream = TokenStream::new(source, file_name)?;
    let rendered = render(stream.tokens());

    let output = output_path_for(input);
    fs::write(&output, rendered).map_err(|error| io_error(error, &output))?;

    info!(
        input = %input.display(),
        output = %output.display(),
        tokens = stream.len(),
        "wrote tokens"
    );

    Ok(output)
}
