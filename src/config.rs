//! Configuration constants for the tokenizer.
//!
//! All fixed language and output settings live here.

use std::path::{Path, PathBuf};

use tracing::Level;

/// Source file extension of the language.
pub const SOURCE_EXTENSION: &str = "jack";

/// Appended to the input's base name to form the output artifact.
pub const OUTPUT_SUFFIX: &str = "T.xml";

/// Largest integer constant representable in the language's 16-bit word.
pub const MAX_INTEGER: u16 = 32767;

/// Opening and closing markers of block comments.
pub const BLOCK_COMMENT_OPEN: &str = "/*";
pub const BLOCK_COMMENT_CLOSE: &str = "*/";

/// Line comment marker.
pub const LINE_COMMENT: &str = "//";

/// Character inserted between preprocessed lines.
pub const LINE_DELIMITER: char = ' ';

/// Log level used by the command line driver.
pub const DEFAULT_LOG_LEVEL: Level = Level::WARN;

/// True when `path` carries the language's source extension.
pub fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension == SOURCE_EXTENSION)
}

/// Derives the sibling output path for `input`: `Main.jack` becomes `MainT.xml`.
pub fn output_path_for(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    input.with_file_name(format!("{}{}", stem, OUTPUT_SUFFIX))
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::{has_source_extension, output_path_for};

    #[test]
    fn test_output_path_replaces_extension() {
        assert_eq!(
            output_path_for(Path::new("project/Main.jack")),
            PathBuf::from("project/MainT.xml")
        );
    }

    #[test]
    fn test_output_path_without_extension() {
        assert_eq!(output_path_for(Path::new("Square")), PathBuf::from("SquareT.xml"));
    }

    #[test]
    fn test_source_extension() {
        assert!(has_source_extension(Path::new("src/Main.jack")));
        assert!(!has_source_extension(Path::new("Main.vm")));
        assert!(!has_source_extension(Path::new("Main")));
    }

    #[test]
    fn test_output_path_only_strips_last_extension() {
        assert_eq!(
            output_path_for(Path::new("dir/Game.v2.jack")),
            PathBuf::from("dir/Game.v2T.xml")
        );
    }
}
