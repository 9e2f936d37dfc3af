//! Reads quiz text from a file or from piped standard input.
//!
//! The two sources mirror the two ways a quiz reaches the program: a
//! saved text file, or text pasted straight into a pipe. A failed read
//! leaves the caller exactly where it was; no session state exists yet.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Error reading the quiz source.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    File { path: PathBuf, source: io::Error },
    /// Standard input could not be read.
    Stdin(io::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::File { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            LoadError::Stdin(source) => write!(f, "failed to read piped input: {}", source),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::File { source, .. } => Some(source),
            LoadError::Stdin(source) => Some(source),
        }
    }
}

/// Reads the whole quiz file into memory.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String, LoadError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads pasted text from standard input until EOF.
pub fn read_stdin() -> Result<String, LoadError> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(LoadError::Stdin)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_its_path() {
        let err = read_file("definitely/not/here.txt").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("definitely/not/here.txt"));
        assert!(matches!(err, LoadError::File { .. }));
    }

    #[test]
    fn readable_file_round_trips() {
        let dir = std::env::temp_dir().join("textquiz-loader-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("quiz.txt");
        fs::write(&path, "1. Q?\nA. x\nB. y ✓\n").unwrap();
        assert_eq!(read_file(&path).unwrap(), "1. Q?\nA. x\nB. y ✓\n");
    }
}
