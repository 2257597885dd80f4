// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{error, fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum SeqFinderError {
    // An input file could not be opened or read; the path is kept for the message.
    Input { path: PathBuf, source: io::Error },
    // Any other I/O failure (typically writing the report).
    Io(io::Error),
    // The target file yielded no sequence once trimmed. Holds the target's name.
    EmptyTarget(String),
}

impl SeqFinderError {
    pub fn input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SeqFinderError::Input {
            path: path.into(),
            source,
        }
    }
}

// Allows '?' on plain io::Result values, e.g. when writing to stdout.

impl From<io::Error> for SeqFinderError {
    fn from(e: io::Error) -> Self {
        SeqFinderError::Io(e)
    }
}

impl fmt::Display for SeqFinderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeqFinderError::Input { path, source } => {
                write!(f, "Cannot read {}: {}", path.display(), source)
            }
            SeqFinderError::Io(e) => write!(f, "I/O error: {}", e),
            SeqFinderError::EmptyTarget(name) => {
                write!(f, "Target \"{}\" has an empty sequence", name)
            }
        }
    }
}

impl error::Error for SeqFinderError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SeqFinderError::Input { source, .. } => Some(source),
            SeqFinderError::Io(e) => Some(e),
            SeqFinderError::EmptyTarget(_) => None,
        }
    }
}
