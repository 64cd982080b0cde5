//! Error types for per-file analysis.
//!
//! A directory scan never aborts because one file is broken. The per-file
//! pipeline reports failures as values, the aggregator counts the file and
//! records its path, and the scan moves on. That makes the error type here
//! deliberately small: it carries the offending path and a human-readable
//! reason, nothing that would stop it from being cloned and compared.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// A file the pipeline had to skip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnparsableFile {
    /// The file could not be read from disk
    #[error("could not read {path}: {message}")]
    Read { path: PathBuf, message: String },

    /// The content is not syntactically valid Python
    #[error("could not parse {path}: {message}")]
    Syntax { path: PathBuf, message: String },
}

impl UnparsableFile {
    /// Wrap an I/O failure for the given path.
    pub fn read(path: impl Into<PathBuf>, source: &std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Wrap a parser rejection for the given path.
    pub fn syntax(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Syntax {
            path: path.into(),
            message: message.into(),
        }
    }

    /// The file this failure refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Syntax { path, .. } => path,
        }
    }
}
