//! # Serialization Errors
//!
//! Error types for reading and writing the text mesh format.

use primgen_mesh::MeshError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing mesh files.
#[derive(Debug, Error)]
pub enum ObjError {
    /// The destination or source path could not be accessed.
    #[error("I/O error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of the text format could not be parsed. `line` is 1-based.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Compaction before writing failed (invalid face indices).
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

impl ObjError {
    /// Creates a parse error for the given 1-based line number.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
