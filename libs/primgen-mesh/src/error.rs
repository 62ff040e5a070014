//! # Mesh Errors
//!
//! Error types for mesh generation and compaction.

use thiserror::Error;

/// Errors that can occur during mesh generation or compaction.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A generator parameter violates its contract. Raised before any
    /// geometry is built; a failed generator never returns a partial mesh.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// A face references a vertex index outside `[1, vertex_count]`.
    /// This indicates a generator bug and is not recoverable.
    #[error("Face index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}

impl MeshError {
    /// Creates a parameter validation error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}
