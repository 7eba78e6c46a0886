//! # Mesh Errors
//!
//! Error types for cone construction, mesh generation and OBJ export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building, generating or writing a cone mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A construction input violated its constraint
    #[error("Invalid {field}: {constraint} (got {value})")]
    Validation {
        field: &'static str,
        constraint: &'static str,
        value: f64,
    },

    /// The hemisphere radicand went negative beyond floating-point drift
    #[error("Numeric domain fault at ring {ring}: length² - radius² = {radicand}")]
    NumericDomain { ring: i32, radicand: f64 },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Invalid mesh topology
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// The export target directory does not exist
    #[error("Target directory does not exist: {}", path.display())]
    PathNotFound { path: PathBuf },

    /// Writing the export file failed
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MeshError {
    /// Creates a validation error for a named field.
    pub fn validation(field: &'static str, constraint: &'static str, value: f64) -> Self {
        Self::Validation {
            field,
            constraint,
            value,
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates an I/O error bound to the path being written.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
