//! Error types for the catalog crate.
//!
//! This is the only crate in the workspace with a typed error enum: loading
//! a catalog touches the filesystem and a JSON parser, both of which can
//! fail. The preference/scoring crates downstream are total functions and
//! return plain values.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or assembling a recipe catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be read from disk
    #[error("Failed to read catalog file {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents were not valid JSON for the expected shape
    #[error("Invalid JSON in {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Inline JSON (no file involved) failed to parse
    #[error("Invalid catalog JSON")]
    JsonInline(#[from] serde_json::Error),

    /// Two recipes carried the same identifier
    #[error("Duplicate recipe id: {id}")]
    DuplicateId { id: String },

    /// A recipe was missing its identifier entirely
    #[error("Recipe at index {index} has an empty id")]
    EmptyId { index: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
