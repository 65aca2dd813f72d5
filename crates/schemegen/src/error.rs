//! Build error types.

use std::path::PathBuf;

use schemegen_core::SchemeError;

/// Errors that abort a build.
///
/// Every variant carries the path of the document involved. Files written
/// before the failure are left in place.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A required source document does not exist.
    #[error("missing input document {}: {source}", .path.display())]
    MissingInputDocument {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A source document exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An output file or directory could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Path that was written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A source document failed to parse or resolve.
    #[error("{}: {source}", .path.display())]
    Scheme {
        /// Document being parsed, or scheme being produced.
        path: PathBuf,
        /// Underlying resolution error.
        source: SchemeError,
    },

    /// The base theme JSON is not valid JSON.
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        /// Path of the JSON document.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// The base theme JSON is valid but not a JSON object.
    #[error("{} must contain a JSON object", .path.display())]
    NotAnObject {
        /// Path of the JSON document.
        path: PathBuf,
    },
}
