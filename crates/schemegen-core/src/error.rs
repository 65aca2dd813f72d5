//! Error types for scheme resolution.
//!
//! [`SchemeError`] covers everything that can go wrong between parsed YAML and an
//! assembled [`SchemeDocument`](crate::SchemeDocument): a style flag without an
//! encoding, a source document with the wrong shape, or a writer failure while
//! rendering XML. File access errors live in the `schemegen` crate.

use thiserror::Error;

/// Errors produced while parsing sources or resolving a scheme.
#[derive(Debug, Error)]
pub enum SchemeError {
    /// A recognized style flag has no encoding in its style category.
    #[error("no encoding for option '{option}' in style category '{category}'")]
    MissingStyleEncoding {
        /// Style category that was searched (e.g. `font-type`).
        category: String,
        /// Abstract option name that was looked up (e.g. `bold-italic`).
        option: String,
    },

    /// A source document does not have the expected structure.
    #[error("malformed {context}: {message}")]
    MalformedSchema {
        /// Where the problem was found (e.g. `attribute 'KEYWORD'`).
        context: String,
        /// Description of what was wrong.
        message: String,
    },

    /// The source text is not valid YAML.
    #[error("YAML parse failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The XML writer failed.
    #[error("XML rendering failed: {0}")]
    Xml(String),
}

impl SchemeError {
    pub(crate) fn malformed(context: impl Into<String>, message: impl Into<String>) -> Self {
        SchemeError::MalformedSchema {
            context: context.into(),
            message: message.into(),
        }
    }
}

impl From<quick_xml::Error> for SchemeError {
    fn from(err: quick_xml::Error) -> Self {
        SchemeError::Xml(err.to_string())
    }
}

impl From<std::io::Error> for SchemeError {
    fn from(err: std::io::Error) -> Self {
        SchemeError::Xml(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for SchemeError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        SchemeError::Xml(err.to_string())
    }
}
