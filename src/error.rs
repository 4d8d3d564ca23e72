//! All error types for the resxgen crate.
//!
//! Every failure is immediate and aborts model construction. Callers (a
//! build script, the CLI) are expected to surface it as a diagnostic.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no resource source was supplied")]
    NullSource,

    #[error("invalid resource path `{0}`")]
    InvalidPath(String),

    #[error("malformed resource document: {message}")]
    MalformedDocument {
        message: String,
        #[source]
        source: Option<quick_xml::Error>,
    },

    #[error("resource entry #{index} is missing its 'name' attribute")]
    MissingNameAttribute { index: usize },

    #[error("resource entry #{index} has an empty name")]
    EmptyResourceName { index: usize },

    #[error("resource `{name}` is missing its 'value' element")]
    MissingValueElement { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no output directory configured and OUT_DIR is not set")]
    MissingOutDir,
}

/// The category of an [`Error`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NullSource,
    InvalidPath,
    MalformedDocument,
    MissingNameAttribute,
    EmptyResourceName,
    MissingValueElement,
    Io,
    MissingOutDir,
}

impl Error {
    /// Creates a malformed-document error with an optional XML reader error.
    pub fn malformed(message: impl Into<String>, source: Option<quick_xml::Error>) -> Self {
        Error::MalformedDocument {
            message: message.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NullSource => ErrorKind::NullSource,
            Error::InvalidPath(_) => ErrorKind::InvalidPath,
            Error::MalformedDocument { .. } => ErrorKind::MalformedDocument,
            Error::MissingNameAttribute { .. } => ErrorKind::MissingNameAttribute,
            Error::EmptyResourceName { .. } => ErrorKind::EmptyResourceName,
            Error::MissingValueElement { .. } => ErrorKind::MissingValueElement,
            Error::Io(_) => ErrorKind::Io,
            Error::MissingOutDir => ErrorKind::MissingOutDir,
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(value: quick_xml::Error) -> Self {
        let message = value.to_string();
        Error::malformed(message, Some(value))
    }
}
