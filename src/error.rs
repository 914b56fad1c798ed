//! Error type for the library surface.
//!
//! Only conditions that abort an extraction live here. Unparseable content,
//! unknown module types and types without a detective all produce an empty
//! dependency list instead.

use std::{io, path::PathBuf};

use crate::registry::ModuleType;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The path-oriented entry point could not read its file.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error, untouched.
        #[source]
        source: io::Error,
    },

    /// A detective that parses text on its own hit a syntax error.
    #[error("Failed to parse {module_type} source: {message}")]
    Parse {
        module_type: ModuleType,
        message: String,
    },

    /// A text-only detective was handed a pre-parsed program.
    #[error("The {module_type} detective needs source text, not a parsed program")]
    UnsupportedInput { module_type: ModuleType },

    /// Detective options did not match the detective's option schema.
    #[error("Invalid {module_type} detective options: {source}")]
    InvalidOptions {
        module_type: ModuleType,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// The IO error kind behind a read failure, if this is one.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Error::Read { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}
