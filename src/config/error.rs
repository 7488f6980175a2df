use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while loading a `ClientConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The document is not valid TOML for this schema
    #[error("failed to parse TOML at '{location}': {details}")]
    Parse {
        /// File path or "string"
        location: String,
        /// Parser diagnostic
        details: String,
    },

    /// A field holds a value the client cannot use
    #[error("invalid config field '{field}': {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },
}
