use std::result;

use thiserror::Error;

use crate::config::BusKind;

/// Errors surfaced by the MPRIS client.
///
/// Every getter, setter and subscription call returns one of these to its
/// immediate caller. Transport causes are kept as `zbus::Error` sources.
#[derive(Error, Debug)]
pub enum MprisError {
    /// The bus connection could not be established
    #[error("failed to connect to {bus}-bus: {source}")]
    ConnectionFailed {
        /// Bus that was being opened
        bus: BusKind,
        /// Underlying transport error
        #[source]
        source: zbus::Error,
    },

    /// Reading a remote property failed
    #[error("failed to get property \"{name}\": {source}")]
    PropertyReadFailed {
        /// Fully qualified property name
        name: String,
        /// Underlying transport error
        #[source]
        source: zbus::Error,
    },

    /// Writing a remote property failed
    #[error("failed to set property \"{name}\": {source}")]
    PropertyWriteFailed {
        /// Fully qualified property name
        name: String,
        /// Underlying transport error
        #[source]
        source: zbus::Error,
    },

    /// A dynamic value did not narrow to the expected type
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),

    /// Registering the signal match rule failed
    #[error("failed to add signal match option: {0}")]
    SubscriptionFailed(#[source] zbus::Error),

    /// Releasing the transport failed
    #[error("failed to close dbus connection: {0}")]
    CloseFailed(#[source] zbus::Error),
}

impl MprisError {
    /// Whether this error was caused by an unexpected value shape.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch(_))
    }
}

/// Narrowing failures of the dynamic value codec.
#[derive(Error, Debug)]
pub enum TypeMismatch {
    /// The value carried a different tag than requested
    #[error("{observed} could not be parsed to {expected}")]
    Tag {
        /// Tag of the value that was received
        observed: &'static str,
        /// Static type that was requested
        expected: &'static str,
    },

    /// A string did not name a known enumeration member
    #[error("\"{value}\" is not a valid {expected}")]
    UnknownVariant {
        /// Received string
        value: String,
        /// Enumeration that was requested
        expected: &'static str,
    },

    /// A string did not match the timestamp format
    #[error("could not parse time \"{input}\" as \"{format}\": {source}")]
    Timestamp {
        /// Received string
        input: String,
        /// Expected lexical format
        format: &'static str,
        /// Parser diagnostic
        #[source]
        source: chrono::ParseError,
    },
}

/// A specialized `Result` type for MPRIS operations.
pub type Result<T> = result::Result<T, MprisError>;
