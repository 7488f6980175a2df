//! Client configuration.
//!
//! Selects which message bus the facades connect to and how much the
//! signal subscription engine may buffer ahead of its consumer. All fields
//! have defaults, so an empty TOML document is a valid configuration.

mod error;
mod loading;

pub use error::ConfigError;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Message bus a facade connects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BusKind {
    /// Per-login session bus, where media players normally register
    #[default]
    Session,

    /// System-wide bus
    System,
}

impl fmt::Display for BusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Session => write!(f, "session"),
            Self::System => write!(f, "system"),
        }
    }
}

/// Configuration shared by `Player` and `MediaPlayer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Bus opened by `connect`.
    pub bus: BusKind,

    /// Capacity of a subscription's output channel.
    ///
    /// With the default of 1 the listen loop blocks on each emitted value
    /// until the consumer has taken the previous one.
    pub signal_buffer: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            bus: BusKind::Session,
            signal_buffer: 1,
        }
    }
}
