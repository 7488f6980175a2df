//! Typed client for MPRIS media players.
//!
//! [`Player`] covers playback control, playback properties and the `Seeked`
//! signal; [`MediaPlayer`] covers the root interface. Both talk to the player
//! through a [`Transport`], which is a [`DbusTransport`] unless one is
//! injected.

mod error;
mod media_player;
mod metadata;
mod player;
mod remote;
mod signals;
mod types;

/// MPRIS wire names: object path, interfaces, members and metadata keys.
pub mod protocol;

/// Message bus boundary.
pub mod transport;

/// Dynamic values and narrowing.
pub mod value;

#[cfg(test)]
mod tests;

pub use error::{MprisError, Result, TypeMismatch};
pub use media_player::MediaPlayer;
pub use metadata::Metadata;
pub use player::Player;
pub use signals::PositionStream;
pub use transport::{DbusTransport, RawSignal, SignalFilter, SignalStream, Transport};
pub use types::{LoopStatus, PlaybackStatus};
pub use value::{ObjectPath, Value};
